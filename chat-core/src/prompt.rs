//! Prompt assembly for the completion model.

use chat_store::ChatTurn;

use crate::context::ConversationContext;

/// History turns included in the prompt.
const HISTORY_WINDOW: usize = 10;

/// Render recent history as `Role: content` lines, last
/// [`HISTORY_WINDOW`] turns only.
pub fn format_history(turns: &[ChatTurn]) -> String {
    let start = turns.len().saturating_sub(HISTORY_WINDOW);
    turns[start..]
        .iter()
        .map(|turn| format!("{}: {}", turn.role.as_str(), turn.content))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Build the full generation prompt.
///
/// Shape: system instructions derived from the context, optionally the
/// recent conversation, then `User: {message}\nAssistant:` — the completion
/// is expected to stop at the next `User:` turn.
pub fn build_prompt(message: &str, context: &ConversationContext, history: &[ChatTurn]) -> String {
    let languages = context
        .preferences
        .get("languages")
        .filter(|v| !v.is_empty())
        .map(|v| v.join(", "))
        .unwrap_or_else(|| "Python, JavaScript".to_string());
    let frameworks = context
        .preferences
        .get("frameworks")
        .map(|v| v.join(", "))
        .unwrap_or_default();

    let mut prompt = format!(
        "You are an expert coding assistant. The user is a {} developer.\n\
         Preferred languages: {languages}\n\
         Preferred frameworks: {frameworks}\n\n\
         Provide helpful, accurate code examples and explanations.\n\
         Ask clarifying questions when needed.\n\
         Check code for errors and suggest improvements.",
        context.skill_level.as_str()
    );

    if !history.is_empty() {
        prompt.push_str("\n\nRecent conversation:\n");
        prompt.push_str(&format_history(history));
    }

    prompt.push_str(&format!("\n\nUser: {message}\nAssistant:"));
    prompt
}
