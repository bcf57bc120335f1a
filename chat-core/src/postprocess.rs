//! Response post-processing: code extraction, per-block analysis, and
//! follow-up/suggestion derivation.

use code_analysis::{CodeBlock, analyze_code, extract_code_blocks};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Structured chat response returned to the client.
///
/// List fields that end up empty are represented as absent, not as empty
/// collections.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestions: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code_blocks: Option<Vec<CodeBlock>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub follow_up_questions: Option<Vec<String>>,
    pub error_detected: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_details: Option<Vec<String>>,
}

/// Assemble the final [`ChatResponse`] from raw completion text.
///
/// Pipeline, in order:
/// 1. extract fenced code blocks;
/// 2. analyze each block according to its language tag (unrecognized tags
///    are skipped), accumulating error and warning details in block order —
///    one block's findings never abort its siblings;
/// 3. derive follow-up questions from independent keyword checks against
///    the lowercased original user message;
/// 4. derive generic suggestions when code blocks are present.
pub fn postprocess_response(raw_text: &str, original_message: &str) -> ChatResponse {
    let code_blocks = extract_code_blocks(raw_text);

    let mut error_details: Vec<String> = Vec::new();
    for block in &code_blocks {
        if let Some(result) = analyze_code(&block.code, &block.language) {
            debug!(
                language = %block.language,
                errors = result.errors.len(),
                warnings = result.warnings.len(),
                "analyzed code block"
            );
            error_details.extend(result.detail_strings());
        }
    }

    let lower = original_message.to_lowercase();
    let mut follow_up_questions = Vec::new();
    if lower.contains("web") || lower.contains("app") {
        follow_up_questions.push("Are you building a web application or mobile app?".to_string());
    }
    if lower.contains("database") {
        follow_up_questions.push("Which database are you planning to use?".to_string());
    }
    if lower.contains("api") {
        follow_up_questions.push("Do you need authentication for your API?".to_string());
    }

    let mut suggestions = Vec::new();
    if !code_blocks.is_empty() {
        suggestions.push("Consider adding error handling to your code".to_string());
        suggestions.push("You might want to add logging for debugging".to_string());
        if raw_text.contains("async") {
            suggestions.push("Don't forget to handle async errors properly".to_string());
        }
    }

    ChatResponse {
        response: raw_text.to_string(),
        suggestions: none_if_empty(suggestions),
        code_blocks: none_if_empty(code_blocks),
        follow_up_questions: none_if_empty(follow_up_questions),
        error_detected: !error_details.is_empty(),
        error_details: none_if_empty(error_details),
    }
}

fn none_if_empty<T>(items: Vec<T>) -> Option<Vec<T>> {
    if items.is_empty() { None } else { Some(items) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_response_has_no_blocks_or_errors() {
        let response = postprocess_response("Just an explanation.", "tell me more");
        assert!(response.code_blocks.is_none());
        assert!(!response.error_detected);
        assert!(response.error_details.is_none());
        assert!(response.suggestions.is_none());
    }

    #[test]
    fn python_syntax_error_is_surfaced() {
        let raw = "Try this:\n```python\ndef f(:\n  pass\n```";
        let response = postprocess_response(raw, "python help");
        assert!(response.error_detected);
        let details = response.error_details.unwrap();
        assert!(!details.is_empty());
        assert_eq!(response.code_blocks.unwrap().len(), 1);
    }

    #[test]
    fn unrecognized_language_is_skipped() {
        let raw = "```rust\nfn broken( {\n```";
        let response = postprocess_response(raw, "hi");
        assert!(!response.error_detected);
        assert!(response.code_blocks.is_some());
    }

    #[test]
    fn code_blocks_trigger_generic_suggestions() {
        let raw = "```js\nlet x = 1;\n```";
        let response = postprocess_response(raw, "hi");
        let suggestions = response.suggestions.unwrap();
        assert_eq!(suggestions[0], "Consider adding error handling to your code");
        assert_eq!(suggestions[1], "You might want to add logging for debugging");
        assert_eq!(suggestions.len(), 2);
    }

    #[test]
    fn async_mention_adds_third_suggestion() {
        let raw = "```js\nasync function f() { return 1; }\n```";
        let response = postprocess_response(raw, "hi");
        let suggestions = response.suggestions.unwrap();
        assert_eq!(suggestions.len(), 3);
        assert!(suggestions[2].contains("async"));
    }

    #[test]
    fn follow_ups_are_independent_and_ordered() {
        let response = postprocess_response("ok", "a web app with a database and an api");
        let questions = response.follow_up_questions.unwrap();
        assert_eq!(questions.len(), 3);
        assert!(questions[0].contains("web application or mobile app"));
        assert!(questions[1].contains("Which database"));
        assert!(questions[2].contains("authentication"));
    }

    #[test]
    fn js_warnings_count_as_error_details() {
        let raw = "```js\nconsole.log(x);\n```";
        let response = postprocess_response(raw, "hi");
        assert!(response.error_detected);
        let details = response.error_details.unwrap();
        assert!(details[0].contains("console.log"));
    }
}
