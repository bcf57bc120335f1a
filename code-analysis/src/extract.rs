//! Fenced code block extraction from free-form text.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// One fenced code region, in order of appearance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CodeBlock {
    /// Lowercased language tag; `"plaintext"` when the fence had none.
    pub language: String,
    /// Block body with leading/trailing whitespace trimmed.
    pub code: String,
}

// `(?s)` lets `.` span newlines so bodies may contain blank lines.
static FENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)```(\w+)?\n(.*?)```").unwrap());

/// Extract all triple-backtick fenced blocks from `text`.
///
/// Blocks are returned left-to-right by opening fence. An unterminated fence
/// fails to match and yields nothing for that region.
pub fn extract_code_blocks(text: &str) -> Vec<CodeBlock> {
    FENCE
        .captures_iter(text)
        .map(|cap| {
            let language = cap
                .get(1)
                .map(|m| m.as_str().to_ascii_lowercase())
                .unwrap_or_else(|| "plaintext".to_string());
            CodeBlock {
                language,
                code: cap[2].trim().to_string(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_yields_nothing() {
        assert!(extract_code_blocks("no code here").is_empty());
    }

    #[test]
    fn single_tagged_block() {
        let blocks = extract_code_blocks("```python\nprint(1)\n```");
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].language, "python");
        assert_eq!(blocks[0].code, "print(1)");
    }

    #[test]
    fn untagged_block_defaults_to_plaintext() {
        let blocks = extract_code_blocks("```\nhello\n```");
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].language, "plaintext");
        assert_eq!(blocks[0].code, "hello");
    }

    #[test]
    fn tag_is_lowercased() {
        let blocks = extract_code_blocks("```Python\nx = 1\n```");
        assert_eq!(blocks[0].language, "python");
    }

    #[test]
    fn blocks_in_order_of_appearance() {
        let text = "intro\n```js\na();\n```\nmiddle\n```python\nb()\n```\n";
        let blocks = extract_code_blocks(text);
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].language, "js");
        assert_eq!(blocks[1].language, "python");
    }

    #[test]
    fn body_may_contain_blank_lines() {
        let blocks = extract_code_blocks("```python\na = 1\n\nb = 2\n```");
        assert_eq!(blocks[0].code, "a = 1\n\nb = 2");
    }

    #[test]
    fn unterminated_fence_yields_no_block() {
        assert!(extract_code_blocks("```python\nprint(1)\n").is_empty());
    }
}
