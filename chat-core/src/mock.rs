//! Keyword-table responder used when no model endpoint is available.

/// Fixed response table, checked in order by substring containment.
const MOCK_RESPONSES: [(&str, &str); 4] = [
    (
        "hello",
        "Hello! I'm your coding assistant. How can I help you today?",
    ),
    (
        "python",
        "Python is a great language! What would you like to build?",
    ),
    (
        "javascript",
        "JavaScript is perfect for web development. Are you working on frontend or backend?",
    ),
    (
        "help",
        "I can help you with Python, JavaScript, React, and more. What's your project about?",
    ),
];

const FALLBACK: &str =
    "I'm here to help with your coding questions. What would you like to build today?";

/// Mock completion: first table key contained in the lowercased message
/// wins; generic fallback otherwise.
pub fn mock_completion(message: &str) -> &'static str {
    let lower = message.to_lowercase();
    for (key, response) in MOCK_RESPONSES {
        if lower.contains(key) {
            return response;
        }
    }
    FALLBACK
}
