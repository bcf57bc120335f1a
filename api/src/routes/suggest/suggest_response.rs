use chat_core::SuggestionFeed;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Response payload for /suggest/{user_id}.
#[derive(Debug, Serialize)]
pub struct SuggestResponse {
    pub user_id: String,
    pub suggestions: SuggestionFeed,
    pub generated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_carries_generation_timestamp() {
        let body = serde_json::to_value(SuggestResponse {
            user_id: "alice".to_string(),
            suggestions: SuggestionFeed::default(),
            generated_at: Utc::now(),
        })
        .unwrap();
        assert!(body["generated_at"].is_string());
        assert_eq!(body["user_id"], "alice");
    }
}
