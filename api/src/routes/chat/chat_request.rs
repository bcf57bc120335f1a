use std::collections::BTreeMap;

use chat_core::ContextOverrides;
use chat_store::SkillLevel;
use serde::Deserialize;
use serde_json::{Map, Value};

/// Request payload for /chat.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    /// Natural language message to the assistant.
    pub message: String,
    /// Caller identity; `anonymous` skips profile lookup and persistence.
    #[serde(default = "anonymous")]
    pub user_id: String,
    /// Per-request skill level, overriding the stored profile.
    #[serde(default)]
    pub skill_level: Option<SkillLevel>,
    /// Per-request preferences, replacing the stored profile's wholesale.
    #[serde(default)]
    pub preferences: Option<BTreeMap<String, Vec<String>>>,
    /// Open per-request context. Recognized keys (`skill_level`,
    /// `preferences`) override the stored profile; everything else is
    /// carried through as-is.
    #[serde(default)]
    pub context: Map<String, Value>,
}

impl ChatRequest {
    /// Context overrides carried by this request. The open `context` map is
    /// merged after the typed fields, so a `skill_level` key inside it wins
    /// over the top-level field.
    pub fn overrides(&self) -> ContextOverrides {
        ContextOverrides {
            skill_level: self.skill_level,
            preferences: self.preferences.clone(),
            extra: self.context.clone(),
        }
    }
}

fn anonymous() -> String {
    "anonymous".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chat_core::build_context;

    #[test]
    fn user_id_defaults_to_anonymous() {
        let req: ChatRequest = serde_json::from_str(r#"{"message":"hi"}"#).unwrap();
        assert_eq!(req.user_id, "anonymous");
        assert!(req.skill_level.is_none());
        assert!(req.preferences.is_none());
        assert!(req.context.is_empty());
    }

    #[test]
    fn context_map_is_passed_through() {
        let req: ChatRequest =
            serde_json::from_str(r#"{"message":"hi","context":{"skill_level":"beginner"}}"#)
                .unwrap();
        assert_eq!(req.context["skill_level"], "beginner");
    }

    #[test]
    fn top_level_overrides_reach_the_context() {
        let req: ChatRequest = serde_json::from_str(
            r#"{"message":"hi","skill_level":"beginner","preferences":{"languages":["Rust"]}}"#,
        )
        .unwrap();
        let ctx = build_context(&req.overrides(), None);
        assert_eq!(ctx.skill_level, SkillLevel::Beginner);
        assert_eq!(ctx.preferences["languages"], vec!["Rust".to_string()]);
    }

    #[test]
    fn context_map_key_wins_over_top_level_field() {
        let req: ChatRequest = serde_json::from_str(
            r#"{"message":"hi","skill_level":"beginner","context":{"skill_level":"advanced"}}"#,
        )
        .unwrap();
        let ctx = build_context(&req.overrides(), None);
        assert_eq!(ctx.skill_level, SkillLevel::Advanced);
    }
}
