//! Stored document shapes.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Self-reported developer skill level; drives tone and suggestions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillLevel {
    Beginner,
    #[default]
    Intermediate,
    Advanced,
}

impl SkillLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            SkillLevel::Beginner => "beginner",
            SkillLevel::Intermediate => "intermediate",
            SkillLevel::Advanced => "advanced",
        }
    }
}

/// Stored user profile; one document per user, upserted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub user_id: String,
    #[serde(default)]
    pub skill_level: SkillLevel,
    /// Preference category (e.g. `languages`, `frameworks`) to ordered values.
    #[serde(default)]
    pub preferences: BTreeMap<String, Vec<String>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UserProfile {
    /// Fresh profile with defaults, timestamped now.
    pub fn new(user_id: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            user_id: user_id.into(),
            skill_level: SkillLevel::default(),
            preferences: BTreeMap::new(),
            created_at: now,
            updated_at: now,
        }
    }
}

/// Speaker of one conversation turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::User => "User",
            Role::Assistant => "Assistant",
        }
    }
}

/// One message inside a conversation entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: Role,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

/// One persisted chat exchange. Append-only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationEntry {
    pub user_id: String,
    pub session_id: String,
    pub messages: Vec<ChatTurn>,
    pub created_at: DateTime<Utc>,
}
