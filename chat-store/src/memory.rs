//! In-memory document store.

use std::collections::HashMap;

use tokio::sync::RwLock;
use tracing::debug;

use crate::models::{ConversationEntry, UserProfile};

/// Process-local store for profiles and conversation entries.
///
/// Wrap in `Arc` and share; all methods take `&self`. Conversations are kept
/// per user in insertion order, which is also chronological since entries
/// are only appended at exchange time.
#[derive(Default)]
pub struct MemoryStore {
    profiles: RwLock<HashMap<String, UserProfile>>,
    conversations: RwLock<HashMap<String, Vec<ConversationEntry>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stored-profile lookup: `None` for unknown users.
    pub async fn profile(&self, user_id: &str) -> Option<UserProfile> {
        self.profiles.read().await.get(user_id).cloned()
    }

    /// Insert or replace a profile, refreshing `updated_at`.
    pub async fn upsert_profile(&self, mut profile: UserProfile) {
        profile.updated_at = chrono::Utc::now();
        debug!(user_id = %profile.user_id, "upserting profile");
        self.profiles
            .write()
            .await
            .insert(profile.user_id.clone(), profile);
    }

    /// Ensure a default profile exists for `user_id`; existing ones are kept.
    pub async fn ensure_profile(&self, user_id: &str) {
        let mut profiles = self.profiles.write().await;
        profiles
            .entry(user_id.to_string())
            .or_insert_with(|| UserProfile::new(user_id));
    }

    /// Append one conversation entry for its user.
    pub async fn append_conversation(&self, entry: ConversationEntry) {
        debug!(user_id = %entry.user_id, session_id = %entry.session_id, "appending conversation");
        self.conversations
            .write()
            .await
            .entry(entry.user_id.clone())
            .or_default()
            .push(entry);
    }

    /// Recent-history lookup: up to `limit` entries, most-recent-first.
    pub async fn recent_conversations(&self, user_id: &str, limit: usize) -> Vec<ConversationEntry> {
        let conversations = self.conversations.read().await;
        let Some(entries) = conversations.get(user_id) else {
            return Vec::new();
        };
        entries.iter().rev().take(limit).cloned().collect()
    }
}
