//! Document store for user profiles and conversation history.
//!
//! The store is an in-process document map behind `tokio::sync::RwLock`:
//! construct one [`MemoryStore`], wrap it in `Arc`, and pass clones to
//! dependents. Conversation entries are append-only; profiles are upserted.

mod memory;
mod models;
mod session;

pub use memory::MemoryStore;
pub use models::{ChatTurn, ConversationEntry, Role, SkillLevel, UserProfile};
pub use session::session_id;
