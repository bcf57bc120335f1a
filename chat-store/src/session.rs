use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Deterministic session id for one chat exchange.
///
/// UUIDv5 over `{user_id}{timestamp}` so retries of the same exchange map to
/// the same session.
pub fn session_id(user_id: &str, at: DateTime<Utc>) -> String {
    let raw = format!("{user_id}{}", at.to_rfc3339());
    Uuid::new_v5(&Uuid::NAMESPACE_URL, raw.as_bytes()).to_string()
}
