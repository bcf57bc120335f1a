//! Generation context assembly.

use std::collections::BTreeMap;

use chat_store::{SkillLevel, UserProfile};
use serde_json::{Map, Value};

/// Context fed into prompt building for one request. Never persisted.
#[derive(Debug, Clone, Default)]
pub struct ConversationContext {
    pub skill_level: SkillLevel,
    /// Preference category (e.g. `languages`) to ordered values.
    pub preferences: BTreeMap<String, Vec<String>>,
    /// Free-form request-supplied context fields.
    pub extra: Map<String, Value>,
}

/// Request-level overrides, all optional.
#[derive(Debug, Clone, Default)]
pub struct ContextOverrides {
    pub skill_level: Option<SkillLevel>,
    pub preferences: Option<BTreeMap<String, Vec<String>>>,
    /// Open request context map, merged last.
    pub extra: Map<String, Value>,
}

/// Merge request overrides, the stored profile, and defaults.
///
/// Resolution per field: explicit request value wins, else the stored
/// profile's value, else the default (`intermediate`, empty preferences).
/// The open `extra` map is applied last with request values taking
/// precedence — a top-level key fully replaces the resolved one, including
/// `skill_level` and `preferences` themselves when present and well-formed.
///
/// Pure function: no I/O, operates on already-fetched data.
pub fn build_context(
    overrides: &ContextOverrides,
    profile: Option<&UserProfile>,
) -> ConversationContext {
    let skill_level = overrides
        .skill_level
        .or(profile.map(|p| p.skill_level))
        .unwrap_or_default();

    let preferences = overrides
        .preferences
        .clone()
        .or_else(|| profile.map(|p| p.preferences.clone()))
        .unwrap_or_default();

    let mut context = ConversationContext {
        skill_level,
        preferences,
        extra: Map::new(),
    };

    // Last-write-wins at top level; no deep merge.
    for (key, value) in &overrides.extra {
        match key.as_str() {
            "skill_level" => {
                if let Ok(level) = serde_json::from_value::<SkillLevel>(value.clone()) {
                    context.skill_level = level;
                    continue;
                }
            }
            "preferences" => {
                if let Ok(prefs) =
                    serde_json::from_value::<BTreeMap<String, Vec<String>>>(value.clone())
                {
                    context.preferences = prefs;
                    continue;
                }
            }
            _ => {}
        }
        context.extra.insert(key.clone(), value.clone());
    }

    context
}
