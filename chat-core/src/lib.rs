//! Request-scoped chat pipeline: context assembly and response
//! post-processing.
//!
//! Everything here is a pure function over already-fetched data — profile
//! and history lookups happen in the HTTP layer, completion happens in
//! `llm-service`. The flow per request:
//!
//! 1. [`build_context`] merges request overrides, the stored profile, and
//!    defaults into one [`ConversationContext`].
//! 2. [`build_prompt`] renders the generation prompt from that context and
//!    recent history.
//! 3. The completion text (live model or [`mock_completion`]) is handed to
//!    [`postprocess_response`], which extracts code blocks, runs the
//!    per-language checkers, and assembles the final [`ChatResponse`].

mod context;
mod mock;
mod postprocess;
mod prompt;
mod suggest;
mod topics;

pub use context::{ContextOverrides, ConversationContext, build_context};
pub use mock::mock_completion;
pub use postprocess::{ChatResponse, postprocess_response};
pub use prompt::{build_prompt, format_history};
pub use suggest::{SuggestionFeed, default_feed, personalized_feed};
pub use topics::derive_topics;
