//! AI-assisted suggestion pipeline
//!
//! hint -> request builder -> generative client -> normalizer ->
//! validator/parser -> (accept -> applier stages the draft) |
//! (reject -> classified error, draft untouched).
//!
//! The generative model is treated as an untrusted, possibly-malformed text
//! source; this module's job is making its output safe to consume.

use serde::{Deserialize, Serialize};
use tracing::debug;

pub mod applier;
mod error;
mod normalize;
mod parse;
mod prompt;

pub use applier::{DraftSession, SuggestionToken};
pub use error::SuggestError;
pub use normalize::normalize;
pub use parse::classify;
pub use prompt::build_request;

use crate::llm::GenerativeClient;

/// Reply contract mode, fixed once per deployment
///
/// Changing this changes how the validator reads every reply, so it lives in
/// configuration rather than being chosen (or guessed) per call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseMode {
    /// Plain-text reply; the whole reply is the suggested title
    Unconstrained,
    /// Schema-constrained JSON reply with title and description
    Structured,
}

/// A not-yet-committed title/description pair
///
/// Transient and never persisted: acceptance only stages values into the
/// form the user still controls, it never writes to the task store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SuggestionDraft {
    pub title: String,
    pub description: String,
}

/// Run the suggestion pipeline once for a hint
///
/// One outbound call, awaited to completion or failure, no retry and no
/// partial results. Every rejection comes back as a classified
/// [`SuggestError`]; nothing escapes as a panic or an unclassified fault.
pub async fn suggest(
    client: &dyn GenerativeClient,
    mode: ResponseMode,
    hint: &str,
) -> Result<SuggestionDraft, SuggestError> {
    debug!(?mode, "suggest: called");
    let request = build_request(hint, mode)?;
    let raw = client.generate(request).await?;
    let normalized = normalize(&raw);
    parse::classify(&normalized, mode)
}
