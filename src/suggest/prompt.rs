//! Suggestion request builder
//!
//! Turns the user's raw hint into a well-formed request for the configured
//! contract mode. An empty hint short-circuits here, before any network I/O.

use tracing::debug;

use super::{ResponseMode, SuggestError};
use crate::llm::{SchemaDescriptor, SuggestionRequest};

/// Build the outbound request for a hint under the given mode
///
/// The mode is a deployment-time decision, never switched per call: it
/// changes how the validator must read the reply.
pub fn build_request(hint: &str, mode: ResponseMode) -> Result<SuggestionRequest, SuggestError> {
    let hint = hint.trim();
    if hint.is_empty() {
        debug!("build_request: empty hint, short-circuiting");
        return Err(SuggestError::EmptyHint);
    }

    debug!(?mode, hint_len = hint.len(), "build_request: called");
    let request = match mode {
        ResponseMode::Unconstrained => SuggestionRequest {
            instruction: format!(
                "You are a helpful assistant. Suggest a short, specific to-do task \
                 based on vague user input. Reply with the task on a single line, \
                 nothing else.\nInput: {hint}"
            ),
            schema: None,
        },
        ResponseMode::Structured => SuggestionRequest {
            instruction: format!("Suggest a todo task based on: {hint}"),
            schema: Some(SchemaDescriptor::task_suggestion()),
        },
    };

    Ok(request)
}
