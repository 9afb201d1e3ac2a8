//! Suggestion pipeline error taxonomy

use thiserror::Error;

/// Classified outcome of a failed suggestion request
///
/// Every stage of the pipeline returns one of these instead of panicking or
/// letting a transport error escape. `MissingCredential` is the only kind
/// that is fatal at startup; everything else is a per-call classification
/// the caller is expected to display and move on from.
#[derive(Debug, Error)]
pub enum SuggestError {
    /// The hint was empty after trimming; no network call was made.
    #[error("hint is empty, nothing to suggest")]
    EmptyHint,

    /// The endpoint credential is not configured. Raised at startup, never per call.
    #[error("missing credential: set the {env} environment variable")]
    MissingCredential { env: String },

    /// Transport or HTTP failure talking to the generative endpoint.
    #[error("upstream unavailable (status {status:?}): {message}")]
    UpstreamUnavailable { status: Option<u16>, message: String },

    /// Unconstrained mode: the reply was blank after normalization.
    #[error("model returned an empty suggestion")]
    EmptySuggestion,

    /// Structured mode: the reply could not be decoded as JSON.
    #[error("model reply is not valid JSON: {0}")]
    MalformedStructuredReply(String),

    /// Structured mode: decodable, but the required fields are missing,
    /// empty, or not strings.
    #[error("model reply does not satisfy the suggestion contract: {0}")]
    SchemaViolation(String),
}

impl SuggestError {
    /// True for failures of the transport, not of the reply content
    pub fn is_transport(&self) -> bool {
        matches!(self, SuggestError::UpstreamUnavailable { .. })
    }

    /// True when the model replied but the reply was rejected
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            SuggestError::EmptySuggestion
                | SuggestError::MalformedStructuredReply(_)
                | SuggestError::SchemaViolation(_)
        )
    }

    /// Upstream HTTP status, if this is a transport failure that carried one
    pub fn upstream_status(&self) -> Option<u16> {
        match self {
            SuggestError::UpstreamUnavailable { status, .. } => *status,
            _ => None,
        }
    }
}
