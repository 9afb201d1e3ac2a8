//! Response validator/parser
//!
//! Classifies a normalized reply as an accepted suggestion draft or a
//! specific rejection. The two modes are independent strategies dispatched
//! on `ResponseMode`; there is deliberately no "try JSON, fall back to
//! text" heuristic, and no partial acceptance.

use serde_json::Value;
use tracing::debug;

use super::{ResponseMode, SuggestError, SuggestionDraft};

/// Classify a normalized reply under the given mode
pub fn classify(normalized: &str, mode: ResponseMode) -> Result<SuggestionDraft, SuggestError> {
    debug!(?mode, reply_len = normalized.len(), "classify: called");
    match mode {
        ResponseMode::Unconstrained => classify_unconstrained(normalized),
        ResponseMode::Structured => classify_structured(normalized),
    }
}

/// Unconstrained mode: the trimmed reply is the suggested title
fn classify_unconstrained(normalized: &str) -> Result<SuggestionDraft, SuggestError> {
    let title = normalized.trim();
    if title.is_empty() {
        debug!("classify_unconstrained: empty reply");
        return Err(SuggestError::EmptySuggestion);
    }

    Ok(SuggestionDraft {
        title: title.to_string(),
        description: String::new(),
    })
}

/// Structured mode: decode and independently verify the contract
///
/// The upstream schema constraint is advisory, so both required fields are
/// re-checked on every reply: present, strings, non-empty after trim.
/// Either both fields are valid and the whole draft is accepted, or the
/// whole reply is rejected.
fn classify_structured(normalized: &str) -> Result<SuggestionDraft, SuggestError> {
    let value: Value = serde_json::from_str(normalized).map_err(|e| {
        debug!(error = %e, "classify_structured: undecodable reply");
        SuggestError::MalformedStructuredReply(e.to_string())
    })?;

    let object = value.as_object().ok_or_else(|| {
        debug!("classify_structured: reply is not an object");
        SuggestError::SchemaViolation("reply is not a JSON object".to_string())
    })?;

    let title = required_string(object, "title")?;
    let description = required_string(object, "description")?;

    debug!("classify_structured: accepted");
    Ok(SuggestionDraft { title, description })
}

fn required_string(
    object: &serde_json::Map<String, Value>,
    field: &str,
) -> Result<String, SuggestError> {
    let value = object
        .get(field)
        .ok_or_else(|| SuggestError::SchemaViolation(format!("missing field '{field}'")))?;

    let text = value
        .as_str()
        .ok_or_else(|| SuggestError::SchemaViolation(format!("field '{field}' is not a string")))?;

    let text = text.trim();
    if text.is_empty() {
        return Err(SuggestError::SchemaViolation(format!(
            "field '{field}' is empty"
        )));
    }

    Ok(text.to_string())
}
