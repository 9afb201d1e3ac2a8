//! Request types for the generative client
//!
//! These model the Gemini generateContent API but stay provider-agnostic:
//! an instruction string plus an optional output contract the transport is
//! asked to enforce on its own reply.

use serde_json::json;
use tracing::debug;

/// Everything needed for one generative call
#[derive(Debug, Clone)]
pub struct SuggestionRequest {
    /// Natural-language instruction embedding the user's hint
    pub instruction: String,

    /// Output contract for schema-constrained mode; `None` means the reply
    /// is expected to be a single line of plain text.
    pub schema: Option<SchemaDescriptor>,
}

/// Declared shape of a structured reply
///
/// The only contract this system ever requests: an object with required,
/// non-nullable string fields `title` and `description`. The upstream
/// enforcement is advisory; the validator re-checks every reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaDescriptor {
    pub description: String,
}

impl SchemaDescriptor {
    /// The task-suggestion contract
    pub fn task_suggestion() -> Self {
        Self {
            description: "A task suggestion".to_string(),
        }
    }

    /// Render as a Gemini `responseSchema` value
    pub fn to_gemini_schema(&self) -> serde_json::Value {
        debug!("to_gemini_schema: called");
        json!({
            "type": "OBJECT",
            "description": self.description,
            "properties": {
                "title": {
                    "type": "STRING",
                    "description": "Short title",
                    "nullable": false,
                },
                "description": {
                    "type": "STRING",
                    "description": "Detailed description",
                    "nullable": false,
                },
            },
            "required": ["title", "description"],
        })
    }
}
