//! taskmuse - task list with an AI-assisted suggestion pipeline
//!
//! The interesting part of this crate is the suggestion pipeline: a
//! free-text hint becomes a request to a generative model, and the model's
//! reply - plain text, markdown-fenced JSON, or schema-constrained JSON -
//! is normalized, validated, and either staged into the task draft or
//! rejected with a classified error. The rest is a straightforward task
//! list with full-snapshot persistence.
//!
//! # Modules
//!
//! - [`suggest`] - the suggestion pipeline and its error taxonomy
//! - [`llm`] - generative client trait and Gemini implementation
//! - [`store`] - ordered task list with snapshot persistence
//! - [`config`] - configuration types and loading
//! - [`cli`] - command-line interface

pub mod cli;
pub mod config;
pub mod llm;
pub mod store;
pub mod suggest;

// Re-export commonly used types
pub use config::{Config, LlmConfig, StorageConfig};
pub use llm::{GeminiClient, GenerativeClient, SchemaDescriptor, SuggestionRequest, create_client};
pub use store::{Task, TaskStore};
pub use suggest::{
    DraftSession, ResponseMode, SuggestError, SuggestionDraft, SuggestionToken, suggest,
};
