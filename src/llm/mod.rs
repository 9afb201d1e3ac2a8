//! Generative client layer
//!
//! The transport seam of the suggestion pipeline: one request in, one raw
//! textual reply out, classified failures on transport error.

use std::sync::Arc;

use eyre::{Result, bail};
use tracing::debug;

pub mod client;
mod gemini;
mod types;

pub use client::GenerativeClient;
pub use gemini::GeminiClient;
pub use types::{SchemaDescriptor, SuggestionRequest};

use crate::config::LlmConfig;

/// Create a generative client for the provider named in config
///
/// Currently only "gemini" is supported. An unknown provider is a
/// configuration mistake reported as a plain startup error, never as one of
/// the pipeline's per-call classifications; `Config::validate` catches it
/// before this is ever reached.
pub fn create_client(config: &LlmConfig) -> Result<Arc<dyn GenerativeClient>> {
    debug!(provider = %config.provider, model = %config.model, "create_client: called");
    match config.provider.as_str() {
        "gemini" => Ok(Arc::new(GeminiClient::from_config(config)?)),
        other => bail!("unknown generative provider: '{other}'. Supported: gemini"),
    }
}
