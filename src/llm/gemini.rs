//! Gemini API client implementation
//!
//! Implements the GenerativeClient trait for the Gemini generateContent API,
//! with optional schema-constrained JSON output.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

use super::{GenerativeClient, SuggestionRequest};
use crate::config::LlmConfig;
use crate::suggest::SuggestError;

/// Gemini generateContent client
pub struct GeminiClient {
    model: String,
    api_key: String,
    base_url: String,
    http: Client,
}

impl GeminiClient {
    /// Create a new client from configuration
    ///
    /// Resolves the API key from the configured environment variable. A
    /// missing key is a startup-time `MissingCredential`, never a per-call
    /// failure.
    pub fn from_config(config: &LlmConfig) -> Result<Self, SuggestError> {
        debug!(model = %config.model, "from_config: called");
        let api_key = config.api_key()?;

        let http = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| SuggestError::UpstreamUnavailable {
                status: None,
                message: format!("failed to build HTTP client: {e}"),
            })?;

        Ok(Self {
            model: config.model.clone(),
            api_key,
            base_url: config.base_url.clone(),
            http,
        })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        )
    }

    /// Build the request body for the generateContent API
    ///
    /// In schema-constrained mode the body carries a `generationConfig`
    /// asking the service to emit JSON matching the declared schema.
    fn build_request_body(&self, request: &SuggestionRequest) -> serde_json::Value {
        debug!(%self.model, has_schema = request.schema.is_some(), "build_request_body: called");
        let mut body = serde_json::json!({
            "contents": [{
                "role": "user",
                "parts": [{ "text": request.instruction }],
            }],
        });

        if let Some(schema) = &request.schema {
            debug!("build_request_body: attaching response schema");
            body["generationConfig"] = serde_json::json!({
                "responseMimeType": "application/json",
                "responseSchema": schema.to_gemini_schema(),
            });
        }

        body
    }

    /// Concatenate the text parts of the first candidate
    ///
    /// A reply with no candidates or no text yields an empty string; the
    /// validator downstream classifies that, not the client.
    fn extract_text(response: GeminiResponse) -> String {
        debug!(
            candidate_count = response.candidates.as_ref().map_or(0, |c| c.len()),
            "extract_text: called"
        );
        response
            .candidates
            .unwrap_or_default()
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .and_then(|c| c.parts)
            .unwrap_or_default()
            .into_iter()
            .filter_map(|p| p.text)
            .collect()
    }
}

#[async_trait]
impl GenerativeClient for GeminiClient {
    async fn generate(&self, request: SuggestionRequest) -> Result<String, SuggestError> {
        debug!(%self.model, "generate: called");
        let url = self.endpoint();
        let body = self.build_request_body(&request);

        // Exactly one outbound call per suggestion request. Retries, if the
        // caller wants them, happen above this layer.
        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", self.api_key.clone())
            .header("content-type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                debug!(error = %e, "generate: network error");
                SuggestError::UpstreamUnavailable {
                    status: e.status().map(|s| s.as_u16()),
                    message: e.to_string(),
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            debug!(status = %status, "generate: API error");
            let message = response.text().await.unwrap_or_default();
            return Err(SuggestError::UpstreamUnavailable {
                status: Some(status.as_u16()),
                message,
            });
        }

        let api_response: GeminiResponse =
            response
                .json()
                .await
                .map_err(|e| SuggestError::UpstreamUnavailable {
                    status: None,
                    message: format!("undecodable response envelope: {e}"),
                })?;

        debug!("generate: success");
        Ok(Self::extract_text(api_response))
    }
}

// Gemini API response envelope types

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    candidates: Option<Vec<GeminiCandidate>>,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidate {
    content: Option<GeminiContent>,
}

#[derive(Debug, Deserialize)]
struct GeminiContent {
    parts: Option<Vec<GeminiPart>>,
}

#[derive(Debug, Deserialize)]
struct GeminiPart {
    text: Option<String>,
}
