//! GenerativeClient trait definition

use async_trait::async_trait;

use super::SuggestionRequest;
use crate::suggest::SuggestError;

/// Stateless generative text client - each call is independent
///
/// This is the seam between the suggestion pipeline and the external model
/// endpoint. Exactly one outbound call per request, no internal retry: the
/// upstream service has its own latency and cost profile, so retries belong
/// to the caller. Implementations return the raw reply text without any
/// interpretation - the pipeline's normalizer and validator own that.
#[async_trait]
pub trait GenerativeClient: Send + Sync {
    /// Send one request and return the raw textual reply
    async fn generate(&self, request: SuggestionRequest) -> Result<String, SuggestError>;
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tracing::debug;

    /// Mock generative client for unit tests
    pub struct MockClient {
        replies: Mutex<Vec<Result<String, SuggestError>>>,
        call_count: AtomicUsize,
    }

    impl MockClient {
        pub fn new(replies: Vec<Result<String, SuggestError>>) -> Self {
            debug!(reply_count = %replies.len(), "MockClient::new: called");
            Self {
                replies: Mutex::new(replies),
                call_count: AtomicUsize::new(0),
            }
        }

        /// Convenience constructor for a single successful reply
        pub fn replying(text: &str) -> Self {
            Self::new(vec![Ok(text.to_string())])
        }

        pub fn call_count(&self) -> usize {
            self.call_count.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl GenerativeClient for MockClient {
        async fn generate(&self, _request: SuggestionRequest) -> Result<String, SuggestError> {
            debug!("MockClient::generate: called");
            let idx = self.call_count.fetch_add(1, Ordering::SeqCst);
            let mut replies = self.replies.lock().unwrap();
            if idx < replies.len() {
                std::mem::replace(
                    &mut replies[idx],
                    Err(SuggestError::EmptySuggestion),
                )
            } else {
                debug!("MockClient::generate: no more mock replies");
                Err(SuggestError::UpstreamUnavailable {
                    status: None,
                    message: "no more mock replies".to_string(),
                })
            }
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[tokio::test]
        async fn test_mock_client_returns_replies_in_order() {
            let client = MockClient::new(vec![
                Ok("Reply 1".to_string()),
                Ok("Reply 2".to_string()),
            ]);

            let req = SuggestionRequest {
                instruction: "Test".to_string(),
                schema: None,
            };

            assert_eq!(client.generate(req.clone()).await.unwrap(), "Reply 1");
            assert_eq!(client.generate(req.clone()).await.unwrap(), "Reply 2");
            assert_eq!(client.call_count(), 2);
        }

        #[tokio::test]
        async fn test_mock_client_errors_when_exhausted() {
            let client = MockClient::new(vec![]);

            let req = SuggestionRequest {
                instruction: "Test".to_string(),
                schema: None,
            };

            let result = client.generate(req).await;
            assert!(matches!(
                result,
                Err(SuggestError::UpstreamUnavailable { .. })
            ));
        }
    }
}
