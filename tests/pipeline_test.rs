//! Integration tests for the suggestion pipeline
//!
//! These drive `suggest` end to end with a scripted client and verify the
//! classification contract and the draft-application rules.

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use taskmuse::llm::{GenerativeClient, SuggestionRequest};
use taskmuse::suggest::{DraftSession, ResponseMode, SuggestError, SuggestionDraft, suggest};

/// Scripted client: returns canned replies in order, counts calls
struct ScriptedClient {
    replies: Mutex<Vec<Result<String, SuggestError>>>,
    call_count: AtomicUsize,
}

impl ScriptedClient {
    fn new(replies: Vec<Result<String, SuggestError>>) -> Self {
        Self {
            replies: Mutex::new(replies),
            call_count: AtomicUsize::new(0),
        }
    }

    fn replying(text: &str) -> Self {
        Self::new(vec![Ok(text.to_string())])
    }

    fn call_count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl GenerativeClient for ScriptedClient {
    async fn generate(&self, _request: SuggestionRequest) -> Result<String, SuggestError> {
        let idx = self.call_count.fetch_add(1, Ordering::SeqCst);
        let mut replies = self.replies.lock().unwrap();
        if idx < replies.len() {
            std::mem::replace(&mut replies[idx], Err(SuggestError::EmptySuggestion))
        } else {
            panic!("scripted client exhausted after {idx} calls");
        }
    }
}

// =============================================================================
// Classification
// =============================================================================

#[tokio::test]
async fn test_structured_reply_is_accepted() {
    let client = ScriptedClient::replying("{\"title\":\"T\",\"description\":\"D\"}");

    let draft = suggest(&client, ResponseMode::Structured, "something")
        .await
        .unwrap();

    assert_eq!(
        draft,
        SuggestionDraft {
            title: "T".to_string(),
            description: "D".to_string(),
        }
    );
}

#[tokio::test]
async fn test_fenced_structured_reply_is_accepted() {
    let client = ScriptedClient::replying(
        "```json\n{\"title\":\"Run 5k\",\"description\":\"Morning jog\"}\n```",
    );

    let draft = suggest(&client, ResponseMode::Structured, "exercise")
        .await
        .unwrap();

    assert_eq!(draft.title, "Run 5k");
    assert_eq!(draft.description, "Morning jog");
}

#[tokio::test]
async fn test_missing_description_is_schema_violation() {
    let client = ScriptedClient::replying("{\"title\":\"Run 5k\"}");

    let result = suggest(&client, ResponseMode::Structured, "exercise").await;

    assert!(matches!(result, Err(SuggestError::SchemaViolation(_))));
}

#[tokio::test]
async fn test_undecodable_reply_is_malformed() {
    let client = ScriptedClient::replying("Sure! Here is a task for you.");

    let result = suggest(&client, ResponseMode::Structured, "exercise").await;

    assert!(matches!(
        result,
        Err(SuggestError::MalformedStructuredReply(_))
    ));
}

#[tokio::test]
async fn test_unconstrained_reply_is_trimmed_title() {
    let client = ScriptedClient::replying("  Buy groceries  ");

    let draft = suggest(&client, ResponseMode::Unconstrained, "food")
        .await
        .unwrap();

    assert_eq!(draft.title, "Buy groceries");
    assert_eq!(draft.description, "");
}

#[tokio::test]
async fn test_unconstrained_whitespace_reply_is_empty_suggestion() {
    let client = ScriptedClient::replying("   \n  ");

    let result = suggest(&client, ResponseMode::Unconstrained, "food").await;

    assert!(matches!(result, Err(SuggestError::EmptySuggestion)));
}

#[tokio::test]
async fn test_empty_hint_short_circuits_without_network() {
    let client = ScriptedClient::new(vec![]);

    let result = suggest(&client, ResponseMode::Structured, "").await;

    assert!(matches!(result, Err(SuggestError::EmptyHint)));
    assert_eq!(client.call_count(), 0);
}

#[tokio::test]
async fn test_transport_failure_is_surfaced() {
    let client = ScriptedClient::new(vec![Err(SuggestError::UpstreamUnavailable {
        status: Some(500),
        message: "internal error".to_string(),
    })]);

    let result = suggest(&client, ResponseMode::Structured, "exercise").await;

    match result {
        Err(e) => {
            assert!(e.is_transport());
            assert_eq!(e.upstream_status(), Some(500));
        }
        Ok(_) => panic!("expected transport failure"),
    }
}

// =============================================================================
// Draft application
// =============================================================================

#[tokio::test]
async fn test_rejection_leaves_draft_unchanged() {
    let client = ScriptedClient::replying("{\"title\":\"Run 5k\"}");

    let mut session = DraftSession::new();
    let token = session.begin();
    session.apply(
        token,
        SuggestionDraft {
            title: "previous".to_string(),
            description: "draft".to_string(),
        },
    );

    let token = session.begin();
    let result = suggest(&client, ResponseMode::Structured, "exercise").await;
    if let Ok(draft) = result {
        session.apply(token, draft);
    }

    assert_eq!(session.draft().title, "previous");
    assert_eq!(session.draft().description, "draft");
}

#[tokio::test]
async fn test_second_request_supersedes_cancelled_first() {
    let first_client = ScriptedClient::replying("{\"title\":\"First\",\"description\":\"D1\"}");
    let second_client = ScriptedClient::replying("{\"title\":\"Second\",\"description\":\"D2\"}");

    let mut session = DraftSession::new();

    // First request goes out, then a second starts before it resolves
    let first_token = session.begin();
    let first_result = suggest(&first_client, ResponseMode::Structured, "a").await;

    let second_token = session.begin();
    let second_result = suggest(&second_client, ResponseMode::Structured, "b").await;

    // First resolves late: its token is stale, so its result is discarded
    assert!(!session.apply(first_token, first_result.unwrap()));
    assert!(session.apply(second_token, second_result.unwrap()));

    assert_eq!(session.draft().title, "Second");
    assert_eq!(session.draft().description, "D2");
}
