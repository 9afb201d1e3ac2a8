//! Suggestion applier
//!
//! Owns the in-progress task draft and decides whether a pipeline result may
//! touch it. Acceptance replaces the draft wholesale; rejection leaves it
//! exactly as it was. A generation token serializes suggestion requests per
//! draft: starting a new request (or cancelling) invalidates any token still
//! held by an in-flight one, so a stale result is discarded instead of
//! overwriting a draft it no longer belongs to.

use tracing::debug;

use super::SuggestionDraft;

/// Token identifying one in-flight suggestion request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuggestionToken(u64);

/// The draft the user is editing, plus in-flight request bookkeeping
#[derive(Debug, Default)]
pub struct DraftSession {
    draft: SuggestionDraft,
    generation: u64,
}

impl DraftSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// The current draft contents
    pub fn draft(&self) -> &SuggestionDraft {
        &self.draft
    }

    /// Register a new suggestion request against this draft
    ///
    /// Any token issued earlier becomes stale, so a still-in-flight request
    /// can no longer apply its result.
    pub fn begin(&mut self) -> SuggestionToken {
        self.generation += 1;
        debug!(generation = self.generation, "begin: issued token");
        SuggestionToken(self.generation)
    }

    /// Discard whatever request is outstanding
    ///
    /// Used when the invoking surface goes away while a request is in
    /// flight; the eventual result must not land on an absent draft.
    pub fn cancel(&mut self) {
        self.generation += 1;
        debug!(generation = self.generation, "cancel: outstanding token invalidated");
    }

    /// Apply an accepted suggestion, replacing the draft wholesale
    ///
    /// Returns false without touching the draft when the token is stale.
    pub fn apply(&mut self, token: SuggestionToken, suggestion: SuggestionDraft) -> bool {
        if token.0 != self.generation {
            debug!(
                token = token.0,
                generation = self.generation,
                "apply: stale token, discarding result"
            );
            return false;
        }

        debug!("apply: replacing draft");
        self.draft = suggestion;
        true
    }
}
