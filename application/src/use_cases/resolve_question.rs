//! Resolve Question use case.
//!
//! Translates a completed selection into a navigable question route:
//! validate, derive the lookup key, check the question set exists, list
//! its questions, pick one uniformly at random. The two store queries are
//! strictly sequential and neither is retried; every failure is terminal
//! for the attempt.

use crate::config::BehaviorConfig;
use crate::ports::document_store::{DocumentStorePort, StoreError};
use eduquiz_domain::{LookupKey, QuestionRoute, Selection, SelectionError, pick_question};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Errors that can occur during question resolution.
///
/// The `Display` strings are the single user-facing message for each
/// failure; the store error behind `Query` is logged, not shown.
#[derive(Error, Debug)]
pub enum ResolveError {
    #[error("Please select all dropdown options.")]
    InvalidSelection(#[from] SelectionError),

    #[error("Subject not found.")]
    SubjectNotFound(LookupKey),

    #[error("No questions available for this subject yet.")]
    EmptyQuestionSet(LookupKey),

    #[error("Error fetching documents.")]
    Query(#[from] StoreError),

    #[error("Operation cancelled")]
    Cancelled,
}

/// Outcome of a successful resolution.
///
/// `EmptySet` is the question-set-exists-but-is-empty case: the operation
/// completes with no navigation and no error. Callers that want it
/// surfaced instead set [`BehaviorConfig::surface_empty_sets`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Resolution {
    Question(QuestionRoute),
    EmptySet,
}

impl Resolution {
    pub fn route(&self) -> Option<&QuestionRoute> {
        match self {
            Resolution::Question(route) => Some(route),
            Resolution::EmptySet => None,
        }
    }
}

/// Use case for resolving a selection to a random question.
///
/// Holds the store port, an optional cancellation token (a superseding
/// request cancels the stale one), and the behavior config.
pub struct ResolveQuestionUseCase {
    store: Arc<dyn DocumentStorePort>,
    cancellation_token: Option<CancellationToken>,
    behavior: BehaviorConfig,
}

impl ResolveQuestionUseCase {
    pub fn new(store: Arc<dyn DocumentStorePort>) -> Self {
        Self {
            store,
            cancellation_token: None,
            behavior: BehaviorConfig::default(),
        }
    }

    pub fn with_cancellation_token(mut self, token: CancellationToken) -> Self {
        self.cancellation_token = Some(token);
        self
    }

    pub fn with_behavior(mut self, behavior: BehaviorConfig) -> Self {
        self.behavior = behavior;
        self
    }

    /// Resolve with a fresh entropy-seeded RNG.
    pub async fn execute(&self, selection: &Selection) -> Result<Resolution, ResolveError> {
        self.execute_with_rng(selection, &mut StdRng::from_entropy())
            .await
    }

    /// Resolve with a caller-supplied RNG (seeded runs, tests).
    pub async fn execute_with_rng<R: Rng + Send>(
        &self,
        selection: &Selection,
        rng: &mut R,
    ) -> Result<Resolution, ResolveError> {
        // Step 1-2: local guard and key derivation, no store contact on failure
        let key = LookupKey::derive(selection)?;
        debug!("Resolving question set '{}'", key);

        // Step 3: exact-match existence query
        self.check_cancelled()?;
        let exists = self.store.subject_exists(&key).await.map_err(|e| {
            warn!("Existence query for '{}' failed: {}", key, e);
            ResolveError::Query(e)
        })?;
        if !exists {
            debug!("No question set for '{}'", key);
            return Err(ResolveError::SubjectNotFound(key));
        }

        // Step 4: listing
        self.check_cancelled()?;
        let questions = self.store.list_questions(&key).await.map_err(|e| {
            warn!("Question listing for '{}' failed: {}", key, e);
            ResolveError::Query(e)
        })?;

        if questions.is_empty() {
            debug!("Question set '{}' exists but has no questions", key);
            if self.behavior.surface_empty_sets {
                return Err(ResolveError::EmptyQuestionSet(key));
            }
            return Ok(Resolution::EmptySet);
        }

        // Step 5: uniform pick
        let question = pick_question(&questions, rng)
            .cloned()
            .ok_or(ResolveError::EmptyQuestionSet(key.clone()))?;
        info!(
            "Picked question '{}' from set '{}' ({} candidates)",
            question,
            key,
            questions.len()
        );
        Ok(Resolution::Question(QuestionRoute::new(key, question)))
    }

    fn check_cancelled(&self) -> Result<(), ResolveError> {
        if let Some(token) = &self.cancellation_token
            && token.is_cancelled()
        {
            return Err(ResolveError::Cancelled);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::document_store::ScoreSubscription;
    use async_trait::async_trait;
    use eduquiz_domain::{Identity, Level, QuestionId, Track};
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tokio::sync::mpsc;

    // ==================== Test Mocks ====================

    struct MockStore {
        subjects: HashMap<String, Vec<QuestionId>>,
        fail_with: Option<String>,
        exists_calls: AtomicUsize,
        list_calls: AtomicUsize,
    }

    impl MockStore {
        fn new(subjects: &[(&str, &[&str])]) -> Self {
            Self {
                subjects: subjects
                    .iter()
                    .map(|(key, ids)| {
                        (
                            key.to_string(),
                            ids.iter().map(|id| QuestionId::new(*id)).collect(),
                        )
                    })
                    .collect(),
                fail_with: None,
                exists_calls: AtomicUsize::new(0),
                list_calls: AtomicUsize::new(0),
            }
        }

        fn failing(message: &str) -> Self {
            let mut store = Self::new(&[]);
            store.fail_with = Some(message.to_string());
            store
        }
    }

    #[async_trait]
    impl DocumentStorePort for MockStore {
        async fn subject_exists(&self, key: &LookupKey) -> Result<bool, StoreError> {
            self.exists_calls.fetch_add(1, Ordering::SeqCst);
            if let Some(message) = &self.fail_with {
                return Err(StoreError::Transport(message.clone()));
            }
            Ok(self.subjects.contains_key(key.as_str()))
        }

        async fn list_questions(&self, key: &LookupKey) -> Result<Vec<QuestionId>, StoreError> {
            self.list_calls.fetch_add(1, Ordering::SeqCst);
            if let Some(message) = &self.fail_with {
                return Err(StoreError::Transport(message.clone()));
            }
            Ok(self.subjects.get(key.as_str()).cloned().unwrap_or_default())
        }

        async fn watch_score(&self, _identity: &Identity) -> Result<ScoreSubscription, StoreError> {
            let (_tx, rx) = mpsc::channel(1);
            Ok(ScoreSubscription::new(rx))
        }
    }

    fn psle_math() -> Selection {
        let mut selection = Selection::new();
        selection.set_level(Level::Psle);
        selection.set_subject("Math");
        selection
    }

    // ==================== Tests ====================

    #[tokio::test]
    async fn test_resolves_to_one_of_the_listed_questions() {
        let store = Arc::new(MockStore::new(&[("pslemath", &["q1", "q2", "q3"])]));
        let use_case = ResolveQuestionUseCase::new(store.clone());

        let resolution = use_case.execute(&psle_math()).await.unwrap();

        let route = resolution.route().expect("expected a question route");
        assert_eq!(route.key.as_str(), "pslemath");
        assert!(["q1", "q2", "q3"].contains(&route.question.as_str()));
        assert_eq!(store.exists_calls.load(Ordering::SeqCst), 1);
        assert_eq!(store.list_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_invalid_selection_issues_no_queries() {
        let store = Arc::new(MockStore::new(&[("pslemath", &["q1"])]));
        let use_case = ResolveQuestionUseCase::new(store.clone());

        // Track set for a level that has none
        let mut selection = psle_math();
        selection.set_track(Track::H1);

        let error = use_case.execute(&selection).await.unwrap_err();
        assert!(matches!(error, ResolveError::InvalidSelection(_)));
        assert_eq!(store.exists_calls.load(Ordering::SeqCst), 0);
        assert_eq!(store.list_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_missing_track_on_a_level_is_invalid() {
        let store = Arc::new(MockStore::new(&[]));
        let use_case = ResolveQuestionUseCase::new(store.clone());

        let mut selection = Selection::new();
        selection.set_level(Level::ALevel);
        selection.set_subject("Physics");

        let error = use_case.execute(&selection).await.unwrap_err();
        assert!(matches!(
            error,
            ResolveError::InvalidSelection(SelectionError::TrackRequired)
        ));
        assert_eq!(store.exists_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_unknown_key_fails_without_second_query() {
        let store = Arc::new(MockStore::new(&[("a-levelh2physics", &["q9"])]));
        let use_case = ResolveQuestionUseCase::new(store.clone());

        let error = use_case.execute(&psle_math()).await.unwrap_err();
        match error {
            ResolveError::SubjectNotFound(key) => assert_eq!(key.as_str(), "pslemath"),
            other => panic!("Expected SubjectNotFound, got {other:?}"),
        }
        assert_eq!(store.exists_calls.load(Ordering::SeqCst), 1);
        assert_eq!(store.list_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_empty_listing_completes_without_error_or_route() {
        let store = Arc::new(MockStore::new(&[("pslemath", &[])]));
        let use_case = ResolveQuestionUseCase::new(store.clone());

        let resolution = use_case.execute(&psle_math()).await.unwrap();
        assert_eq!(resolution, Resolution::EmptySet);
        assert_eq!(resolution.route(), None);
    }

    #[tokio::test]
    async fn test_empty_listing_can_be_surfaced_by_config() {
        let store = Arc::new(MockStore::new(&[("pslemath", &[])]));
        let use_case = ResolveQuestionUseCase::new(store)
            .with_behavior(BehaviorConfig::new().with_surface_empty_sets(true));

        let error = use_case.execute(&psle_math()).await.unwrap_err();
        assert!(matches!(error, ResolveError::EmptyQuestionSet(_)));
    }

    #[tokio::test]
    async fn test_transport_failure_maps_to_query_error() {
        let store = Arc::new(MockStore::failing("connection reset"));
        let use_case = ResolveQuestionUseCase::new(store);

        let error = use_case.execute(&psle_math()).await.unwrap_err();
        assert!(matches!(error, ResolveError::Query(_)));
        assert_eq!(error.to_string(), "Error fetching documents.");
    }

    #[tokio::test]
    async fn test_cancelled_token_stops_before_any_query() {
        let store = Arc::new(MockStore::new(&[("pslemath", &["q1"])]));
        let token = CancellationToken::new();
        token.cancel();
        let use_case = ResolveQuestionUseCase::new(store.clone()).with_cancellation_token(token);

        let error = use_case.execute(&psle_math()).await.unwrap_err();
        assert!(matches!(error, ResolveError::Cancelled));
        assert_eq!(store.exists_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_a_level_selection_resolves_with_track_in_key() {
        let store = Arc::new(MockStore::new(&[("a-levelh2physics", &["p1", "p2"])]));
        let use_case = ResolveQuestionUseCase::new(store);

        let mut selection = Selection::new();
        selection.set_level(Level::ALevel);
        selection.set_track(Track::H2);
        selection.set_subject("Physics");

        let resolution = use_case.execute(&selection).await.unwrap();
        assert_eq!(
            resolution.route().unwrap().key.as_str(),
            "a-levelh2physics"
        );
    }

    #[tokio::test]
    async fn test_seeded_rng_is_deterministic() {
        let store = Arc::new(MockStore::new(&[("pslemath", &["q1", "q2", "q3"])]));
        let use_case = ResolveQuestionUseCase::new(store);

        let first = use_case
            .execute_with_rng(&psle_math(), &mut StdRng::seed_from_u64(11))
            .await
            .unwrap();
        let second = use_case
            .execute_with_rng(&psle_math(), &mut StdRng::seed_from_u64(11))
            .await
            .unwrap();
        assert_eq!(first, second);
    }
}
