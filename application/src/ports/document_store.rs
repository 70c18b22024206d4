//! Document store port
//!
//! Defines the interface for the external document database. Three
//! operations are consumed: an exact-match existence query on the subject
//! collection, a listing of the question sub-collection, and a live
//! subscription to one identity's score document.

use async_trait::async_trait;
use eduquiz_domain::{Identity, LookupKey, QuestionId, ScoreEvent};
use thiserror::Error;
use tokio::sync::mpsc;

/// Errors that can occur during document store operations
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Subscription closed")]
    SubscriptionClosed,
}

/// Gateway to the document database.
///
/// This port defines how the application layer reads the store.
/// Implementations (adapters) live in the infrastructure layer. The
/// application never writes through this port; scores are owned by the
/// store.
#[async_trait]
pub trait DocumentStorePort: Send + Sync {
    /// Check whether a question-set document with exactly this key exists.
    /// Exact identifier match only — no prefix or pattern semantics.
    async fn subject_exists(&self, key: &LookupKey) -> Result<bool, StoreError>;

    /// List all question identifiers under the question set for `key`.
    /// No ordering is guaranteed across calls.
    async fn list_questions(&self, key: &LookupKey) -> Result<Vec<QuestionId>, StoreError>;

    /// Open a live subscription to the score document for `identity`.
    ///
    /// The adapter delivers the current state first, then one event per
    /// change, until the returned [`ScoreSubscription`] is dropped.
    async fn watch_score(&self, identity: &Identity) -> Result<ScoreSubscription, StoreError>;
}

/// Runs the adapter's release hook when the subscription is dropped.
struct ReleaseOnDrop(Option<Box<dyn FnOnce() + Send>>);

impl Drop for ReleaseOnDrop {
    fn drop(&mut self) {
        if let Some(release) = self.0.take() {
            release();
        }
    }
}

/// Handle for receiving live score events.
///
/// Wraps an `mpsc::Receiver<ScoreEvent>` plus an optional release hook the
/// adapter installs with [`with_release`](ScoreSubscription::with_release).
/// Dropping the handle releases the subscription deterministically; there
/// is no other way to unsubscribe.
pub struct ScoreSubscription {
    receiver: mpsc::Receiver<ScoreEvent>,
    _release: Option<ReleaseOnDrop>,
}

impl ScoreSubscription {
    pub fn new(receiver: mpsc::Receiver<ScoreEvent>) -> Self {
        Self {
            receiver,
            _release: None,
        }
    }

    /// Attach a hook that runs exactly once when this handle is dropped.
    pub fn with_release(mut self, release: impl FnOnce() + Send + 'static) -> Self {
        self._release = Some(ReleaseOnDrop(Some(Box::new(release))));
        self
    }

    /// Receive the next event; `None` once the adapter side has closed.
    pub async fn recv(&mut self) -> Option<ScoreEvent> {
        self.receiver.recv().await
    }
}
