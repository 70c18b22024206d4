//! In-memory document store adapter
//!
//! Stands in for the external document database in demo runs and tests:
//! exact-key existence checks, question listings, and live score
//! subscriptions with snapshot-then-updates delivery. Scores can be
//! mutated through [`set_score`](InMemoryDocumentStore::set_score), which
//! pushes a change event to every live subscriber for that identity.

use async_trait::async_trait;
use eduquiz_application::ports::document_store::{
    DocumentStorePort, ScoreSubscription, StoreError,
};
use eduquiz_domain::{Identity, LookupKey, QuestionId, Score, ScoreEvent};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;
use tracing::debug;

use super::seed::SeedData;

type WatcherMap = HashMap<String, Vec<(u64, mpsc::Sender<ScoreEvent>)>>;

/// In-memory implementation of [`DocumentStorePort`].
pub struct InMemoryDocumentStore {
    subjects: Mutex<HashMap<String, Vec<QuestionId>>>,
    scores: Mutex<HashMap<String, i64>>,
    watchers: Arc<Mutex<WatcherMap>>,
    next_watcher_id: AtomicU64,
}

impl InMemoryDocumentStore {
    pub fn new() -> Self {
        Self {
            subjects: Mutex::new(HashMap::new()),
            scores: Mutex::new(HashMap::new()),
            watchers: Arc::new(Mutex::new(HashMap::new())),
            next_watcher_id: AtomicU64::new(0),
        }
    }

    /// Build a store pre-populated from seed data.
    pub fn from_seed(seed: SeedData) -> Self {
        let store = Self::new();
        {
            let mut subjects = store.subjects.lock().unwrap();
            for (key, ids) in seed.subjects {
                subjects.insert(
                    LookupKey::new(key).as_str().to_string(),
                    ids.into_iter().map(QuestionId::new).collect(),
                );
            }
        }
        {
            let mut scores = store.scores.lock().unwrap();
            for (identity, points) in seed.scores {
                scores.insert(identity, points);
            }
        }
        store
    }

    /// Insert or replace one question set.
    pub fn insert_question_set(&self, key: &LookupKey, questions: Vec<QuestionId>) {
        self.subjects
            .lock()
            .unwrap()
            .insert(key.as_str().to_string(), questions);
    }

    /// Write a score and notify every live subscriber for that identity.
    pub fn set_score(&self, identity_key: &str, points: i64) {
        self.scores
            .lock()
            .unwrap()
            .insert(identity_key.to_string(), points);
        self.notify(identity_key, ScoreEvent::Present(Score::new(points)));
    }

    /// Remove a score document and notify subscribers that it is missing.
    pub fn remove_score(&self, identity_key: &str) {
        self.scores.lock().unwrap().remove(identity_key);
        self.notify(identity_key, ScoreEvent::Missing);
    }

    /// Number of live score subscriptions (all identities).
    pub fn active_watchers(&self) -> usize {
        self.watchers.lock().unwrap().values().map(Vec::len).sum()
    }

    fn notify(&self, identity_key: &str, event: ScoreEvent) {
        let mut watchers = self.watchers.lock().unwrap();
        if let Some(subscribers) = watchers.get_mut(identity_key) {
            // Drop subscribers whose receiving side has gone away
            subscribers.retain(|(_, sender)| sender.try_send(event.clone()).is_ok());
        }
    }

    fn snapshot(&self, identity_key: &str) -> ScoreEvent {
        match self.scores.lock().unwrap().get(identity_key) {
            Some(points) => ScoreEvent::Present(Score::new(*points)),
            None => ScoreEvent::Missing,
        }
    }
}

impl Default for InMemoryDocumentStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DocumentStorePort for InMemoryDocumentStore {
    async fn subject_exists(&self, key: &LookupKey) -> Result<bool, StoreError> {
        Ok(self.subjects.lock().unwrap().contains_key(key.as_str()))
    }

    async fn list_questions(&self, key: &LookupKey) -> Result<Vec<QuestionId>, StoreError> {
        Ok(self
            .subjects
            .lock()
            .unwrap()
            .get(key.as_str())
            .cloned()
            .unwrap_or_default())
    }

    async fn watch_score(&self, identity: &Identity) -> Result<ScoreSubscription, StoreError> {
        let identity_key = identity
            .key()
            .ok_or_else(|| StoreError::Transport("cannot watch an anonymous score".to_string()))?
            .to_string();

        let (tx, rx) = mpsc::channel(16);

        // Snapshot first, then live updates, like a real listener
        let initial = self.snapshot(&identity_key);
        tx.try_send(initial)
            .map_err(|_| StoreError::SubscriptionClosed)?;

        let id = self.next_watcher_id.fetch_add(1, Ordering::SeqCst);
        self.watchers
            .lock()
            .unwrap()
            .entry(identity_key.clone())
            .or_default()
            .push((id, tx));
        debug!("Opened score subscription {id} for {identity_key}");

        let watchers = self.watchers.clone();
        Ok(ScoreSubscription::new(rx).with_release(move || {
            let mut watchers = watchers.lock().unwrap();
            if let Some(subscribers) = watchers.get_mut(&identity_key) {
                subscribers.retain(|(watcher_id, _)| *watcher_id != id);
                if subscribers.is_empty() {
                    watchers.remove(&identity_key);
                }
            }
            debug!("Released score subscription {id} for {identity_key}");
        }))
    }
}
