//! Score Watcher use case.
//!
//! Keeps a locally observable score value in sync with one externally
//! owned score document. Lifecycle: `Idle → Subscribed → (Updated)* →
//! Unsubscribed`; on an identity change the old subscription is fully
//! released before the new one is established, so at most one
//! subscription is ever live and no stale update can land after a switch.

use crate::ports::document_store::{DocumentStorePort, StoreError};
use eduquiz_domain::{Identity, Score, ScoreEvent};
use std::sync::Arc;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::debug;

struct ActiveSubscription {
    identity: Identity,
    cancel: CancellationToken,
    task: JoinHandle<()>,
}

/// Owns the live score subscription for the current identity.
///
/// The watched value is exposed through a `watch` channel: `None` until a
/// score document has been seen, then the latest score. A change event
/// for a missing document leaves the value untouched (logged only).
pub struct ScoreWatcher {
    store: Arc<dyn DocumentStorePort>,
    value_tx: watch::Sender<Option<Score>>,
    active: Option<ActiveSubscription>,
}

impl ScoreWatcher {
    pub fn new(store: Arc<dyn DocumentStorePort>) -> Self {
        let (value_tx, _) = watch::channel(None);
        Self {
            store,
            value_tx,
            active: None,
        }
    }

    /// Observe the synced value. The receiver always holds the latest.
    pub fn observe(&self) -> watch::Receiver<Option<Score>> {
        self.value_tx.subscribe()
    }

    /// The identity currently subscribed for, if any.
    pub fn watched_identity(&self) -> Option<&Identity> {
        self.active.as_ref().map(|a| &a.identity)
    }

    pub fn is_subscribed(&self) -> bool {
        self.active.is_some()
    }

    /// Point the watcher at a new identity.
    ///
    /// Releases any existing subscription first and waits for its
    /// forwarding task to finish, then subscribes for the new identity.
    /// `None` or an anonymous identity just releases (back to idle). A
    /// repeated call with the unchanged identity is a no-op.
    pub async fn set_identity(&mut self, identity: Option<Identity>) -> Result<(), StoreError> {
        if self.watched_identity() == identity.as_ref() {
            return Ok(());
        }

        self.release().await;

        let Some(identity) = identity else {
            return Ok(());
        };
        if identity.is_anonymous() {
            return Ok(());
        }

        let mut subscription = self.store.watch_score(&identity).await?;
        let cancel = CancellationToken::new();
        let task = tokio::spawn({
            let cancel = cancel.clone();
            let value_tx = self.value_tx.clone();
            let identity = identity.clone();
            async move {
                loop {
                    tokio::select! {
                        _ = cancel.cancelled() => break,
                        event = subscription.recv() => match event {
                            Some(ScoreEvent::Present(score)) => {
                                value_tx.send_replace(Some(score));
                            }
                            Some(ScoreEvent::Missing) => {
                                // Document absent: keep the previous value
                                debug!("No score document for {identity}");
                            }
                            None => {
                                debug!("Score subscription for {identity} ended");
                                break;
                            }
                        },
                    }
                }
            }
        });

        self.active = Some(ActiveSubscription {
            identity,
            cancel,
            task,
        });
        Ok(())
    }

    /// Release the current subscription, if any, and wait until its
    /// forwarding task has stopped.
    pub async fn release(&mut self) {
        if let Some(active) = self.active.take() {
            active.cancel.cancel();
            let _ = active.task.await;
        }
    }
}

impl Drop for ScoreWatcher {
    fn drop(&mut self) {
        // Cannot await here; cancel and abort so the subscription is
        // dropped (and its release hook runs) on the task's next poll.
        if let Some(active) = self.active.take() {
            active.cancel.cancel();
            active.task.abort();
        }
    }
}
