//! Score value object and live-update events

use serde::{Deserialize, Serialize};

/// Points total owned by the store, observed but never written here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Score(i64);

impl Score {
    pub fn new(points: i64) -> Self {
        Self(points)
    }

    pub fn points(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} points", self.0)
    }
}

/// One change notification from a score subscription.
///
/// `Missing` means the document does not exist for this identity; the
/// watcher keeps its previous value in that case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScoreEvent {
    Present(Score),
    Missing,
}
