//! In-progress selection state and its gating rules

use crate::core::error::SelectionError;
use crate::selection::level::{Level, Track};
use serde::{Deserialize, Serialize};

/// The user's in-progress level/track/subject choices.
///
/// Pure state container: setters mutate, predicates derive the UI gating
/// (which dropdown is visible next), and [`validate`](Selection::validate)
/// is the guard the resolver runs before touching the store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    level: Option<Level>,
    track: Option<Track>,
    subject: Option<String>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the level.
    ///
    /// Deliberately does NOT clear track/subject: a stale combination is
    /// caught by [`validate`](Selection::validate) instead of being
    /// silently rewritten under the user.
    pub fn set_level(&mut self, level: Level) {
        self.level = Some(level);
    }

    /// Set the track unconditionally.
    pub fn set_track(&mut self, track: Track) {
        self.track = Some(track);
    }

    /// Set the subject unconditionally.
    pub fn set_subject(&mut self, subject: impl Into<String>) {
        self.subject = Some(subject.into());
    }

    pub fn level(&self) -> Option<Level> {
        self.level
    }

    pub fn track(&self) -> Option<Track> {
        self.track
    }

    pub fn subject(&self) -> Option<&str> {
        self.subject.as_deref()
    }

    /// True iff the chosen level has a track sub-choice
    pub fn is_track_required(&self) -> bool {
        self.level.is_some_and(|l| l.requires_track())
    }

    /// True once the subject dropdown may be shown: a level is chosen and
    /// the track is chosen or not applicable.
    pub fn is_ready_for_subject_choice(&self) -> bool {
        match self.level {
            None => false,
            Some(level) => !level.requires_track() || self.track.is_some(),
        }
    }

    /// True iff every required field is set: level and subject, plus a
    /// track exactly when the level requires one.
    pub fn is_complete(&self) -> bool {
        self.validate().is_ok()
    }

    /// The resolver's entry guard.
    ///
    /// Fails if the level or subject is missing, if the advanced level has
    /// no track, or if a track is set for a level without one. The last
    /// case cannot be reached through the gated dropdowns but is rejected
    /// here so the invariant does not depend on the UI.
    pub fn validate(&self) -> Result<(), SelectionError> {
        let level = self.level.ok_or(SelectionError::MissingLevel)?;
        if self.subject.is_none() {
            return Err(SelectionError::MissingSubject);
        }
        match (level.requires_track(), self.track.is_some()) {
            (true, false) => Err(SelectionError::TrackRequired),
            (false, true) => Err(SelectionError::TrackNotAllowed),
            _ => Ok(()),
        }
    }
}
