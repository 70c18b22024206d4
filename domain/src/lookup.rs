//! Lookup key value object

use crate::core::error::SelectionError;
use crate::selection::state::Selection;
use serde::{Deserialize, Serialize};

/// Canonical identifier of a question set (Value Object)
///
/// Derived from a completed selection as
/// `lowercase(level) + lowercase(track or "") + lowercase(subject)`.
/// The key must match a question-set document identifier exactly — no
/// fuzzy matching, no normalization beyond case-folding.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LookupKey(String);

impl LookupKey {
    /// Create a key from a raw string, applying the same case-folding as
    /// derivation. Used when loading seed data keyed by lookup strings.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into().to_lowercase())
    }

    /// Derive the key for a completed selection.
    ///
    /// Validates the selection first, so an incomplete or inconsistent
    /// selection can never produce a key.
    pub fn derive(selection: &Selection) -> Result<Self, SelectionError> {
        selection.validate()?;
        // validate() guarantees level and subject are present
        let level = selection.level().map(|l| l.as_str()).unwrap_or_default();
        let track = selection.track().map(|t| t.as_str()).unwrap_or_default();
        let subject = selection.subject().unwrap_or_default();
        Ok(Self(format!(
            "{}{}{}",
            level.to_lowercase(),
            track.to_lowercase(),
            subject.to_lowercase()
        )))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for LookupKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
