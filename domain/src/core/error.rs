//! Domain error types

use thiserror::Error;

/// Reasons a selection fails the resolver's entry guard.
///
/// All four variants surface to the user as a single "invalid selection"
/// message; the variants exist so logs and tests can tell them apart.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    #[error("No level selected")]
    MissingLevel,

    #[error("No subject selected")]
    MissingSubject,

    #[error("A-Level requires a track (H1/H2/H3)")]
    TrackRequired,

    #[error("Track is only valid for A-Level")]
    TrackNotAllowed,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(SelectionError::MissingLevel.to_string(), "No level selected");
        assert_eq!(
            SelectionError::TrackRequired.to_string(),
            "A-Level requires a track (H1/H2/H3)"
        );
    }
}
