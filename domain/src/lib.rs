//! Domain layer for eduquiz
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Selection
//!
//! A user picks an education level, an optional track (only the advanced
//! level has one), and a subject. The three choices are gated: the track
//! dropdown only applies to A-Level, and the subject list depends on the
//! level.
//!
//! ## Lookup Key
//!
//! A completed selection canonicalizes to a single lowercase string that
//! must exactly match a question-set document in the store. The key is the
//! only bridge between the UI selection and the storage key space.

pub mod core;
pub mod identity;
pub mod lookup;
pub mod question;
pub mod score;
pub mod selection;

// Re-export commonly used types
pub use crate::core::error::SelectionError;
pub use identity::{AuthState, Identity};
pub use lookup::LookupKey;
pub use question::{QuestionId, QuestionRoute, pick_question};
pub use score::{Score, ScoreEvent};
pub use selection::{
    level::{Level, ParseLevelError, ParseTrackError, Track},
    state::Selection,
};
