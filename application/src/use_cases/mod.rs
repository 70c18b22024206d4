//! Use cases

pub mod auth_gate;
pub mod resolve_question;
pub mod watch_score;
