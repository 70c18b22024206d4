//! Application layer for eduquiz
//!
//! This crate contains use cases, port definitions, and application
//! configuration. It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::BehaviorConfig;
pub use ports::{
    document_store::{DocumentStorePort, ScoreSubscription, StoreError},
    identity_provider::IdentityProviderPort,
    navigator::NavigatorPort,
};
pub use use_cases::auth_gate::{RedirectDecision, await_auth_resolution, decide_redirect};
pub use use_cases::resolve_question::{Resolution, ResolveError, ResolveQuestionUseCase};
pub use use_cases::watch_score::ScoreWatcher;
