//! Infrastructure layer for eduquiz
//!
//! This crate contains adapters that implement the ports defined in the
//! application layer, including configuration file loading.

pub mod auth;
pub mod config;
pub mod store;

// Re-export commonly used types
pub use auth::StaticIdentityProvider;
pub use config::{
    ConfigLoader, FileBehaviorConfig, FileConfig, FileDataConfig, FileIdentityConfig,
    FileOutputConfig,
};
pub use store::{
    memory::InMemoryDocumentStore,
    seed::{SeedData, SeedError},
};
