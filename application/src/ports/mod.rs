//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod document_store;
pub mod identity_provider;
pub mod navigator;
