//! Identity value object and auth resolution state

use serde::{Deserialize, Serialize};

/// Signed-in actor reference (Value Object)
///
/// Opaque to this crate: the auth provider owns the format (an email in
/// practice). `Anonymous` is the explicit not-signed-in sentinel.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Identity {
    Anonymous,
    User(String),
}

impl Identity {
    /// The key used to address this identity's score document, if any
    pub fn key(&self) -> Option<&str> {
        match self {
            Identity::Anonymous => None,
            Identity::User(id) => Some(id),
        }
    }

    pub fn is_anonymous(&self) -> bool {
        matches!(self, Identity::Anonymous)
    }
}

impl std::fmt::Display for Identity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Identity::Anonymous => write!(f, "Not logged in"),
            Identity::User(id) => write!(f, "{id}"),
        }
    }
}

/// Auth provider output as observed over time.
///
/// Starts `Resolving` while the provider is still loading; settles to
/// `SignedIn` or `SignedOut`, and may change again later (sign-out).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthState {
    Resolving,
    SignedIn(Identity),
    SignedOut,
}

impl AuthState {
    pub fn identity(&self) -> Option<&Identity> {
        match self {
            AuthState::SignedIn(identity) => Some(identity),
            _ => None,
        }
    }
}
