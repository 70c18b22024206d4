//! Identity provider port
//!
//! The auth provider resolves asynchronously: observers first see
//! `AuthState::Resolving`, then the settled state, then any later changes
//! (sign-out). Consumed by the redirect gate and the score watcher.

use eduquiz_domain::AuthState;
use tokio::sync::watch;

/// Source of the signed-in identity and its changes over time.
pub trait IdentityProviderPort: Send + Sync {
    /// Observe the auth state. The receiver always holds the latest value.
    fn observe(&self) -> watch::Receiver<AuthState>;
}
