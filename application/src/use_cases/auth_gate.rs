//! Auth redirect gate.
//!
//! One-shot decision taken once the identity provider settles: stay on the
//! view when signed in, go to login when signed out, defer while the
//! provider is still resolving. No retry, no polling.

use eduquiz_domain::AuthState;
use tokio::sync::watch;
use tracing::warn;

/// What the navigation shell should do for a given auth state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedirectDecision {
    /// Auth still resolving: make no redirect decision yet.
    Defer,
    /// No identity: redirect to the login destination.
    ToLogin,
    /// Signed in: remain on the current view.
    Stay,
}

/// Decide the redirect for one observed auth state.
pub fn decide_redirect(state: &AuthState) -> RedirectDecision {
    match state {
        AuthState::Resolving => RedirectDecision::Defer,
        AuthState::SignedOut => RedirectDecision::ToLogin,
        AuthState::SignedIn(_) => RedirectDecision::Stay,
    }
}

/// Wait until the provider leaves `Resolving` and return the settled state.
///
/// If the provider channel closes while still resolving, the identity will
/// never arrive; that is treated as signed out.
pub async fn await_auth_resolution(rx: &mut watch::Receiver<AuthState>) -> AuthState {
    loop {
        let state = rx.borrow().clone();
        if !matches!(state, AuthState::Resolving) {
            return state;
        }
        if rx.changed().await.is_err() {
            warn!("Identity provider went away before resolving");
            return AuthState::SignedOut;
        }
    }
}
