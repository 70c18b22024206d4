//! Static identity provider adapter
//!
//! Resolves a fixed identity the way a real auth provider does: observers
//! first see `Resolving`, then the settled state arrives asynchronously.
//! Good enough for demo runs and for driving the redirect gate and score
//! watcher; a real provider would push further changes over time.

use eduquiz_application::ports::identity_provider::IdentityProviderPort;
use eduquiz_domain::{AuthState, Identity};
use tokio::sync::watch;
use tracing::debug;

/// Identity provider with a fixed outcome.
pub struct StaticIdentityProvider {
    tx: watch::Sender<AuthState>,
}

impl StaticIdentityProvider {
    /// Create a provider that settles to `identity` (or signed-out for
    /// `None`/anonymous). Must be called within a tokio runtime; the
    /// settled state is published from a spawned task so subscribers
    /// observe the `Resolving` phase first.
    pub fn new(identity: Option<Identity>) -> Self {
        let (tx, _) = watch::channel(AuthState::Resolving);

        let settled = match identity {
            Some(Identity::Anonymous) | None => AuthState::SignedOut,
            Some(identity) => AuthState::SignedIn(identity),
        };

        let publish = tx.clone();
        tokio::spawn(async move {
            debug!("Auth resolved: {settled:?}");
            publish.send_replace(settled);
        });

        Self { tx }
    }

    /// Push a sign-out, as a live provider would on session expiry.
    pub fn sign_out(&self) {
        self.tx.send_replace(AuthState::SignedOut);
    }
}

impl IdentityProviderPort for StaticIdentityProvider {
    fn observe(&self) -> watch::Receiver<AuthState> {
        self.tx.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eduquiz_application::use_cases::auth_gate::await_auth_resolution;

    #[tokio::test]
    async fn test_settles_to_signed_in() {
        let provider =
            StaticIdentityProvider::new(Some(Identity::User("a@example.com".to_string())));
        let mut rx = provider.observe();

        let state = await_auth_resolution(&mut rx).await;
        assert_eq!(
            state.identity(),
            Some(&Identity::User("a@example.com".to_string()))
        );
    }

    #[tokio::test]
    async fn test_no_identity_settles_to_signed_out() {
        let provider = StaticIdentityProvider::new(None);
        let mut rx = provider.observe();
        assert_eq!(await_auth_resolution(&mut rx).await, AuthState::SignedOut);
    }

    #[tokio::test]
    async fn test_anonymous_settles_to_signed_out() {
        let provider = StaticIdentityProvider::new(Some(Identity::Anonymous));
        let mut rx = provider.observe();
        assert_eq!(await_auth_resolution(&mut rx).await, AuthState::SignedOut);
    }

    #[tokio::test]
    async fn test_sign_out_reaches_observers() {
        let provider =
            StaticIdentityProvider::new(Some(Identity::User("a@example.com".to_string())));
        let mut rx = provider.observe();
        await_auth_resolution(&mut rx).await;

        provider.sign_out();
        rx.changed().await.unwrap();
        assert_eq!(*rx.borrow(), AuthState::SignedOut);
    }
}
