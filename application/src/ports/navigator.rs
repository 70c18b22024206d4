//! Navigator port
//!
//! Navigation is a side effect of the caller, never of the resolver: the
//! use case returns a route and the shell decides what to do with it.

use eduquiz_domain::QuestionRoute;

/// Destination hand-off to the external router.
pub trait NavigatorPort: Send + Sync {
    /// Navigate to the picked question.
    fn go_to_question(&self, route: &QuestionRoute);

    /// Navigate to the login destination (auth gate decided SignedOut).
    fn go_to_login(&self);
}
