//! Auth session state shared by the handshake, the route guard and the views.
//! The context is an explicit handle (provided through Leptos context in the
//! web app) rather than a global, so each page and each test owns an
//! independent instance. Only non-sensitive identity metadata is kept in
//! memory; the session cookie never leaves the HTTP layer.
//!
//! Every `clear_session` starts a new session generation. A check that began
//! under an older generation can no longer store its result, which keeps a
//! slow `/api/auth/me` from resurrecting a session that was signed out while
//! it was in flight.

use crate::features::auth::types::{AuthState, Identity};
use std::sync::{Arc, PoisonError, RwLock};
use tracing::debug;

#[derive(Debug, Default)]
struct Session {
    state: AuthState,
    generation: u64,
}

/// Auth session context shared through the app.
#[derive(Clone, Debug, Default)]
pub struct AuthContext {
    session: Arc<RwLock<Session>>,
}

impl AuthContext {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(&self) -> AuthState {
        self.session
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .state
            .clone()
    }

    #[must_use]
    pub fn identity(&self) -> Option<Identity> {
        self.state().identity().cloned()
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        matches!(self.state(), AuthState::Authenticated(_))
    }

    /// Current session generation; bumped by every `clear_session`.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.session
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .generation
    }

    /// Replaces the in-memory identity wholesale after a successful exchange.
    pub fn set_session(&self, identity: Identity) {
        debug!("auth state: authenticated");
        let mut session = self.session.write().unwrap_or_else(PoisonError::into_inner);
        session.state = AuthState::Authenticated(identity);
    }

    /// Stores `identity` only if no `clear_session` happened since
    /// `generation` was read. Returns whether the identity was stored.
    pub fn set_session_if_current(&self, generation: u64, identity: Identity) -> bool {
        let mut session = self.session.write().unwrap_or_else(PoisonError::into_inner);
        if session.generation != generation {
            debug!(
                expected = generation,
                current = session.generation,
                "auth state: stale result dropped"
            );
            return false;
        }
        debug!("auth state: authenticated");
        session.state = AuthState::Authenticated(identity);
        true
    }

    /// Drops any identity, typically on a failed check or logout.
    pub fn clear_session(&self) {
        debug!("auth state: unauthenticated");
        let mut session = self.session.write().unwrap_or_else(PoisonError::into_inner);
        session.state = AuthState::Unauthenticated;
        session.generation = session.generation.wrapping_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::AuthContext;
    use crate::features::auth::types::{AuthState, Identity};

    fn ann() -> Identity {
        Identity {
            id: "u1".to_string(),
            name: "Ann".to_string(),
            email: "ann@x.com".to_string(),
            picture: None,
        }
    }

    #[test]
    fn starts_unknown() {
        let auth = AuthContext::new();
        assert_eq!(auth.state(), AuthState::Unknown);
        assert!(!auth.is_authenticated());
    }

    #[test]
    fn set_and_clear_session() {
        let auth = AuthContext::new();
        auth.set_session(ann());
        assert_eq!(auth.identity(), Some(ann()));

        auth.clear_session();
        assert_eq!(auth.state(), AuthState::Unauthenticated);
        assert_eq!(auth.identity(), None);
    }

    #[test]
    fn clones_share_state_but_new_contexts_do_not() {
        let auth = AuthContext::new();
        let shared = auth.clone();
        let independent = AuthContext::new();

        shared.set_session(ann());
        assert!(auth.is_authenticated());
        assert!(!independent.is_authenticated());
    }

    #[test]
    fn clearing_invalidates_older_generations() {
        let auth = AuthContext::new();
        let before = auth.generation();

        auth.clear_session();
        assert_ne!(auth.generation(), before);
        assert!(!auth.set_session_if_current(before, ann()));
        assert_eq!(auth.state(), AuthState::Unauthenticated);

        assert!(auth.set_session_if_current(auth.generation(), ann()));
        assert_eq!(auth.identity(), Some(ann()));
    }

    #[test]
    fn set_session_keeps_the_generation() {
        let auth = AuthContext::new();
        let generation = auth.generation();
        auth.set_session(ann());
        assert_eq!(auth.generation(), generation);
    }
}
