//! Route guard for protected views. One guard is mounted per navigation into a
//! protected route and checks the session at most once:
//!
//! - `Unknown -> Authenticated` when the navigation carries a hand-off identity
//!   (no network call) or `/api/auth/me` succeeds;
//! - `Unknown -> Unauthenticated` on any failure, followed by a redirect to login.
//!
//! Neither terminal state leads back to `Unknown`. A previously authenticated
//! context is never trusted on its own. A guard belongs to the session
//! generation it was mounted in: if the session is cleared (logout, another
//! failed check) while its check is in flight, the result is dropped and the
//! guard settles on `Unauthenticated`. This is a UX guard; the API enforces
//! access control.

use crate::{
    api::ApiClient,
    features::auth::{
        client,
        state::AuthContext,
        types::{AuthState, Identity},
    },
    routes::{ProtectedRoute, Redirect},
};
use std::sync::{
    Mutex, PoisonError,
    atomic::{AtomicBool, Ordering},
};
use tracing::{debug, warn};

#[derive(Debug)]
pub struct RouteGuard {
    route: ProtectedRoute,
    generation: u64,
    state: Mutex<AuthState>,
    checked: AtomicBool,
}

impl RouteGuard {
    #[must_use]
    pub fn mount(route: ProtectedRoute, auth: &AuthContext) -> Self {
        Self {
            route,
            generation: auth.generation(),
            state: Mutex::new(AuthState::Unknown),
            checked: AtomicBool::new(false),
        }
    }

    #[must_use]
    pub fn route(&self) -> ProtectedRoute {
        self.route
    }

    #[must_use]
    pub fn state(&self) -> AuthState {
        self.state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Transitions out of `Unknown`; later transitions are ignored.
    fn settle(&self, next: AuthState) -> bool {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        if *state != AuthState::Unknown {
            return false;
        }
        *state = next;
        true
    }

    /// Determines the auth state for this mount. `handoff` is the identity
    /// carried in the navigation state of the entry being rendered, if any.
    /// Only the first call does any work; later calls return the settled state.
    pub async fn check(
        &self,
        api: &ApiClient,
        auth: &AuthContext,
        handoff: Option<Identity>,
    ) -> AuthState {
        if self.checked.swap(true, Ordering::SeqCst) {
            return self.state();
        }

        if let Some(user) = handoff {
            debug!(route = self.route.path(), "trusting hand-off identity");
            self.accept(auth, user);
            return self.state();
        }

        match client::fetch_me(api).await {
            Ok(user) => self.accept(auth, user),
            Err(err) => {
                // Network failures and 401s need the same fix: sign in again.
                warn!("Session check failed: {err}");
                if self.settle(AuthState::Unauthenticated) {
                    auth.clear_session();
                }
            }
        }

        self.state()
    }

    fn accept(&self, auth: &AuthContext, user: Identity) {
        if auth.set_session_if_current(self.generation, user.clone()) {
            self.settle(AuthState::Authenticated(user));
        } else {
            debug!(
                route = self.route.path(),
                "session ended during the check; dropping its result"
            );
            self.settle(AuthState::Unauthenticated);
        }
    }

    /// The navigation this guard requires: login once it settled on
    /// `Unauthenticated`, nothing otherwise.
    #[must_use]
    pub fn redirect(&self) -> Option<Redirect> {
        match self.state() {
            AuthState::Unauthenticated => Some(Redirect::to_login()),
            AuthState::Unknown | AuthState::Authenticated(_) => None,
        }
    }
}
