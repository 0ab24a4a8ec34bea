//! Session-exchange handshake: converts the one-time fragment token into a
//! server session, exactly once per page load.
//!
//! The token is captured when the handshake is constructed and never re-read
//! from the URL. A latch (`NotStarted -> InFlight -> Done`) is advanced under a
//! lock before the exchange starts, so repeated triggers are no-ops even while the
//! first exchange is still in flight. A consumed token is never retried.
//!
//! The outcome carries the navigation to perform: the dashboard with the
//! identity in the navigation state, or the login entry point.

use crate::{
    api::ApiClient,
    features::auth::{
        client,
        fragment::{SessionToken, read_session_token},
        state::AuthContext,
        types::Identity,
    },
    routes::Redirect,
};
use std::sync::{Mutex, PoisonError};
use tracing::{debug, info, warn};
use url::Url;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Latch {
    NotStarted,
    InFlight,
    Done,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HandshakeOutcome {
    Authenticated(Identity),
    /// The exchange failed; the user was sent to the login entry point.
    Rejected,
    /// No usable token; the user was sent to the login entry point.
    MissingToken,
    /// The latch was already taken; nothing happened.
    AlreadyTriggered,
}

impl HandshakeOutcome {
    /// Where the page goes next. `None` for a trigger that lost the latch.
    #[must_use]
    pub fn redirect(&self) -> Option<Redirect> {
        match self {
            HandshakeOutcome::Authenticated(identity) => {
                Some(Redirect::to_dashboard(identity.clone()))
            }
            HandshakeOutcome::Rejected | HandshakeOutcome::MissingToken => {
                Some(Redirect::to_login())
            }
            HandshakeOutcome::AlreadyTriggered => None,
        }
    }
}

#[derive(Debug)]
pub struct AuthHandshake {
    token: Mutex<Option<SessionToken>>,
    latch: Mutex<Latch>,
}

impl AuthHandshake {
    /// Builds a handshake around an already extracted token.
    #[must_use]
    pub fn new(token: Option<SessionToken>) -> Self {
        Self {
            token: Mutex::new(token),
            latch: Mutex::new(Latch::NotStarted),
        }
    }

    /// Synchronous load-time check: returns a handshake only when the fragment
    /// carries the token key. An empty value still yields a handshake, which will
    /// route to login without calling the backend.
    #[must_use]
    pub fn detect(location: &Url) -> Option<Self> {
        let fragment = read_session_token(location);
        if !fragment.has_key() {
            return None;
        }
        Some(Self::new(fragment.into_token()))
    }

    #[must_use]
    pub fn latch(&self) -> Latch {
        *self.latch.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Moves the latch out of `NotStarted`. Only the first caller wins.
    fn begin(&self) -> bool {
        let mut latch = self.latch.lock().unwrap_or_else(PoisonError::into_inner);
        if *latch != Latch::NotStarted {
            return false;
        }
        *latch = Latch::InFlight;
        true
    }

    fn finish(&self) {
        *self.latch.lock().unwrap_or_else(PoisonError::into_inner) = Latch::Done;
    }

    /// Runs the exchange. Safe to trigger any number of times; only the first
    /// trigger reaches the backend.
    pub async fn run(&self, api: &ApiClient, auth: &AuthContext) -> HandshakeOutcome {
        if !self.begin() {
            debug!("handshake already triggered");
            return HandshakeOutcome::AlreadyTriggered;
        }

        // Taking the token out leaves nothing behind for a second reader.
        let token = self
            .token
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();

        let Some(token) = token else {
            debug!("no session token in fragment");
            auth.clear_session();
            self.finish();
            return HandshakeOutcome::MissingToken;
        };

        let outcome = match client::exchange_session(api, &token).await {
            Ok(identity) => {
                info!(user = %identity.id, "session established");
                auth.set_session(identity.clone());
                HandshakeOutcome::Authenticated(identity)
            }
            Err(err) => {
                warn!("Session exchange failed: {err}");
                auth.clear_session();
                HandshakeOutcome::Rejected
            }
        };

        self.finish();
        outcome
    }
}
