//! Types for auth API requests and responses.

use serde::{Deserialize, Serialize};

/// The signed-in user as returned by `/api/auth/session` and `/api/auth/me`.
///
/// The backend names the identifier `user_id`; both spellings are accepted.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Identity {
    #[serde(alias = "user_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub picture: Option<String>,
}

impl Identity {
    /// First letter of the display name, used when no picture is available.
    #[must_use]
    pub fn initial(&self) -> Option<char> {
        self.name.trim().chars().next()
    }

    /// Picture URL, ignoring blank values.
    #[must_use]
    pub fn picture_url(&self) -> Option<&str> {
        self.picture
            .as_deref()
            .map(str::trim)
            .filter(|picture| !picture.is_empty())
    }

    /// Letter shown in the avatar slot when there is no picture.
    #[must_use]
    pub fn avatar_initial(&self) -> char {
        self.initial()
            .map_or('?', |initial| initial.to_ascii_uppercase())
    }
}

/// Request payload for exchanging the one-time token.
#[derive(Serialize)]
pub struct SessionExchangeRequest<'a> {
    pub session_id: &'a str,
}

/// Authentication state shared between the handshake, the guard and the views.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum AuthState {
    /// A check is in flight or has not started.
    #[default]
    Unknown,
    Authenticated(Identity),
    /// A redirect to the login entry point is pending or done.
    Unauthenticated,
}

impl AuthState {
    #[must_use]
    pub fn identity(&self) -> Option<&Identity> {
        match self {
            AuthState::Authenticated(identity) => Some(identity),
            _ => None,
        }
    }
}
