//! Client wrappers for the auth endpoints. These helpers centralize the
//! session-aware requests so the handshake, guard and logout flows stay
//! consistent and token material never reaches route code.

use crate::{
    api::{ApiClient, AppError},
    features::auth::{
        fragment::SessionToken,
        types::{Identity, SessionExchangeRequest},
    },
};
use secrecy::ExposeSecret;

/// Exchanges the one-time token for a server session.
/// The backend sets the session cookie on success; the token must never be logged.
///
/// # Errors
/// Returns an error if the token is rejected or the request fails.
pub async fn exchange_session(api: &ApiClient, token: &SessionToken) -> Result<Identity, AppError> {
    let request = SessionExchangeRequest {
        session_id: token.secret().expose_secret(),
    };
    api.post_json("/auth/session", &request).await
}

/// Fetches the identity behind the current session cookie.
///
/// # Errors
/// Returns an error when there is no valid session or the request fails.
pub async fn fetch_me(api: &ApiClient) -> Result<Identity, AppError> {
    api.get_json("/auth/me").await
}

/// Clears the current session on the server.
///
/// # Errors
/// Returns an error if the request fails; callers treat this as best-effort.
pub async fn logout(api: &ApiClient) -> Result<(), AppError> {
    api.post_empty("/auth/logout").await
}
