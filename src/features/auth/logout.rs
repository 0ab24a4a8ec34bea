//! Logout: ends the session on the server (best-effort) and always on the client.

use crate::{
    api::ApiClient,
    features::auth::{client, state::AuthContext},
    routes::Redirect,
};
use tracing::{info, warn};

/// Calls the logout endpoint, then unconditionally clears the session and
/// returns the replace-navigation to the login entry point. A server failure is
/// logged and swallowed. Clearing also invalidates any guard check still in
/// flight.
pub async fn sign_out(api: &ApiClient, auth: &AuthContext) -> Redirect {
    if let Err(err) = client::logout(api).await {
        warn!("Logout request failed, clearing local session anyway: {err}");
    }
    auth.clear_session();
    info!("signed out");
    Redirect::to_login()
}
