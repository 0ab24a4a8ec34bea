//! # RoadSentinel (Road Infrastructure Monitoring Client)
//!
//! `roadsentinel` is the client core of the RoadSentinel AI dashboard. It talks to
//! the RoadSentinel REST backend on behalf of a signed-in operator: cameras,
//! detections (potholes, billboards, railings, barriers), alerts and analytics.
//!
//! ## Session Handshake
//!
//! Sign-in is delegated to an external identity provider. After authenticating,
//! the provider sends the browser back to `/dashboard` with a one-time token in
//! the URL **fragment** (`#session_id=...`). Fragments are not transmitted to
//! servers during normal navigation, which keeps the token out of access logs and
//! `Referer` headers.
//!
//! 1. **Detect:** On page load the fragment is parsed once, synchronously, before
//!    any route is resolved.
//! 2. **Exchange:** The token is posted to `/api/auth/session` exactly once. The
//!    backend answers with the identity and sets an `HttpOnly` session cookie.
//! 3. **Hand-off:** The identity travels to the first protected route in the
//!    navigation state so the guard can skip its `/api/auth/me` round trip.
//!
//! ## Route Guard
//!
//! Every protected route is gated by a guard that either trusts the hand-off
//! identity or asks `/api/auth/me`. Any failure redirects to `/login`. While the
//! check is pending only a neutral loading view is produced.
//!
//! Client-side guards are a UX concern; the backend enforces access control on
//! every endpoint.
//!
//! ## Targets
//!
//! Everything except [`cli`] builds for `wasm32` as well. The Leptos frontend in
//! `apps/web` renders on top of this crate and performs the navigations the auth
//! flow returns; the `roadsentinel` binary drives the same flow headlessly.

pub mod api;
#[cfg(not(target_arch = "wasm32"))]
pub mod cli;
pub mod features;
pub mod routes;

#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};

/// Sent on every native request; browsers keep their own.
pub const APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

#[cfg(test)]
mod tests {
    use super::{APP_USER_AGENT, GIT_COMMIT_HASH, built_info};

    #[test]
    fn commit_hash_is_hex_or_unknown() {
        // Tarball and CI builds without a .git directory report "unknown".
        if GIT_COMMIT_HASH == "unknown" {
            assert!(built_info::GIT_COMMIT_HASH.is_none());
            return;
        }
        assert!(GIT_COMMIT_HASH.len() >= 7, "{GIT_COMMIT_HASH}");
        assert!(
            GIT_COMMIT_HASH.chars().all(|c| c.is_ascii_hexdigit()),
            "{GIT_COMMIT_HASH}"
        );
    }

    #[test]
    fn user_agent_names_this_release() {
        assert_eq!(
            APP_USER_AGENT,
            format!("roadsentinel/{}", env!("CARGO_PKG_VERSION"))
        );
    }
}
