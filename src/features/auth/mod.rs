//! Auth feature module covering the session-exchange handshake, the route guard,
//! the login hand-off and logout. It keeps authentication logic out of the views
//! and must stay aligned with backend protocol expectations. This module touches
//! security boundaries and must avoid logging token material.
//!
//! Flow Overview: the identity provider redirects back with a one-time token in
//! the fragment; the handshake exchanges it for a session cookie and hands the
//! identity to the first protected route. Without a token, the guard asks
//! `/api/auth/me`. Any failure lands on `/login`. Each step returns the
//! [`Redirect`](crate::routes::Redirect) it needs and leaves performing it to
//! the router.

pub mod client;
pub mod fragment;
pub mod guards;
pub mod handshake;
pub mod login;
pub mod logout;
pub mod state;
pub mod types;

pub use guards::RouteGuard;
pub use handshake::{AuthHandshake, HandshakeOutcome};
pub use state::AuthContext;
pub use types::{AuthState, Identity};
