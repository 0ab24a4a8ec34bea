//! Shared API access: configuration, the credentialed HTTP client and the error
//! type every feature client returns.
//!
//! All backend traffic goes through a single [`ApiClient`]. On native targets it owns the cookie
//! store, so the session cookie set by `/api/auth/session` is attached to every
//! later call without client code ever reading it. These helpers do not hold
//! secrets themselves; callers must still avoid logging token material.

pub mod client;
pub mod config;
pub mod errors;

pub use client::ApiClient;
pub use config::AppConfig;
pub use errors::AppError;
