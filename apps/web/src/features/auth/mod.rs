//! Browser side of the auth flow. The session logic lives in
//! `roadsentinel::features::auth`; these components provide its context,
//! run it on mount and perform the redirects it returns with the router.

mod callback;
mod guards;
mod navigation;
mod state;

pub(crate) use callback::{AuthCallback, landing_handshake};
pub(crate) use guards::RequireAuth;
pub(crate) use navigation::follow;
pub(crate) use state::{AuthProvider, use_api, use_auth};
