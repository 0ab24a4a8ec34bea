//! Login entry point: hands off to the external identity provider.
//!
//! The provider endpoint is a constant and the callback is built from the
//! browser's own origin only. Nothing else may feed into the redirect target.
//! The caller performs the full-page navigation; no local state changes.

use crate::{api::AppError, routes::DEFAULT_PROTECTED_PATH};
use url::{Origin, Url};

/// The identity provider's sign-in endpoint.
pub const IDENTITY_PROVIDER_URL: &str = "https://auth.emergentagent.com/";

/// Query parameter the provider reads the callback target from.
const REDIRECT_PARAM: &str = "redirect";

/// Builds the provider URL whose only parameter is `<origin>/dashboard`.
///
/// # Errors
/// Returns `AppError::Config` for opaque origins (e.g. `file:` or `data:` pages),
/// which cannot receive a callback.
pub fn login_redirect_url(origin: &Origin) -> Result<Url, AppError> {
    if !origin.is_tuple() {
        return Err(AppError::Config(
            "Cannot sign in from an opaque origin.".to_string(),
        ));
    }

    let callback = format!("{}{DEFAULT_PROTECTED_PATH}", origin.ascii_serialization());
    let mut url = Url::parse(IDENTITY_PROVIDER_URL)
        .map_err(|err| AppError::Config(format!("Invalid identity provider URL: {err}")))?;
    url.query_pairs_mut().append_pair(REDIRECT_PARAM, &callback);
    Ok(url)
}
