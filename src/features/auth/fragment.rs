//! One-time session token transport. The identity provider appends the token to
//! the landing URL fragment (`#session_id=...`). Browsers do not send fragments
//! to servers, so the token stays out of access logs and `Referer` headers.
//! Keep it there: never move it to the query string.

use secrecy::SecretString;
use url::{Url, form_urlencoded};

/// Fragment key the identity provider uses for the one-time token.
pub const SESSION_TOKEN_KEY: &str = "session_id";

/// Opaque single-use token. `Debug` output is redacted.
#[derive(Debug)]
pub struct SessionToken(SecretString);

impl SessionToken {
    #[must_use]
    pub fn secret(&self) -> &SecretString {
        &self.0
    }
}

/// Result of inspecting the landing URL fragment.
#[derive(Debug)]
pub enum FragmentToken {
    /// No fragment, or a fragment without the token key.
    Absent,
    /// The key is present with an empty value.
    Empty,
    Present(SessionToken),
}

impl FragmentToken {
    /// Whether the handshake should own this page load.
    #[must_use]
    pub fn has_key(&self) -> bool {
        !matches!(self, FragmentToken::Absent)
    }

    #[must_use]
    pub fn into_token(self) -> Option<SessionToken> {
        match self {
            FragmentToken::Present(token) => Some(token),
            FragmentToken::Absent | FragmentToken::Empty => None,
        }
    }
}

/// Reads the token from the fragment of `url` using form-urlencoded rules.
/// The first occurrence of the key wins.
#[must_use]
pub fn read_session_token(url: &Url) -> FragmentToken {
    let Some(fragment) = url.fragment() else {
        return FragmentToken::Absent;
    };

    let value = form_urlencoded::parse(fragment.as_bytes())
        .find(|(key, _)| key == SESSION_TOKEN_KEY)
        .map(|(_, value)| value.into_owned());

    match value {
        None => FragmentToken::Absent,
        Some(value) if value.trim().is_empty() => FragmentToken::Empty,
        Some(value) => FragmentToken::Present(SessionToken(SecretString::from(value))),
    }
}
