//! Performs the redirects returned by the auth flow. The post-handshake
//! identity travels in the history entry's navigation state as JSON and is
//! read back by the guard of the route it lands on.

use leptos_router::{NavigateOptions, location::State};
use roadsentinel::{features::auth::Identity, routes::Redirect};
use wasm_bindgen::JsValue;

pub fn follow(navigate: &impl Fn(&str, NavigateOptions), redirect: &Redirect) {
    let state = redirect
        .user
        .as_ref()
        .and_then(|user| serde_json::to_string(user).ok())
        .map(|raw| JsValue::from_str(&raw));

    navigate(
        redirect.path,
        NavigateOptions {
            replace: redirect.replace,
            state: State::new(state),
            ..NavigateOptions::default()
        },
    );
}

/// Identity handed to the current entry, if it was reached through `follow`.
pub fn handed_off(state: &State) -> Option<Identity> {
    state
        .to_js_value()
        .as_string()
        .and_then(|raw| serde_json::from_str(&raw).ok())
}
