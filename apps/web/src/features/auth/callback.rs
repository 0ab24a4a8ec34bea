//! Session exchange on page load. When the landing URL carries a
//! `session_id` fragment, the routes stay hidden behind a spinner until the
//! handshake has settled and its redirect has been performed.

use crate::{
    components::FullPageSpinner,
    features::auth::{follow, use_api, use_auth},
};
use leptos::{prelude::*, task::spawn_local};
use leptos_router::hooks::use_navigate;
use roadsentinel::features::auth::AuthHandshake;
use std::sync::Arc;
use url::Url;

/// The handshake for the URL the page was loaded with, if its fragment
/// carries a session token.
pub fn landing_handshake() -> Option<Arc<AuthHandshake>> {
    let href = window().location().href().ok()?;
    let landing = Url::parse(&href).ok()?;
    AuthHandshake::detect(&landing).map(Arc::new)
}

#[component]
pub fn AuthCallback(handshake: Option<Arc<AuthHandshake>>, children: ChildrenFn) -> impl IntoView {
    let exchanging = RwSignal::new(handshake.is_some());

    if let (Some(handshake), Ok(api)) = (handshake, use_api()) {
        let auth = use_auth();
        let navigate = use_navigate();

        Effect::new(move |_| {
            let handshake = Arc::clone(&handshake);
            let api = api.clone();
            let auth = auth.clone();
            let navigate = navigate.clone();
            spawn_local(async move {
                // A second run finds the latch taken and changes nothing.
                if let Some(redirect) = handshake.run(&api, &auth).await.redirect() {
                    follow(&navigate, &redirect);
                    exchanging.set(false);
                }
            });
        });
    }

    view! {
        <Show when=move || !exchanging.get() fallback=|| view! { <FullPageSpinner /> }>
            {children()}
        </Show>
    }
}
