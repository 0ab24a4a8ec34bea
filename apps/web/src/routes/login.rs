//! Public sign-in page. The only way in is the external identity provider,
//! which returns to this origin's `/dashboard` with a session token.

use crate::components::{Alert, AlertKind};
use leptos::prelude::*;
use roadsentinel::{api::AppError, features::auth::login::login_redirect_url};
use url::Url;

const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
const GIT_SHA: &str = env!("ROADSENTINEL_WEB_GIT_SHA");

#[component]
pub fn LoginPage() -> impl IntoView {
    let (error, set_error) = signal::<Option<String>>(None);

    let on_sign_in = move |_| match provider_url() {
        Ok(target) => {
            if window().location().set_href(target.as_str()).is_err() {
                set_error.set(Some("Could not open the sign-in page.".to_string()));
            }
        }
        Err(err) => set_error.set(Some(err.to_string())),
    };

    view! {
        <div class="min-h-screen flex items-center justify-center bg-zinc-950 px-4">
            <div class="w-full max-w-sm space-y-8">
                <div class="space-y-2 text-center">
                    <h1 class="text-3xl font-semibold tracking-tight text-zinc-100">"RoadSentinel"</h1>
                    <p class="text-sm text-zinc-400">
                        "AI-powered detection of road infrastructure damage"
                    </p>
                </div>
                <Show when=move || error.get().is_some()>
                    <Alert kind=AlertKind::Error message=error.get().unwrap_or_default() />
                </Show>
                <button
                    type="button"
                    class="w-full rounded-sm bg-emerald-500 px-4 py-3 text-sm font-semibold text-zinc-950 hover:bg-emerald-400"
                    on:click=on_sign_in
                >
                    "Sign in with Google"
                </button>
                <p class="text-center text-xs text-zinc-600">
                    {format!("Road Infrastructure Monitoring System v{APP_VERSION} ({GIT_SHA})")}
                </p>
            </div>
        </div>
    }
}

/// Provider URL with this page's origin as the callback.
fn provider_url() -> Result<Url, AppError> {
    let href = window()
        .location()
        .href()
        .map_err(|_| AppError::Config("Cannot read the page location.".to_string()))?;
    let current =
        Url::parse(&href).map_err(|err| AppError::Config(format!("Invalid page location: {err}")))?;
    login_redirect_url(&current.origin())
}
