//! Auth session context for the frontend. The provider creates one
//! `AuthContext` and one `ApiClient` per page load and shares them through
//! Leptos context. Only non-sensitive identity metadata is kept in memory; the
//! session cookie stays `HttpOnly` in the browser.

use crate::components::{Alert, AlertKind};
use leptos::prelude::*;
use roadsentinel::{
    api::{ApiClient, AppConfig, AppError},
    features::auth::AuthContext,
};

/// Provides the auth context and the API client to every route.
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    provide_context(AuthContext::new());

    match ApiClient::new(&AppConfig::load()) {
        Ok(api) => {
            provide_context(api);
            children().into_any()
        }
        Err(err) => view! {
            <div class="min-h-screen flex items-center justify-center bg-zinc-950 p-8">
                <Alert kind=AlertKind::Error message=err.to_string() />
            </div>
        }
        .into_any(),
    }
}

/// Returns the current auth context or a fallback empty context.
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().unwrap_or_default()
}

/// Returns the shared API client. Missing only outside `AuthProvider`.
pub fn use_api() -> Result<ApiClient, AppError> {
    use_context::<ApiClient>()
        .ok_or_else(|| AppError::Config("API client is not configured.".to_string()))
}
