use crate::{
    components::{Alert, AlertKind, AppShell, FullPageSpinner},
    features::auth::{follow, navigation::handed_off, use_api, use_auth},
};
use leptos::{prelude::*, task::spawn_local};
use leptos_router::hooks::{use_location, use_navigate};
use roadsentinel::{
    features::auth::{AuthState, RouteGuard},
    routes::ProtectedRoute,
};
use std::sync::Arc;

/// Mounts one `RouteGuard` per navigation into `route` and renders the page
/// inside the app shell once the session is confirmed.
#[component]
pub fn RequireAuth(route: ProtectedRoute, children: ChildrenFn) -> impl IntoView {
    let api = match use_api() {
        Ok(api) => api,
        Err(err) => {
            return view! { <Alert kind=AlertKind::Error message=err.to_string() /> }.into_any();
        }
    };
    let auth = use_auth();
    let navigate = use_navigate();
    let handoff = handed_off(&use_location().state.get_untracked());
    let guard = Arc::new(RouteGuard::mount(route, &auth));
    let status = RwSignal::new(AuthState::Unknown);

    Effect::new(move |_| {
        let guard = Arc::clone(&guard);
        let api = api.clone();
        let auth = auth.clone();
        let navigate = navigate.clone();
        let handoff = handoff.clone();
        spawn_local(async move {
            let state = guard.check(&api, &auth, handoff).await;
            // Disposed: the user already navigated elsewhere.
            if status.try_set(state).is_some() {
                return;
            }
            // UX-only guard; real access control lives on the API.
            if let Some(redirect) = guard.redirect() {
                follow(&navigate, &redirect);
            }
        });
    });

    view! {
        {move || match status.get() {
            AuthState::Unknown => view! { <FullPageSpinner /> }.into_any(),
            AuthState::Unauthenticated => ().into_any(),
            AuthState::Authenticated(user) => {
                let children = children.clone();
                view! { <AppShell route=route user=user>{children()}</AppShell> }.into_any()
            }
        }}
    }
    .into_any()
}
