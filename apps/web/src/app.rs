//! Root component: session context, the one-shot handshake and the router.

use crate::{
    features::auth::{AuthCallback, AuthProvider, landing_handshake},
    routes::AppRoutes,
};
use leptos::prelude::*;
use leptos_router::components::Router;

#[component]
pub fn App() -> impl IntoView {
    // Read before the router touches the URL; the fragment is consumed once.
    let handshake = landing_handshake();

    view! {
        <AuthProvider>
            <Router>
                <AuthCallback handshake=handshake.clone()>
                    <AppRoutes />
                </AuthCallback>
            </Router>
        </AuthProvider>
    }
}
