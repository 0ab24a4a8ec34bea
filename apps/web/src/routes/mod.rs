mod login;
mod pages;

pub(crate) use login::LoginPage;
pub(crate) use pages::ProtectedPage;

use leptos::prelude::*;
use leptos_router::components::{Redirect, Route, Routes};
use leptos_router::{NavigateOptions, path};
use roadsentinel::routes::{DEFAULT_PROTECTED_PATH, ProtectedRoute};

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Routes fallback=|| {
            view! {
                <Redirect
                    path=DEFAULT_PROTECTED_PATH
                    options=NavigateOptions { replace: true, ..NavigateOptions::default() }
                />
            }
        }>
            <Route path=path!("/login") view=LoginPage />
            <Route path=path!("/dashboard") view=|| view! { <ProtectedPage route=ProtectedRoute::Dashboard /> } />
            <Route path=path!("/cameras") view=|| view! { <ProtectedPage route=ProtectedRoute::Cameras /> } />
            <Route path=path!("/detections") view=|| view! { <ProtectedPage route=ProtectedRoute::Detections /> } />
            <Route path=path!("/map") view=|| view! { <ProtectedPage route=ProtectedRoute::Map /> } />
            <Route path=path!("/alerts") view=|| view! { <ProtectedPage route=ProtectedRoute::Alerts /> } />
            <Route path=path!("/analytics") view=|| view! { <ProtectedPage route=ProtectedRoute::Analytics /> } />
            <Route path=path!("/settings") view=|| view! { <ProtectedPage route=ProtectedRoute::Settings /> } />
        </Routes>
    }
}
