//! Alert banners for load and action errors. Messages must be safe to render
//! and never include session tokens.

use leptos::prelude::*;

#[derive(Clone, Copy)]
pub enum AlertKind {
    Error,
    Info,
}

#[component]
pub fn Alert(kind: AlertKind, message: String) -> impl IntoView {
    let class = match kind {
        AlertKind::Error => {
            "rounded-sm border border-red-500/40 bg-red-950/40 px-4 py-3 text-sm text-red-200"
        }
        AlertKind::Info => {
            "rounded-sm border border-zinc-700 bg-zinc-900 px-4 py-3 text-sm text-zinc-300"
        }
    };

    view! { <div class=class role="alert">{message}</div> }
}
