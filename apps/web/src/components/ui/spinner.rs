use leptos::prelude::*;

#[component]
pub fn Spinner() -> impl IntoView {
    view! {
        <div
            class="inline-block h-7 w-7 animate-spin rounded-full border-4 border-emerald-200 border-t-emerald-500"
            role="status"
            aria-live="polite"
            aria-label="Loading"
        ></div>
    }
}

/// Shown while the session is being established or checked.
#[component]
pub fn FullPageSpinner() -> impl IntoView {
    view! {
        <div class="min-h-screen flex items-center justify-center bg-zinc-950">
            <Spinner />
        </div>
    }
}
