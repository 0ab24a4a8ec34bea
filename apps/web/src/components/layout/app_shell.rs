//! Shell around every protected page: the sidebar with the route list and the
//! unread alerts badge, plus a header with the signed-in user and sign-out.
//! Navigation remains client-side; the backend enforces access control.

use crate::features::auth::{follow, use_api, use_auth};
use leptos::{prelude::*, task::spawn_local};
use leptos_router::{components::A, hooks::use_navigate};
use roadsentinel::{
    features::{
        alerts::client::{UNREAD_POLL_INTERVAL, unread_badge},
        auth::{Identity, logout::sign_out},
    },
    routes::ProtectedRoute,
};

const LINK_ACTIVE: &str = "flex items-center justify-between rounded-sm px-3 py-2 text-sm font-medium bg-emerald-500/10 text-emerald-400";
const LINK_IDLE: &str = "flex items-center justify-between rounded-sm px-3 py-2 text-sm font-medium text-zinc-400 hover:bg-zinc-800 hover:text-zinc-100";

#[component]
pub fn AppShell(route: ProtectedRoute, user: Identity, children: Children) -> impl IntoView {
    let api = use_api().ok();
    let auth = use_auth();
    let navigate = use_navigate();
    let (collapsed, set_collapsed) = signal(false);
    let unread = RwSignal::new(None::<u64>);

    let poll = {
        let api = api.clone();
        move || {
            if let Some(api) = api.clone() {
                spawn_local(async move {
                    // The shell may be gone by the time the count arrives.
                    let _ = unread.try_set(unread_badge(&api).await);
                });
            }
        }
    };
    poll();
    if let Ok(handle) = set_interval_with_handle(poll, UNREAD_POLL_INTERVAL) {
        on_cleanup(move || handle.clear());
    }

    let on_sign_out = move |_| {
        let Some(api) = api.clone() else {
            return;
        };
        let auth = auth.clone();
        let navigate = navigate.clone();
        spawn_local(async move {
            let redirect = sign_out(&api, &auth).await;
            follow(&navigate, &redirect);
        });
    };

    let nav = ProtectedRoute::ALL
        .into_iter()
        .map(|item| {
            let class = if item == route { LINK_ACTIVE } else { LINK_IDLE };
            let badge = (item == ProtectedRoute::Alerts).then(|| {
                view! {
                    <Show when=move || unread.get().is_some() && !collapsed.get()>
                        <span class="rounded-sm bg-red-500 px-1.5 text-xs font-semibold text-white">
                            {move || unread.get().map(|count| count.to_string()).unwrap_or_default()}
                        </span>
                    </Show>
                }
            });
            view! {
                <A href=item.path() {..} class=class>
                    <span class:hidden=move || collapsed.get()>{item.label()}</span>
                    {badge}
                </A>
            }
        })
        .collect_view();

    let avatar = match user.picture_url() {
        Some(picture) => view! {
            <img src=picture.to_string() alt="" class="h-8 w-8 rounded-sm object-cover" />
        }
        .into_any(),
        None => view! {
            <div class="flex h-8 w-8 items-center justify-center rounded-sm bg-emerald-500/20 text-sm font-semibold text-emerald-400">
                {user.avatar_initial().to_string()}
            </div>
        }
        .into_any(),
    };

    view! {
        <div class="min-h-screen flex bg-zinc-950 text-zinc-100">
            <aside
                class="flex-shrink-0 flex flex-col border-r border-zinc-800 bg-zinc-900"
                class:w-64=move || !collapsed.get()
                class:w-16=move || collapsed.get()
            >
                <div class="flex items-center justify-between px-4 py-5">
                    <span class="font-semibold tracking-tight" class:hidden=move || collapsed.get()>
                        "RoadSentinel"
                    </span>
                    <button
                        type="button"
                        class="rounded-sm p-1 text-zinc-400 hover:bg-zinc-800"
                        aria-label="Toggle sidebar"
                        on:click=move |_| set_collapsed.update(|value| *value = !*value)
                    >
                        {move || if collapsed.get() { "»" } else { "«" }}
                    </button>
                </div>
                <nav class="flex-1 space-y-1 px-2">{nav}</nav>
            </aside>
            <div class="flex-1 flex flex-col">
                <header class="flex items-center justify-end gap-4 border-b border-zinc-800 px-6 py-3">
                    {avatar}
                    <div class="text-sm">
                        <div class="font-medium">{user.name.clone()}</div>
                        <div class="text-zinc-500">{user.email.clone()}</div>
                    </div>
                    <button
                        type="button"
                        class="rounded-sm border border-zinc-700 px-3 py-1.5 text-sm text-zinc-300 hover:bg-zinc-800"
                        on:click=on_sign_out
                    >
                        "Sign Out"
                    </button>
                </header>
                <main class="flex-1 overflow-y-auto p-6">{children()}</main>
            </div>
        </div>
    }
}
