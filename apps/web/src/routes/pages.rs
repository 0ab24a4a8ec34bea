//! Protected pages. Each one renders behind `RequireAuth` and loads its data
//! with the shared page loader once the guard lets it mount.

use crate::{
    components::{Alert, AlertKind, Spinner},
    features::auth::{RequireAuth, use_api},
};
use leptos::{prelude::*, task::spawn_local};
use roadsentinel::{
    api::AppError,
    features::{
        alerts::{client::acknowledge_alert, types::Alert as DashboardAlert},
        cameras::types::{Camera, active_count},
        detections::types::{Detection, DetectionStats, DetectionType, Severity, TimelinePoint},
        model::types::ModelStatus,
    },
    routes::{
        ProtectedRoute,
        pages::{self, PageData},
    },
};

type PageResource = LocalResource<Result<PageData, AppError>>;

#[component]
pub fn ProtectedPage(route: ProtectedRoute) -> impl IntoView {
    view! {
        <RequireAuth route=route>
            <PageContent route=route />
        </RequireAuth>
    }
}

#[component]
fn PageContent(route: ProtectedRoute) -> impl IntoView {
    let api = use_api();
    let data: PageResource = LocalResource::new(move || {
        let api = api.clone();
        async move { pages::load(route, &api?).await }
    });

    view! {
        <div class="space-y-6">
            <h1 class="text-2xl font-semibold tracking-tight">{route.label()}</h1>
            <Suspense fallback=move || view! { <Spinner /> }>
                {move || match data.get() {
                    Some(Ok(page)) => render_page(page, data),
                    Some(Err(err)) => {
                        view! { <Alert kind=AlertKind::Error message=err.to_string() /> }.into_any()
                    }
                    None => view! { <Spinner /> }.into_any(),
                }}
            </Suspense>
        </div>
    }
}

fn render_page(page: PageData, data: PageResource) -> AnyView {
    match page {
        PageData::Dashboard {
            stats,
            alerts,
            cameras,
            timeline,
        } => view! {
            <div class="grid grid-cols-2 gap-4 md:grid-cols-4">
                <StatCard label="Total Detections" value=stats.total_detections.to_string() />
                <StatCard
                    label="Active Cameras"
                    value=format!("{}/{}", active_count(&cameras), cameras.len())
                />
                <StatCard label="Critical Alerts" value=stats.critical_alerts.to_string() />
                <StatCard label="Potholes" value=stats.potholes.to_string() />
            </div>
            <AlertList alerts=alerts data=data />
            <TimelineTable timeline=timeline />
        }
        .into_any(),
        PageData::Cameras { cameras } => view! { <CameraTable cameras=cameras /> }.into_any(),
        PageData::Detections { detections } | PageData::Map { detections } => {
            view! { <DetectionTable detections=detections /> }.into_any()
        }
        PageData::Alerts { alerts } => view! { <AlertList alerts=alerts data=data /> }.into_any(),
        PageData::Analytics { stats, timeline } => view! {
            <Breakdown stats=stats />
            <TimelineTable timeline=timeline />
        }
        .into_any(),
        PageData::Settings { cameras, model } => view! {
            <ModelCard model=model />
            <CameraTable cameras=cameras />
        }
        .into_any(),
    }
}

#[component]
fn StatCard(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="rounded-sm border border-zinc-800 bg-zinc-900 p-4">
            <div class="text-xs uppercase tracking-wider text-zinc-500">{label}</div>
            <div class="mt-1 text-2xl font-semibold">{value}</div>
        </div>
    }
}

/// Unread alerts; acknowledging one reloads the page data.
#[component]
fn AlertList(alerts: Vec<DashboardAlert>, data: PageResource) -> impl IntoView {
    if alerts.is_empty() {
        return view! { <Alert kind=AlertKind::Info message="No unread alerts.".to_string() /> }
            .into_any();
    }
    let api = use_api().ok();

    view! {
        <ul class="divide-y divide-zinc-800 rounded-sm border border-zinc-800 bg-zinc-900">
            <For
                each=move || alerts.clone()
                key=|alert| alert.alert_id.clone()
                children=move |alert| {
                    let api = api.clone();
                    let alert_id = alert.alert_id.clone();
                    let on_ack = move |_| {
                        let Some(api) = api.clone() else {
                            return;
                        };
                        let alert_id = alert_id.clone();
                        spawn_local(async move {
                            if acknowledge_alert(&api, &alert_id).await.is_ok() {
                                data.refetch();
                            }
                        });
                    };
                    view! {
                        <li class="flex items-center justify-between gap-4 px-4 py-3">
                            <div class="space-y-1">
                                <div class="text-sm">{alert.message}</div>
                                <div class="text-xs text-zinc-500">
                                    {format!("{} · {}", severity_label(alert.severity), alert.timestamp)}
                                </div>
                            </div>
                            <button
                                type="button"
                                class="rounded-sm border border-zinc-700 px-2 py-1 text-xs text-zinc-300 hover:bg-zinc-800"
                                on:click=on_ack
                            >
                                "Acknowledge"
                            </button>
                        </li>
                    }
                }
            />
        </ul>
    }
    .into_any()
}

#[component]
fn CameraTable(cameras: Vec<Camera>) -> impl IntoView {
    view! {
        <table class="min-w-full divide-y divide-zinc-800 text-sm">
            <thead class="text-left text-xs uppercase tracking-wider text-zinc-500">
                <tr>
                    <th class="px-4 py-2">"Name"</th>
                    <th class="px-4 py-2">"Location"</th>
                    <th class="px-4 py-2">"Status"</th>
                </tr>
            </thead>
            <tbody class="divide-y divide-zinc-800">
                {cameras
                    .into_iter()
                    .map(|camera| {
                        view! {
                            <tr>
                                <td class="px-4 py-2">{camera.name}</td>
                                <td class="px-4 py-2 text-zinc-400">{camera.location}</td>
                                <td class="px-4 py-2">
                                    {if camera.is_active { "Active" } else { "Inactive" }}
                                </td>
                            </tr>
                        }
                    })
                    .collect_view()}
            </tbody>
        </table>
    }
}

#[component]
fn DetectionTable(detections: Vec<Detection>) -> impl IntoView {
    if detections.is_empty() {
        return view! { <Alert kind=AlertKind::Info message="No detections yet.".to_string() /> }
            .into_any();
    }
    view! {
        <table class="min-w-full divide-y divide-zinc-800 text-sm">
            <thead class="text-left text-xs uppercase tracking-wider text-zinc-500">
                <tr>
                    <th class="px-4 py-2">"Type"</th>
                    <th class="px-4 py-2">"Severity"</th>
                    <th class="px-4 py-2">"Confidence"</th>
                    <th class="px-4 py-2">"Camera"</th>
                    <th class="px-4 py-2">"Position"</th>
                    <th class="px-4 py-2">"Time"</th>
                </tr>
            </thead>
            <tbody class="divide-y divide-zinc-800">
                {detections
                    .into_iter()
                    .map(|detection| {
                        let position = detection
                            .coordinates()
                            .map(|(lat, lng)| format!("{lat:.5}, {lng:.5}"))
                            .unwrap_or_else(|| "-".to_string());
                        view! {
                            <tr>
                                <td class="px-4 py-2">{type_label(detection.detection_type)}</td>
                                <td class="px-4 py-2">{severity_label(detection.severity)}</td>
                                <td class="px-4 py-2">
                                    {format!("{:.0}%", detection.confidence * 100.0)}
                                </td>
                                <td class="px-4 py-2 text-zinc-400">
                                    {detection.camera_name.unwrap_or(detection.camera_id)}
                                </td>
                                <td class="px-4 py-2 text-zinc-400">{position}</td>
                                <td class="px-4 py-2 text-zinc-400">{detection.timestamp}</td>
                            </tr>
                        }
                    })
                    .collect_view()}
            </tbody>
        </table>
    }
    .into_any()
}

#[component]
fn TimelineTable(timeline: Vec<TimelinePoint>) -> impl IntoView {
    view! {
        <table class="min-w-full divide-y divide-zinc-800 text-sm">
            <thead class="text-left text-xs uppercase tracking-wider text-zinc-500">
                <tr>
                    <th class="px-4 py-2">"Date"</th>
                    <th class="px-4 py-2">"Detections"</th>
                </tr>
            </thead>
            <tbody class="divide-y divide-zinc-800">
                {timeline
                    .into_iter()
                    .map(|point| {
                        view! {
                            <tr>
                                <td class="px-4 py-2">{point.date.clone()}</td>
                                <td class="px-4 py-2">{point.total()}</td>
                            </tr>
                        }
                    })
                    .collect_view()}
            </tbody>
        </table>
    }
}

#[component]
fn Breakdown(stats: DetectionStats) -> impl IntoView {
    let most_common = stats
        .most_common()
        .map_or("None", type_label);

    view! {
        <div class="grid grid-cols-2 gap-4 md:grid-cols-4">
            <StatCard label="Total Detections" value=stats.total_detections.to_string() />
            <StatCard label="Most Common" value=most_common.to_string() />
            {stats
                .breakdown()
                .into_iter()
                .map(|(detection_type, count)| {
                    view! { <StatCard label=type_label(detection_type) value=count.to_string() /> }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn ModelCard(model: ModelStatus) -> impl IntoView {
    let connection = if model.connected { "Connected" } else { "Disconnected" };

    view! {
        <div class="grid grid-cols-2 gap-4 md:grid-cols-3">
            <StatCard label="Model" value=format!("{} {}", model.model_name, model.model_version) />
            <StatCard label="Connection" value=connection.to_string() />
            <StatCard
                label="Last Inference"
                value=model.last_inference.unwrap_or_else(|| "Never".to_string())
            />
        </div>
    }
}

fn type_label(detection_type: DetectionType) -> &'static str {
    match detection_type {
        DetectionType::Pothole => "Pothole",
        DetectionType::Billboard => "Billboard",
        DetectionType::Railing => "Railing",
        DetectionType::Barrier => "Barrier",
        DetectionType::Unknown => "Other",
    }
}

fn severity_label(severity: Severity) -> &'static str {
    match severity {
        Severity::Low => "Low",
        Severity::Medium => "Medium",
        Severity::High => "High",
        Severity::Critical => "Critical",
    }
}
