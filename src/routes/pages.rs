//! Data each protected page fetches once its guard lets it render.

use super::ProtectedRoute;
use crate::{
    api::{ApiClient, AppError},
    features::{
        alerts::{
            client::list_alerts,
            types::{Alert, AlertFilter},
        },
        cameras::{client::list_cameras, types::Camera},
        detections::{
            client::{DEFAULT_TIMELINE_DAYS, detection_stats, detection_timeline, list_detections},
            types::{Detection, DetectionFilter, DetectionStats, TimelinePoint, with_coordinates},
        },
        model::{client::model_status, types::ModelStatus},
    },
};
use serde::Serialize;
use tracing::{Instrument, info_span};

/// Unread alerts shown on the dashboard.
const DASHBOARD_ALERT_LIMIT: u32 = 5;
const ALERTS_LIMIT: u32 = 100;
const HISTORY_LIMIT: u32 = 100;
const MAP_LIMIT: u32 = 200;

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "snake_case", tag = "page")]
pub enum PageData {
    Dashboard {
        stats: DetectionStats,
        alerts: Vec<Alert>,
        cameras: Vec<Camera>,
        timeline: Vec<TimelinePoint>,
    },
    Cameras {
        cameras: Vec<Camera>,
    },
    Detections {
        detections: Vec<Detection>,
    },
    /// Only detections that carry both coordinates.
    Map {
        detections: Vec<Detection>,
    },
    Alerts {
        alerts: Vec<Alert>,
    },
    Analytics {
        stats: DetectionStats,
        timeline: Vec<TimelinePoint>,
    },
    Settings {
        cameras: Vec<Camera>,
        model: ModelStatus,
    },
}

/// Fetches the initial data for `route` with the page's default filters.
/// Independent requests run concurrently.
///
/// # Errors
/// Returns the first request error.
pub async fn load(route: ProtectedRoute, api: &ApiClient) -> Result<PageData, AppError> {
    let span = info_span!("page.load", route = route.path());
    async move {
        let data = match route {
            ProtectedRoute::Dashboard => {
                let (stats, alerts, cameras, timeline) = tokio::try_join!(
                    detection_stats(api),
                    list_alerts(api, AlertFilter::Unread, Some(DASHBOARD_ALERT_LIMIT)),
                    list_cameras(api),
                    detection_timeline(api, DEFAULT_TIMELINE_DAYS),
                )?;
                PageData::Dashboard {
                    stats,
                    alerts,
                    cameras,
                    timeline,
                }
            }
            ProtectedRoute::Cameras => PageData::Cameras {
                cameras: list_cameras(api).await?,
            },
            ProtectedRoute::Detections => {
                let filter = DetectionFilter {
                    limit: Some(HISTORY_LIMIT),
                    ..DetectionFilter::default()
                };
                PageData::Detections {
                    detections: list_detections(api, &filter).await?,
                }
            }
            ProtectedRoute::Map => {
                let filter = DetectionFilter {
                    limit: Some(MAP_LIMIT),
                    ..DetectionFilter::default()
                };
                PageData::Map {
                    detections: with_coordinates(list_detections(api, &filter).await?),
                }
            }
            ProtectedRoute::Alerts => PageData::Alerts {
                alerts: list_alerts(api, AlertFilter::Unread, Some(ALERTS_LIMIT)).await?,
            },
            ProtectedRoute::Analytics => {
                let (stats, timeline) = tokio::try_join!(
                    detection_stats(api),
                    detection_timeline(api, DEFAULT_TIMELINE_DAYS),
                )?;
                PageData::Analytics { stats, timeline }
            }
            ProtectedRoute::Settings => {
                let (cameras, model) = tokio::try_join!(list_cameras(api), model_status(api))?;
                PageData::Settings { cameras, model }
            }
        };
        Ok(data)
    }
    .instrument(span)
    .await
}

#[cfg(test)]
mod tests {
    use super::{PageData, load};
    use crate::{
        api::{ApiClient, AppConfig, AppError},
        routes::ProtectedRoute,
    };
    use serde_json::json;
    use std::net::TcpListener;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn can_bind_localhost() -> bool {
        TcpListener::bind("127.0.0.1:0").is_ok()
    }

    fn api_for(server: &MockServer) -> ApiClient {
        ApiClient::new(&AppConfig {
            backend_url: server.uri(),
        })
        .unwrap()
    }

    fn detection(id: &str, lat: Option<f64>) -> serde_json::Value {
        json!({
            "detection_id": id,
            "camera_id": "cam_1",
            "detection_type": "railing",
            "confidence": 0.8,
            "lat": lat,
            "lng": 77.1,
            "severity": "low",
            "timestamp": "2025-01-01T10:00:00+00:00",
            "user_id": "u1"
        })
    }

    #[tokio::test]
    async fn dashboard_loads_all_panels() {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return;
        }
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/detections/stats"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "potholes": 2 })))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/alerts"))
            .and(query_param("acknowledged", "false"))
            .and(query_param("limit", "5"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/cameras"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/detections/timeline"))
            .and(query_param("days", "7"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(1)
            .mount(&server)
            .await;

        let data = load(ProtectedRoute::Dashboard, &api_for(&server))
            .await
            .unwrap();
        match data {
            PageData::Dashboard { stats, alerts, .. } => {
                assert_eq!(stats.potholes, 2);
                assert!(alerts.is_empty());
            }
            other => panic!("unexpected page data: {other:?}"),
        }
    }

    #[tokio::test]
    async fn map_drops_unlocated_detections() {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return;
        }
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/detections"))
            .and(query_param("limit", "200"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                detection("det_1", Some(28.5)),
                detection("det_2", None)
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let data = load(ProtectedRoute::Map, &api_for(&server)).await.unwrap();
        match data {
            PageData::Map { detections } => {
                assert_eq!(detections.len(), 1);
                assert_eq!(detections[0].detection_id, "det_1");
            }
            other => panic!("unexpected page data: {other:?}"),
        }
    }

    #[tokio::test]
    async fn alerts_page_asks_for_the_latest_hundred_unread() {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return;
        }
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/alerts"))
            .and(query_param("acknowledged", "false"))
            .and(query_param("limit", "100"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(1)
            .mount(&server)
            .await;

        let data = load(ProtectedRoute::Alerts, &api_for(&server)).await.unwrap();
        assert_eq!(data, PageData::Alerts { alerts: Vec::new() });
    }

    #[tokio::test]
    async fn unauthorized_surfaces_as_http_error() {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return;
        }
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/cameras"))
            .respond_with(
                ResponseTemplate::new(401).set_body_json(json!({ "detail": "Not authenticated" })),
            )
            .mount(&server)
            .await;

        let err = load(ProtectedRoute::Cameras, &api_for(&server))
            .await
            .unwrap_err();
        assert!(err.is_unauthorized());
        assert!(matches!(err, AppError::Http { status: 401, .. }));
    }
}
