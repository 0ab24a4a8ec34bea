//! Client helpers for detections and detection analytics.

use crate::{
    api::{ApiClient, AppError},
    features::detections::types::{
        Detection, DetectionFilter, DetectionStats, NewDetection, TimelinePoint,
    },
};

/// Days covered by the timeline when the caller does not choose.
pub const DEFAULT_TIMELINE_DAYS: u32 = 7;

/// List detections, newest first, narrowed by `filter`.
///
/// # Errors
/// Returns an error if the request fails or the session is invalid.
pub async fn list_detections(
    api: &ApiClient,
    filter: &DetectionFilter,
) -> Result<Vec<Detection>, AppError> {
    api.get_json_with_query("/detections", filter).await
}

/// Record a detection. High and critical severities also raise an alert.
///
/// # Errors
/// Returns an error if the request fails or the payload is rejected.
pub async fn create_detection(
    api: &ApiClient,
    detection: &NewDetection,
) -> Result<Detection, AppError> {
    api.post_json("/detections", detection).await
}

/// Fetch per-type totals, active cameras and unacknowledged critical alerts.
///
/// # Errors
/// Returns an error if the request fails or the session is invalid.
pub async fn detection_stats(api: &ApiClient) -> Result<DetectionStats, AppError> {
    api.get_json("/detections/stats").await
}

/// Fetch daily counts for the last `days` days.
///
/// # Errors
/// Returns an error if the request fails or the session is invalid.
pub async fn detection_timeline(api: &ApiClient, days: u32) -> Result<Vec<TimelinePoint>, AppError> {
    api.get_json_with_query("/detections/timeline", &[("days", days)])
        .await
}

#[cfg(test)]
mod tests {
    use super::{create_detection, detection_stats, detection_timeline, list_detections};
    use crate::{
        api::{ApiClient, AppConfig},
        features::detections::types::{
            DetectionFilter, DetectionType, NewDetection, Severity,
        },
    };
    use serde_json::json;
    use std::net::TcpListener;
    use wiremock::matchers::{body_json, method, path, query_param};
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

    #[tokio::test]
    async fn list_sends_filters_as_query() {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return;
        }
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/detections"))
            .and(query_param("severity", "critical"))
            .and(query_param("camera_id", "cam_1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
                "detection_id": "det_1",
                "camera_id": "cam_1",
                "detection_type": "barrier",
                "confidence": 0.7,
                "lat": null,
                "lng": null,
                "severity": "critical",
                "timestamp": "2025-01-01T10:00:00+00:00",
                "user_id": "u1"
            }])))
            .expect(1)
            .mount(&server)
            .await;

        let filter = DetectionFilter {
            severity: Some(Severity::Critical),
            camera_id: Some("cam_1".to_string()),
            ..DetectionFilter::default()
        };
        let detections = list_detections(&api_for(&server), &filter).await.unwrap();
        assert_eq!(detections.len(), 1);
        assert_eq!(detections[0].detection_type, DetectionType::Barrier);
        assert_eq!(detections[0].camera_name, None);
    }

    #[tokio::test]
    async fn list_tolerates_new_detection_types() {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return;
        }
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/detections"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {
                    "detection_id": "det_1",
                    "camera_id": "cam_1",
                    "detection_type": "railing",
                    "confidence": 0.8,
                    "lat": 28.4,
                    "lng": 77.0,
                    "timestamp": "2025-01-01T10:00:00+00:00",
                    "user_id": "u1"
                },
                {
                    "detection_id": "det_2",
                    "camera_id": "cam_2",
                    "detection_type": "streetlight",
                    "confidence": 0.6,
                    "lat": 28.5,
                    "lng": 77.1,
                    "timestamp": "2025-01-01T10:01:00+00:00",
                    "user_id": "u1"
                }
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let detections = list_detections(&api_for(&server), &DetectionFilter::default())
            .await
            .unwrap();
        let types: Vec<_> = detections
            .iter()
            .map(|detection| detection.detection_type)
            .collect();
        assert_eq!(types, vec![DetectionType::Railing, DetectionType::Unknown]);
    }

    #[tokio::test]
    async fn create_posts_payload() {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return;
        }
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/detections"))
            .and(body_json(json!({
                "camera_id": "cam_1",
                "detection_type": "pothole",
                "confidence": 0.9,
                "lat": null,
                "lng": null,
                "location": "",
                "severity": "high"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "detection_id": "det_9",
                "camera_id": "cam_1",
                "camera_name": "CAM-01",
                "detection_type": "pothole",
                "confidence": 0.9,
                "lat": 28.4,
                "lng": 77.0,
                "location": "Highway",
                "severity": "high",
                "timestamp": "2025-01-01T10:00:00+00:00",
                "user_id": "u1"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let detection = NewDetection {
            camera_id: "cam_1".to_string(),
            detection_type: DetectionType::Pothole,
            confidence: 0.9,
            lat: None,
            lng: None,
            location: String::new(),
            severity: Severity::High,
        };
        let created = create_detection(&api_for(&server), &detection).await.unwrap();
        assert_eq!(created.coordinates(), Some((28.4, 77.0)));
    }

    #[tokio::test]
    async fn stats_and_timeline() {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return;
        }
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/detections/stats"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "total_detections": 5,
                "potholes": 3,
                "billboards": 2,
                "railings": 0,
                "barriers": 0,
                "active_cameras": 4,
                "critical_alerts": 1
            })))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/detections/timeline"))
            .and(query_param("days", "7"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                { "date": "2025-01-01", "pothole": 2, "billboard": 0, "railing": 0, "barrier": 1 }
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let api = api_for(&server);
        let stats = detection_stats(&api).await.unwrap();
        assert_eq!(stats.most_common(), Some(DetectionType::Pothole));

        let timeline = detection_timeline(&api, super::DEFAULT_TIMELINE_DAYS)
            .await
            .unwrap();
        assert_eq!(timeline[0].total(), 3);
    }
}
