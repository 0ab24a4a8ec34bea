//! Client helpers for alerts raised by high-severity detections.

use crate::{
    api::{ApiClient, AppError},
    features::alerts::types::{Alert, AlertFilter, AlertQuery, UnreadCount},
};
use std::time::Duration;
use tracing::debug;

/// How often the sidebar refreshes its unread badge.
pub const UNREAD_POLL_INTERVAL: Duration = Duration::from_secs(30);

/// List alerts, newest first.
///
/// # Errors
/// Returns an error if the request fails or the session is invalid.
pub async fn list_alerts(
    api: &ApiClient,
    filter: AlertFilter,
    limit: Option<u32>,
) -> Result<Vec<Alert>, AppError> {
    let query = AlertQuery {
        acknowledged: filter.acknowledged(),
        limit,
    };
    api.get_json_with_query("/alerts", &query).await
}

/// Mark an alert as acknowledged. Unknown ids yield `404`.
///
/// # Errors
/// Returns an error if the request fails or the alert does not exist.
pub async fn acknowledge_alert(api: &ApiClient, alert_id: &str) -> Result<(), AppError> {
    api.put_empty(&format!("/alerts/{alert_id}/acknowledge"))
        .await
}

/// Number of alerts not yet acknowledged.
///
/// # Errors
/// Returns an error if the request fails or the session is invalid.
pub async fn unread_alert_count(api: &ApiClient) -> Result<u64, AppError> {
    let unread: UnreadCount = api.get_json("/alerts/unread-count").await?;
    Ok(unread.count)
}

/// Count for the sidebar badge: `None` when there is nothing unread or the
/// count could not be fetched. The badge never surfaces errors.
pub async fn unread_badge(api: &ApiClient) -> Option<u64> {
    match unread_alert_count(api).await {
        Ok(0) => None,
        Ok(count) => Some(count),
        Err(err) => {
            debug!("unread count unavailable: {err}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{acknowledge_alert, list_alerts, unread_alert_count, unread_badge};
    use crate::{
        api::{ApiClient, AppConfig, AppError},
        features::{alerts::types::AlertFilter, detections::types::Severity},
    };
    use serde_json::json;
    use std::net::TcpListener;
    use wiremock::matchers::{method, path, query_param, query_param_is_missing};
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
    async fn unread_list_sends_acknowledged_false() {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return;
        }
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/alerts"))
            .and(query_param("acknowledged", "false"))
            .and(query_param("limit", "5"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
                "alert_id": "alert_1",
                "detection_id": "det_1",
                "alert_type": "pothole",
                "message": "Critical pothole detected",
                "severity": "critical",
                "acknowledged": false,
                "user_id": "u1",
                "timestamp": "2025-01-01T10:00:00+00:00"
            }])))
            .expect(1)
            .mount(&server)
            .await;

        let alerts = list_alerts(&api_for(&server), AlertFilter::Unread, Some(5))
            .await
            .unwrap();
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].severity, Severity::Critical);
        assert!(!alerts[0].acknowledged);
    }

    #[tokio::test]
    async fn all_filter_omits_acknowledged() {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return;
        }
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/alerts"))
            .and(query_param_is_missing("acknowledged"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(1)
            .mount(&server)
            .await;

        let alerts = list_alerts(&api_for(&server), AlertFilter::All, None)
            .await
            .unwrap();
        assert!(alerts.is_empty());
    }

    #[tokio::test]
    async fn acknowledge_and_count() {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return;
        }
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/api/alerts/alert_1/acknowledge"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({ "message": "Alert acknowledged" })),
            )
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("PUT"))
            .and(path("/api/alerts/alert_9/acknowledge"))
            .respond_with(
                ResponseTemplate::new(404).set_body_json(json!({ "detail": "Alert not found" })),
            )
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/alerts/unread-count"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "count": 3 })))
            .mount(&server)
            .await;

        let api = api_for(&server);
        acknowledge_alert(&api, "alert_1").await.unwrap();
        let missing = acknowledge_alert(&api, "alert_9").await;
        assert!(matches!(missing, Err(AppError::Http { status: 404, .. })));
        assert_eq!(unread_alert_count(&api).await.unwrap(), 3);
    }

    #[tokio::test]
    async fn badge_hides_zero_and_errors() {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return;
        }
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/alerts/unread-count"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "count": 0 })))
            .up_to_n_times(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/alerts/unread-count"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "count": 12 })))
            .up_to_n_times(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/alerts/unread-count"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;

        let api = api_for(&server);
        assert_eq!(unread_badge(&api).await, None);
        assert_eq!(unread_badge(&api).await, Some(12));
        assert_eq!(unread_badge(&api).await, None);
    }
}
