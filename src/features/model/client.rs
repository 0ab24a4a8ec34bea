use crate::{
    api::{ApiClient, AppError},
    features::model::types::ModelStatus,
};

/// Fetch the inference model status.
///
/// # Errors
/// Returns an error if the request fails or the session is invalid.
pub async fn model_status(api: &ApiClient) -> Result<ModelStatus, AppError> {
    api.get_json("/model/status").await
}

#[cfg(test)]
mod tests {
    use super::model_status;
    use crate::api::{ApiClient, AppConfig};
    use serde_json::json;
    use std::net::TcpListener;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn fetches_status() {
        if TcpListener::bind("127.0.0.1:0").is_err() {
            eprintln!("Skipping test: cannot bind localhost");
            return;
        }
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/model/status"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "connected": false,
                "model_name": "YOLO v8 (Placeholder)",
                "model_version": "N/A",
                "last_inference": null,
                "status": "awaiting_model"
            })))
            .mount(&server)
            .await;

        let api = ApiClient::new(&AppConfig {
            backend_url: server.uri(),
        })
        .unwrap();
        let status = model_status(&api).await.unwrap();
        assert_eq!(status.model_name, "YOLO v8 (Placeholder)");
        assert!(!status.connected);
    }
}
