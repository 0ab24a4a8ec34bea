//! Credentialed HTTP helpers for the RoadSentinel JSON API with a consistent
//! timeout and error policy. Feature clients use these helpers to avoid
//! duplicating request setup. In the browser every request goes out with
//! `credentials: include`; natively a cookie store plays that role. Either way
//! the session cookie set by the backend is replayed on every request and is
//! never visible to callers.

use super::{config::AppConfig, errors::AppError};
use reqwest::{Client, RequestBuilder, Response};
use serde::{Serialize, de::DeserializeOwned};
use std::time::Duration;
use tracing::{Instrument, debug, info_span};

/// Default request timeout applied to every request.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
/// Maximum number of error body characters surfaced in messages.
const MAX_ERROR_CHARS: usize = 200;

/// The single gateway through which all backend calls flow.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    /// Builds a cookie-carrying client against the configured API base.
    ///
    /// # Errors
    /// Returns `AppError::Config` if the backend URL is invalid or the HTTP client
    /// cannot be initialized.
    pub fn new(config: &AppConfig) -> Result<Self, AppError> {
        let base_url = config.api_base_url()?;
        let http = build_http_client()
            .map_err(|err| AppError::Config(format!("Failed to build HTTP client: {err}")))?;

        Ok(Self { http, base_url })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetches JSON.
    ///
    /// # Errors
    /// Returns an error on network failure, non-success status, or undecodable body.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, AppError> {
        let request = self.http.get(self.build_url(path));
        let response = send("GET", path, request).await?;
        handle_json_response(response).await
    }

    /// Fetches JSON with query parameters; `None` fields are skipped by the serializer.
    ///
    /// # Errors
    /// Returns an error on network failure, non-success status, or undecodable body.
    pub async fn get_json_with_query<Q: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        query: &Q,
    ) -> Result<T, AppError> {
        let request = self.http.get(self.build_url(path)).query(query);
        let response = send("GET", path, request).await?;
        handle_json_response(response).await
    }

    /// Posts JSON and parses a JSON response.
    ///
    /// # Errors
    /// Returns an error on encoding failure, network failure, non-success status, or
    /// undecodable body.
    pub async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, AppError> {
        let payload = encode(body)?;
        let request = self
            .http
            .post(self.build_url(path))
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(payload);
        let response = send("POST", path, request).await?;
        handle_json_response(response).await
    }

    /// Posts an empty body, used for session-scoped commands such as logout.
    ///
    /// # Errors
    /// Returns an error on network failure or non-success status.
    pub async fn post_empty(&self, path: &str) -> Result<(), AppError> {
        let request = self.http.post(self.build_url(path));
        let response = send("POST", path, request).await?;
        handle_empty_response(response).await
    }

    /// Replaces a resource and parses the updated representation.
    ///
    /// # Errors
    /// Returns an error on encoding failure, network failure, non-success status, or
    /// undecodable body.
    pub async fn put_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, AppError> {
        let payload = encode(body)?;
        let request = self
            .http
            .put(self.build_url(path))
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(payload);
        let response = send("PUT", path, request).await?;
        handle_json_response(response).await
    }

    /// Sends a bodiless PUT, used for state transitions like acknowledging an alert.
    ///
    /// # Errors
    /// Returns an error on network failure or non-success status.
    pub async fn put_empty(&self, path: &str) -> Result<(), AppError> {
        let request = self.http.put(self.build_url(path));
        let response = send("PUT", path, request).await?;
        handle_empty_response(response).await
    }

    /// Deletes a resource.
    ///
    /// # Errors
    /// Returns an error on network failure or non-success status.
    pub async fn delete(&self, path: &str) -> Result<(), AppError> {
        let request = self.http.delete(self.build_url(path));
        let response = send("DELETE", path, request).await?;
        handle_empty_response(response).await
    }

    fn build_url(&self, path: &str) -> String {
        build_url_with_base(&self.base_url, path)
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn build_http_client() -> reqwest::Result<Client> {
    Client::builder()
        .user_agent(crate::APP_USER_AGENT)
        .cookie_store(true)
        .timeout(DEFAULT_TIMEOUT)
        .build()
}

// The browser owns the cookie jar and the user agent.
#[cfg(target_arch = "wasm32")]
fn build_http_client() -> reqwest::Result<Client> {
    Client::builder().build()
}

/// Builds a URL from an explicit base URL and the provided path.
fn build_url_with_base(base_url: &str, path: &str) -> String {
    let base = base_url.trim().trim_end_matches('/');
    let path = path.trim();

    if base.is_empty() {
        path.to_string()
    } else {
        format!("{}/{}", base, path.trim_start_matches('/'))
    }
}

fn encode<B: Serialize + ?Sized>(body: &B) -> Result<String, AppError> {
    serde_json::to_string(body)
        .map_err(|err| AppError::Serialization(format!("Failed to encode request: {err}")))
}

/// Sends a request inside a span. Paths are logged, bodies never are.
async fn send(method: &'static str, path: &str, request: RequestBuilder) -> Result<Response, AppError> {
    let span = info_span!("api.request", http.method = method, path = %path);
    #[cfg(target_arch = "wasm32")]
    let request = request.fetch_credentials_include().timeout(DEFAULT_TIMEOUT);
    let response = request
        .send()
        .instrument(span)
        .await
        .map_err(map_request_error)?;
    debug!(method, path, status = response.status().as_u16(), "api response");
    Ok(response)
}

/// Maps transport errors into `AppError` variants with timeout detection.
fn map_request_error(err: reqwest::Error) -> AppError {
    if err.is_timeout() {
        AppError::Timeout("Request timed out. Please try again.".to_string())
    } else if err.is_builder() {
        AppError::Serialization(format!("Failed to build request: {err}"))
    } else {
        AppError::Network(format!("Unable to reach the server: {err}"))
    }
}

/// Parses JSON responses and surfaces HTTP errors with sanitized bodies.
async fn handle_json_response<T: DeserializeOwned>(response: Response) -> Result<T, AppError> {
    if response.status().is_success() {
        response
            .json::<T>()
            .await
            .map_err(|err| AppError::Parse(format!("Failed to decode response: {err}")))
    } else {
        Err(http_error(response).await)
    }
}

/// Handles empty responses; any body on success is ignored.
async fn handle_empty_response(response: Response) -> Result<(), AppError> {
    if response.status().is_success() {
        Ok(())
    } else {
        Err(http_error(response).await)
    }
}

async fn http_error(response: Response) -> AppError {
    let status = response.status().as_u16();
    let body = response.text().await.unwrap_or_default();
    AppError::Http {
        status,
        message: sanitize_body(&body),
    }
}

/// Sanitizes HTTP error bodies for messages by trimming and truncating.
fn sanitize_body(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        "Request failed.".to_string()
    } else {
        trimmed.chars().take(MAX_ERROR_CHARS).collect()
    }
}
