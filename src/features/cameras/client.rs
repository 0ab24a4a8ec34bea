//! Client helpers for camera configuration.

use crate::{
    api::{ApiClient, AppError},
    features::cameras::types::{Camera, CameraInput},
};

/// List the cameras owned by the signed-in user.
///
/// # Errors
/// Returns an error if the request fails or the session is invalid.
pub async fn list_cameras(api: &ApiClient) -> Result<Vec<Camera>, AppError> {
    api.get_json("/cameras").await
}

/// Register a new camera.
///
/// # Errors
/// Returns an error if the request fails or the payload is rejected.
pub async fn create_camera(api: &ApiClient, input: &CameraInput) -> Result<Camera, AppError> {
    api.post_json("/cameras", input).await
}

/// Replace a camera's configuration. Unknown ids yield `404`.
///
/// # Errors
/// Returns an error if the request fails or the camera does not exist.
pub async fn update_camera(
    api: &ApiClient,
    camera_id: &str,
    input: &CameraInput,
) -> Result<Camera, AppError> {
    api.put_json(&format!("/cameras/{camera_id}"), input).await
}

/// Delete a camera. Unknown ids yield `404`.
///
/// # Errors
/// Returns an error if the request fails or the camera does not exist.
pub async fn delete_camera(api: &ApiClient, camera_id: &str) -> Result<(), AppError> {
    api.delete(&format!("/cameras/{camera_id}")).await
}
