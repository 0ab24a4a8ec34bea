//! Types for camera configuration endpoints.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Camera {
    pub camera_id: String,
    pub user_id: String,
    pub name: String,
    #[serde(default)]
    pub source_url: String,
    #[serde(default)]
    pub location: String,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    #[serde(default = "default_active")]
    pub is_active: bool,
    pub created_at: String,
}

/// Payload for creating or replacing a camera.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct CameraInput {
    pub name: String,
    #[serde(default)]
    pub source_url: String,
    #[serde(default)]
    pub location: String,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

impl CameraInput {
    #[must_use]
    pub fn named(name: &str) -> Self {
        Self {
            name: name.to_string(),
            source_url: String::new(),
            location: String::new(),
            lat: None,
            lng: None,
            is_active: true,
        }
    }
}

fn default_active() -> bool {
    true
}

/// Number of cameras currently marked active.
#[must_use]
pub fn active_count(cameras: &[Camera]) -> usize {
    cameras.iter().filter(|camera| camera.is_active).count()
}
