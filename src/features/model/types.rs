//! Detection model status as reported by the backend.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ModelStatus {
    pub connected: bool,
    pub model_name: String,
    pub model_version: String,
    pub last_inference: Option<String>,
    pub status: String,
}

impl Default for ModelStatus {
    fn default() -> Self {
        Self {
            connected: false,
            model_name: "Not Connected".to_string(),
            model_version: "N/A".to_string(),
            last_inference: None,
            status: "disconnected".to_string(),
        }
    }
}
