use crate::features::detections::types::Severity;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Alert {
    pub alert_id: String,
    #[serde(default)]
    pub detection_id: Option<String>,
    pub alert_type: String,
    pub message: String,
    pub severity: Severity,
    #[serde(default)]
    pub acknowledged: bool,
    pub user_id: String,
    pub timestamp: String,
}

/// Which alerts to list. `All` sends no `acknowledged` parameter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertFilter {
    All,
    #[default]
    Unread,
    Acknowledged,
}

impl AlertFilter {
    #[must_use]
    pub fn acknowledged(self) -> Option<bool> {
        match self {
            AlertFilter::All => None,
            AlertFilter::Unread => Some(false),
            AlertFilter::Acknowledged => Some(true),
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct AlertQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub acknowledged: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UnreadCount {
    pub count: u64,
}
