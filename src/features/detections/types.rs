//! Types for detection, statistics and timeline endpoints, plus the small
//! aggregations the analytics and map views compute from them.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum DetectionType {
    Pothole,
    Billboard,
    Railing,
    Barrier,
    /// A type this client does not know yet. Such detections still list, but
    /// are left out of per-type statistics.
    #[serde(other)]
    Unknown,
}

impl DetectionType {
    /// Display and tie-break order. Never contains `Unknown`.
    pub const ALL: [DetectionType; 4] = [
        DetectionType::Pothole,
        DetectionType::Billboard,
        DetectionType::Railing,
        DetectionType::Barrier,
    ];
}

#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    #[default]
    Medium,
    High,
    Critical,
}

impl Severity {
    /// High and critical detections raise an alert on the backend.
    #[must_use]
    pub fn raises_alert(self) -> bool {
        self >= Severity::High
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Detection {
    pub detection_id: String,
    pub camera_id: String,
    #[serde(default)]
    pub camera_name: Option<String>,
    pub detection_type: DetectionType,
    pub confidence: f64,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub severity: Severity,
    pub timestamp: String,
    pub user_id: String,
}

impl Detection {
    #[must_use]
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        Some((self.lat?, self.lng?))
    }
}

/// Server-side filters for listing detections. Absent fields are not sent.
#[derive(Clone, Debug, Default, Serialize, PartialEq)]
pub struct DetectionFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detection_type: Option<DetectionType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub severity: Option<Severity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub camera_id: Option<String>,
    /// The backend caps this at 500.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip: Option<u32>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct NewDetection {
    pub camera_id: String,
    pub detection_type: DetectionType,
    pub confidence: f64,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub severity: Severity,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DetectionStats {
    pub total_detections: u64,
    pub potholes: u64,
    pub billboards: u64,
    pub railings: u64,
    pub barriers: u64,
    pub active_cameras: u64,
    pub critical_alerts: u64,
}

impl DetectionStats {
    #[must_use]
    pub fn count(&self, detection_type: DetectionType) -> u64 {
        match detection_type {
            DetectionType::Pothole => self.potholes,
            DetectionType::Billboard => self.billboards,
            DetectionType::Railing => self.railings,
            DetectionType::Barrier => self.barriers,
            DetectionType::Unknown => 0,
        }
    }

    /// Type with the highest count; earlier types win ties. `None` when nothing
    /// has been detected.
    #[must_use]
    pub fn most_common(&self) -> Option<DetectionType> {
        let mut best: Option<(DetectionType, u64)> = None;
        for detection_type in DetectionType::ALL {
            let count = self.count(detection_type);
            if count > best.map_or(0, |(_, top)| top) {
                best = Some((detection_type, count));
            }
        }
        best.map(|(detection_type, _)| detection_type)
    }

    /// Per-type counts, omitting types with no detections.
    #[must_use]
    pub fn breakdown(&self) -> Vec<(DetectionType, u64)> {
        DetectionType::ALL
            .into_iter()
            .map(|detection_type| (detection_type, self.count(detection_type)))
            .filter(|(_, count)| *count > 0)
            .collect()
    }
}

/// Daily detection counts, oldest day first.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TimelinePoint {
    pub date: String,
    #[serde(default)]
    pub pothole: u64,
    #[serde(default)]
    pub billboard: u64,
    #[serde(default)]
    pub railing: u64,
    #[serde(default)]
    pub barrier: u64,
}

impl TimelinePoint {
    #[must_use]
    pub fn total(&self) -> u64 {
        self.pothole + self.billboard + self.railing + self.barrier
    }
}

/// Detections that can be placed on the map.
#[must_use]
pub fn with_coordinates(detections: Vec<Detection>) -> Vec<Detection> {
    detections
        .into_iter()
        .filter(|detection| detection.coordinates().is_some())
        .collect()
}
