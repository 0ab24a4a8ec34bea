//! Feature slices: authentication plus the dashboard's data clients.

pub mod alerts;
pub mod auth;
pub mod cameras;
pub mod detections;
pub mod model;
