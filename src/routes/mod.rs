//! Route table shared by the web router and the CLI.
//!
//! `/login` is public. Every other route is protected and rendered behind a
//! [`RouteGuard`](crate::features::auth::RouteGuard). The auth flow never
//! navigates by itself: it returns a [`Redirect`] and the caller performs it
//! (`use_navigate` in the web app, the report in the CLI).

pub mod pages;

use crate::features::auth::types::Identity;
use serde::Serialize;

pub const LOGIN_PATH: &str = "/login";
/// Landing route after sign-in and the catch-all target.
pub const DEFAULT_PROTECTED_PATH: &str = "/dashboard";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProtectedRoute {
    Dashboard,
    Cameras,
    Detections,
    Map,
    Alerts,
    Analytics,
    Settings,
}

impl ProtectedRoute {
    /// Sidebar order.
    pub const ALL: [ProtectedRoute; 7] = [
        ProtectedRoute::Dashboard,
        ProtectedRoute::Cameras,
        ProtectedRoute::Detections,
        ProtectedRoute::Map,
        ProtectedRoute::Alerts,
        ProtectedRoute::Analytics,
        ProtectedRoute::Settings,
    ];

    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            ProtectedRoute::Dashboard => DEFAULT_PROTECTED_PATH,
            ProtectedRoute::Cameras => "/cameras",
            ProtectedRoute::Detections => "/detections",
            ProtectedRoute::Map => "/map",
            ProtectedRoute::Alerts => "/alerts",
            ProtectedRoute::Analytics => "/analytics",
            ProtectedRoute::Settings => "/settings",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            ProtectedRoute::Dashboard => "Dashboard",
            ProtectedRoute::Cameras => "Camera Feeds",
            ProtectedRoute::Detections => "Detection History",
            ProtectedRoute::Map => "Map View",
            ProtectedRoute::Alerts => "Alerts",
            ProtectedRoute::Analytics => "Analytics",
            ProtectedRoute::Settings => "Settings",
        }
    }

    /// Exact lookup by pathname; a single trailing slash is ignored.
    #[must_use]
    pub fn from_path(path: &str) -> Option<Self> {
        let path = match path.strip_suffix('/') {
            Some(stripped) if !stripped.is_empty() => stripped,
            _ => path,
        };
        Self::ALL.into_iter().find(|route| route.path() == path)
    }
}

/// A client-side navigation the auth flow asks for.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Redirect {
    pub path: &'static str,
    /// Replace the current history entry instead of pushing a new one.
    pub replace: bool,
    /// Identity handed to the target route through the navigation state.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<Identity>,
}

impl Redirect {
    #[must_use]
    pub fn to_login() -> Self {
        Self {
            path: LOGIN_PATH,
            replace: true,
            user: None,
        }
    }

    /// Post-handshake landing; the guard there trusts `user` instead of asking
    /// the backend again.
    #[must_use]
    pub fn to_dashboard(user: Identity) -> Self {
        Self {
            path: DEFAULT_PROTECTED_PATH,
            replace: true,
            user: Some(user),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ProtectedRoute, Redirect};
    use crate::features::auth::types::Identity;
    use serde_json::json;

    #[test]
    fn paths_round_trip_through_the_table() {
        for route in ProtectedRoute::ALL {
            assert_eq!(ProtectedRoute::from_path(route.path()), Some(route));
        }
        assert_eq!(ProtectedRoute::from_path("/map/"), Some(ProtectedRoute::Map));
    }

    #[test]
    fn unknown_paths_are_not_protected_routes() {
        for path in ["/", "", "/login", "/dashboard/extra", "/ALERTS"] {
            assert_eq!(ProtectedRoute::from_path(path), None, "{path}");
        }
    }

    #[test]
    fn sidebar_labels_follow_route_order() {
        let labels: Vec<_> = ProtectedRoute::ALL
            .into_iter()
            .map(ProtectedRoute::label)
            .collect();
        assert_eq!(
            labels,
            vec![
                "Dashboard",
                "Camera Feeds",
                "Detection History",
                "Map View",
                "Alerts",
                "Analytics",
                "Settings",
            ]
        );
    }

    #[test]
    fn redirects_replace_history() {
        let login = Redirect::to_login();
        assert!(login.replace);
        assert_eq!(
            serde_json::to_value(&login).unwrap(),
            json!({ "path": "/login", "replace": true })
        );

        let user = Identity {
            id: "u1".to_string(),
            name: "Ann".to_string(),
            email: "ann@x.com".to_string(),
            picture: None,
        };
        let landing = Redirect::to_dashboard(user.clone());
        assert_eq!(landing.path, "/dashboard");
        assert!(landing.replace);
        assert_eq!(landing.user, Some(user));
    }
}
