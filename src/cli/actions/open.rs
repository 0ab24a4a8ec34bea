use crate::{
    api::{ApiClient, AppConfig},
    features::{
        alerts::client::unread_badge,
        auth::{AuthContext, AuthHandshake, Identity, RouteGuard, logout},
    },
    routes::{
        LOGIN_PATH, ProtectedRoute,
        pages::{self, PageData},
    },
};
use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{debug, warn};
use url::Url;

#[derive(Debug)]
pub struct Args {
    pub config: AppConfig,
    pub landing: Url,
    pub logout: bool,
}

/// Where a load settled, as printed to stdout.
#[derive(Debug, Serialize)]
pub struct Report {
    pub location: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route: Option<ProtectedRoute>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<Identity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unread_alerts: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<PageData>,
}

impl Report {
    fn at(landing: &Url, path: &str) -> Self {
        Self {
            location: settled_location(landing, path),
            route: None,
            user: None,
            unread_alerts: None,
            page: None,
        }
    }
}

/// Load the dashboard at `args.landing`, print where it settles and, with
/// `--logout`, sign out and print that too.
///
/// # Errors
/// Returns an error if the backend URL is invalid or output cannot be encoded.
pub async fn execute(args: Args) -> Result<()> {
    let api = ApiClient::new(&args.config).context("failed to build the API client")?;
    let auth = AuthContext::new();

    print(&load(&api, &auth, &args.landing).await)?;

    if args.logout {
        let redirect = logout::sign_out(&api, &auth).await;
        print(&Report::at(&args.landing, redirect.path))?;
    }

    Ok(())
}

/// Runs the page-load sequence the web app runs: the handshake when the
/// fragment carries a token, then the guard for the route it settled on, then
/// the page data. Unknown paths fall back to the dashboard.
pub async fn load(api: &ApiClient, auth: &AuthContext, landing: &Url) -> Report {
    let mut path = landing.path().to_string();
    let mut handoff = None;

    if let Some(handshake) = AuthHandshake::detect(landing) {
        let outcome = handshake.run(api, auth).await;
        debug!(?outcome, "handshake finished");
        if let Some(redirect) = outcome.redirect() {
            path = redirect.path.to_string();
            handoff = redirect.user;
        }
    }

    if path == LOGIN_PATH {
        return Report::at(landing, LOGIN_PATH);
    }

    let route = ProtectedRoute::from_path(&path).unwrap_or(ProtectedRoute::Dashboard);
    let guard = RouteGuard::mount(route, auth);
    let state = guard.check(api, auth, handoff).await;
    if let Some(redirect) = guard.redirect() {
        return Report::at(landing, redirect.path);
    }

    let (page, unread_alerts) = tokio::join!(pages::load(route, api), unread_badge(api));
    let page = match page {
        Ok(data) => Some(data),
        Err(err) => {
            warn!("Failed to load {} data: {err}", route.path());
            None
        }
    };

    Report {
        location: settled_location(landing, route.path()),
        route: Some(route),
        user: state.identity().cloned(),
        unread_alerts,
        page,
    }
}

/// The landing URL after navigating to `path`: the fragment is always gone,
/// and the query survives only when the path did not change.
fn settled_location(landing: &Url, path: &str) -> String {
    let mut url = landing.clone();
    if url.path() != path {
        url.set_path(path);
        url.set_query(None);
    }
    url.set_fragment(None);
    url.to_string()
}

fn print(report: &Report) -> Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    println!("{json}");
    Ok(())
}
