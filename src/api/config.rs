//! Build-time configuration for the backend origin with an optional runtime
//! override. The runtime value is read from `ROADSENTINEL_BACKEND_URL` (if
//! present) so the same binary can point at different deployments without
//! rebuilding. Configuration values are public; do not store secrets here.
//!
//! The identity-provider endpoint is deliberately absent: it is a constant of the
//! login module and no configuration value may replace it.

use super::errors::AppError;
use url::Url;

pub const BACKEND_URL_ENV: &str = "ROADSENTINEL_BACKEND_URL";

/// Every backend route lives under this prefix.
const API_PREFIX: &str = "/api";

/// Client configuration derived from build-time environment variables.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub backend_url: String,
}

impl AppConfig {
    /// Loads config from build-time environment variables and applies runtime overrides.
    #[must_use]
    pub fn load() -> Self {
        let backend_url = option_env!("ROADSENTINEL_BACKEND_URL").unwrap_or("");

        let mut config = Self {
            backend_url: backend_url.to_string(),
        };

        if let Some(runtime) = runtime_config() {
            apply_runtime_overrides(&mut config, runtime);
        }

        config
    }

    /// Replaces the backend origin, ignoring blank values.
    #[must_use]
    pub fn with_backend_url(mut self, backend_url: &str) -> Self {
        apply_runtime_overrides(
            &mut self,
            RuntimeConfig {
                backend_url: normalize_runtime_value(backend_url),
            },
        );
        self
    }

    /// Base URL all API paths are appended to, e.g. `https://api.example.com/api`.
    ///
    /// # Errors
    /// Returns `AppError::Config` when the backend origin is missing, unparsable, or
    /// not an `http(s)` URL.
    pub fn api_base_url(&self) -> Result<String, AppError> {
        let base = self.backend_url.trim().trim_end_matches('/');
        if base.is_empty() {
            return Err(AppError::Config(
                "Backend URL is not configured.".to_string(),
            ));
        }

        let parsed = Url::parse(base)
            .map_err(|err| AppError::Config(format!("Invalid backend URL: {err}")))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(AppError::Config(format!(
                "Unsupported backend URL scheme: {}",
                parsed.scheme()
            )));
        }

        Ok(format!("{base}{API_PREFIX}"))
    }
}

#[derive(Default)]
struct RuntimeConfig {
    backend_url: Option<String>,
}

fn apply_runtime_overrides(config: &mut AppConfig, runtime: RuntimeConfig) {
    if let Some(value) = runtime.backend_url {
        config.backend_url = value;
    }
}

fn runtime_config() -> Option<RuntimeConfig> {
    let value = std::env::var(BACKEND_URL_ENV).ok()?;
    Some(RuntimeConfig {
        backend_url: normalize_runtime_value(&value),
    })
}

fn normalize_runtime_value(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
