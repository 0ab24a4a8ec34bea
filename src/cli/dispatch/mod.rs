use crate::{
    api::AppConfig,
    cli::{
        actions::{Action, login_url, open},
        commands::{ARG_BACKEND_URL, CMD_LOGIN_URL, CMD_OPEN},
    },
};
use anyhow::{Context, Result, anyhow};
use url::Url;

/// # Errors
/// Returns an error if required arguments are missing or are not valid URLs.
pub fn handler(matches: &clap::ArgMatches) -> Result<Action> {
    let config = match matches.get_one::<String>(ARG_BACKEND_URL) {
        Some(backend_url) => AppConfig::load().with_backend_url(backend_url),
        None => AppConfig::load(),
    };

    match matches.subcommand() {
        Some((CMD_OPEN, sub_m)) => {
            let landing = sub_m
                .get_one::<String>("url")
                .context("missing required argument: --url")?;
            let landing = Url::parse(landing).context("invalid landing URL")?;

            Ok(Action::Open(open::Args {
                config,
                landing,
                logout: sub_m.get_flag("logout"),
            }))
        }
        Some((CMD_LOGIN_URL, sub_m)) => {
            let origin = sub_m
                .get_one::<String>("origin")
                .context("missing required argument: --origin")?;
            let origin = Url::parse(origin).context("invalid origin")?;

            Ok(Action::LoginUrl(login_url::Args {
                origin: origin.origin(),
            }))
        }
        _ => Err(anyhow!("no subcommand given")),
    }
}
