use crate::cli::{actions::Action, commands, dispatch, telemetry};
use anyhow::Result;
use tracing::Level;

/// `-v` count to the most verbose level logged. Zero keeps the telemetry
/// default (errors only).
const fn verbosity_level(count: u8) -> Option<Level> {
    match count {
        0 => None,
        1 => Some(Level::WARN),
        2 => Some(Level::INFO),
        3 => Some(Level::DEBUG),
        _ => Some(Level::TRACE),
    }
}

/// Parses the command line, installs logging and returns the action to run.
///
/// # Errors
///
/// Returns an error if logging cannot be installed or the arguments do not
/// form a valid action
pub fn start() -> Result<Action> {
    let matches = commands::new().get_matches();

    let count = matches
        .get_one::<u8>(commands::logging::ARG_VERBOSITY)
        .copied()
        .unwrap_or_default();
    telemetry::init(verbosity_level(count))?;

    dispatch::handler(&matches)
}
