//! `-v` / `ROADSENTINEL_LOG_LEVEL`: how chatty the stderr log is.
//!
//! Both spellings land on the same count, which `cli::start` turns into a
//! level: nothing (errors only), then warn, info, debug and trace.

use clap::{Arg, ArgAction, Command, builder::ValueParser};

pub const ARG_VERBOSITY: &str = "verbosity";
pub const LOG_LEVEL_ENV: &str = "ROADSENTINEL_LOG_LEVEL";

/// Level names in count order.
const LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

/// Parses `ROADSENTINEL_LOG_LEVEL`: a level name (any case) or its count, `0` to `4`.
#[must_use]
pub fn validator_log_level() -> ValueParser {
    ValueParser::from(|level: &str| -> Result<u8, String> {
        let level = level.trim();
        if let Ok(count) = level.parse::<u8>() {
            return if usize::from(count) < LEVELS.len() {
                Ok(count)
            } else {
                Err(format!("log level count must be 0-{}", LEVELS.len() - 1))
            };
        }

        LEVELS
            .iter()
            .position(|name| name.eq_ignore_ascii_case(level))
            .and_then(|index| u8::try_from(index).ok())
            .ok_or_else(|| format!("invalid log level, expected one of: {}", LEVELS.join(", ")))
    })
}

#[must_use]
pub fn with_args(command: Command) -> Command {
    command.arg(
        Arg::new(ARG_VERBOSITY)
            .short('v')
            .long("verbose")
            .help("Log more on stderr: -v warn, -vv info, -vvv debug, -vvvv trace (default: errors only; RUST_LOG overrides)")
            .env(LOG_LEVEL_ENV)
            .global(true)
            .action(ArgAction::Count)
            .value_parser(validator_log_level()),
    )
}

#[cfg(test)]
mod tests {
    use super::{LEVELS, validator_log_level};
    use clap::{Arg, Command};

    fn parse(value: &str) -> Result<u8, clap::Error> {
        Command::new("t")
            .arg(Arg::new("level").value_parser(validator_log_level()))
            .try_get_matches_from(["t", value])
            .map(|matches| matches.get_one::<u8>("level").copied().unwrap_or_default())
    }

    #[test]
    fn names_map_to_counts() {
        for (count, name) in LEVELS.iter().enumerate() {
            assert_eq!(parse(name).unwrap(), u8::try_from(count).unwrap());
        }
        assert_eq!(parse("DEBUG").unwrap(), 3);
    }

    #[test]
    fn counts_stop_at_trace() {
        assert_eq!(parse("0").unwrap(), 0);
        assert_eq!(parse("4").unwrap(), 4);
        assert!(parse("5").is_err());
    }

    #[test]
    fn unknown_names_are_rejected() {
        assert!(parse("verbose").is_err());
        assert!(parse("").is_err());
    }
}
