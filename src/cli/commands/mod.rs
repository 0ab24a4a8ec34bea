pub mod logging;

use clap::{
    Arg, ArgAction, ColorChoice, Command,
    builder::styling::{AnsiColor, Effects, Styles},
};

pub const ARG_BACKEND_URL: &str = "backend-url";
pub const CMD_OPEN: &str = "open";
pub const CMD_LOGIN_URL: &str = "login-url";

#[must_use]
pub fn new() -> Command {
    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Blue.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::Green.on_default());

    let long_version: &'static str = Box::leak(
        format!("{} - {}", env!("CARGO_PKG_VERSION"), crate::GIT_COMMIT_HASH).into_boxed_str(),
    );

    let command = Command::new("roadsentinel")
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .version(env!("CARGO_PKG_VERSION"))
        .long_version(long_version)
        .color(ColorChoice::Auto)
        .styles(styles)
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new(ARG_BACKEND_URL)
                .short('b')
                .long("backend-url")
                .help("Backend origin, e.g. https://api.example.com")
                .env(crate::api::config::BACKEND_URL_ENV)
                .global(true),
        )
        .subcommand(
            Command::new(CMD_OPEN)
                .about("Load the dashboard at a landing URL and print where it settles as JSON")
                .arg(
                    Arg::new("url")
                        .short('u')
                        .long("url")
                        .help("Landing URL, including any #session_id=... fragment")
                        .required(true),
                )
                .arg(
                    Arg::new("logout")
                        .long("logout")
                        .help("Sign out after loading and print where that lands")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new(CMD_LOGIN_URL)
                .about("Print the identity provider URL for signing in from an origin")
                .arg(
                    Arg::new("origin")
                        .short('o')
                        .long("origin")
                        .help("Origin serving the dashboard, e.g. https://app.example.com")
                        .required(true),
                ),
        );

    logging::with_args(command)
}
