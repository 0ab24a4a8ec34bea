use crate::cli::actions::{Action, login_url, open};
use anyhow::Result;

/// Execute the provided action.
// Single dispatch point for all CLI actions.
/// # Errors
/// Returns an error if the action fails.
pub async fn execute(action: Action) -> Result<()> {
    match action {
        Action::Open(args) => open::execute(args).await,
        Action::LoginUrl(args) => login_url::execute(&args),
    }
}
