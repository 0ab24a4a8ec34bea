pub mod login_url;
pub mod open;

// Internal "interpreter" for `Action`; the match lives in `run` so this module
// stays small as actions are added.
mod run;

#[derive(Debug)]
pub enum Action {
    Open(open::Args),
    LoginUrl(login_url::Args),
}

impl Action {
    /// Execute the action.
    /// # Errors
    /// Returns an error if the action fails.
    pub async fn execute(self) -> anyhow::Result<()> {
        run::execute(self).await
    }
}
