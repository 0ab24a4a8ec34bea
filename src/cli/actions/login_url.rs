use crate::features::auth::login::login_redirect_url;
use anyhow::{Context, Result};
use url::Origin;

#[derive(Debug)]
pub struct Args {
    pub origin: Origin,
}

/// Print the identity provider URL for `args.origin`.
///
/// # Errors
/// Returns an error if the origin is opaque.
pub fn execute(args: &Args) -> Result<()> {
    let url = login_redirect_url(&args.origin).context("failed to build login URL")?;
    println!("{url}");
    Ok(())
}
