use crate::{
    cli::{actions::render, globals::GlobalArgs},
    client::ApiClient,
};
use anyhow::Result;
use carpool_ui::{
    flows::login::{complete_login, GOOGLE_LOGIN_FAILED},
    SessionStore,
};
use secrecy::{ExposeSecret, SecretString};
use std::io::{self, Write};
use tracing::{info, warn};

#[derive(Debug)]
pub struct Args {
    pub globals: GlobalArgs,
    /// ID token issued by Google Identity Services.
    pub credential: SecretString,
}

/// # Errors
/// Returns an error if the client cannot be built or writing fails.
pub async fn execute(args: Args) -> Result<()> {
    let client = args.globals.client()?;
    let mut store = SessionStore::new();
    let mut out = io::stdout();

    if let Some(route) = run(&client, &mut store, &args, &mut out).await? {
        render::next_step(&mut out, route)?;
    }
    Ok(())
}

/// # Errors
/// Returns an error only when writing output fails.
pub async fn run(
    client: &ApiClient,
    store: &mut SessionStore,
    args: &Args,
    out: &mut impl Write,
) -> Result<Option<&'static str>> {
    let credential = args.credential.expose_secret().trim();
    if credential.is_empty() {
        writeln!(out, "{GOOGLE_LOGIN_FAILED}")?;
        return Ok(None);
    }

    match client.google_login(credential).await {
        Ok(response) => {
            let route = complete_login(store, response);
            info!(route, "signed in with google");
            render::signed_in(out, store)?;
            Ok(Some(route))
        }
        Err(err) => {
            warn!(error = %err, "google login failed");
            writeln!(out, "{}", err.user_message(GOOGLE_LOGIN_FAILED))?;
            Ok(None)
        }
    }
}
