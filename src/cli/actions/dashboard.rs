use crate::{
    cli::{actions::render, globals::GlobalArgs},
    client::ApiClient,
};
use anyhow::Result;
use carpool_ui::{
    flows::dashboard::{handle_failure, DASHBOARD_FAILED},
    types::{Session, User},
    SessionStore,
};
use secrecy::{ExposeSecret, SecretString};
use std::io::{self, Write};
use tracing::warn;

#[derive(Debug)]
pub struct Args {
    pub globals: GlobalArgs,
    pub token: SecretString,
}

/// Session rebuilt from a token passed on the command line. The profile is
/// unknown until the backend answers.
#[must_use]
pub fn token_session(token: &SecretString) -> SessionStore {
    let mut store = SessionStore::new();
    store.login(Session {
        token: token.expose_secret().trim().to_string(),
        user: User::default(),
    });
    store
}

/// # Errors
/// Returns an error if the client cannot be built or writing fails.
pub async fn execute(args: Args) -> Result<()> {
    let client = args.globals.client()?;
    let mut store = token_session(&args.token);
    let mut out = io::stdout();

    if let Some(route) = run(&client, &mut store, &mut out).await? {
        render::next_step(&mut out, route)?;
    }
    Ok(())
}

/// Loads and prints the dashboard. Returns the route to leave for when the
/// session was rejected.
///
/// # Errors
/// Returns an error only when writing output fails.
pub async fn run(
    client: &ApiClient,
    store: &mut SessionStore,
    out: &mut impl Write,
) -> Result<Option<&'static str>> {
    let Some(token) = store.token().map(str::to_string) else {
        return Ok(Some(carpool_ui::paths::LOGIN));
    };

    match client.dashboard(&token).await {
        Ok(response) => {
            render::dashboard(out, &response)?;
            Ok(None)
        }
        Err(err) => {
            warn!(error = %err, "dashboard request failed");
            writeln!(out, "{}", err.user_message(DASHBOARD_FAILED))?;
            Ok(handle_failure(store, &err))
        }
    }
}
