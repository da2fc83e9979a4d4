use crate::{
    cli::{
        actions::{dashboard::token_session, render},
        globals::GlobalArgs,
    },
    client::ApiClient,
};
use anyhow::Result;
use carpool_ui::{
    flows::{
        dashboard::handle_failure,
        profile::{complete_profile, normalize_phone, PROFILE_FAILED},
    },
    paths,
    types::UpdateProfileRequest,
    SessionStore,
};
use secrecy::SecretString;
use std::io::{self, Write};
use tracing::{info, warn};

#[derive(Debug)]
pub struct Args {
    pub globals: GlobalArgs,
    pub token: SecretString,
    pub phone: String,
}

/// # Errors
/// Returns an error if the client cannot be built or writing fails.
pub async fn execute(args: Args) -> Result<()> {
    let client = args.globals.client()?;
    let mut store = token_session(&args.token);
    let mut out = io::stdout();

    if let Some(route) = run(&client, &mut store, &args.phone, &mut out).await? {
        render::next_step(&mut out, route)?;
    }
    Ok(())
}

/// Saves the phone number and returns the route the flow ended on.
///
/// # Errors
/// Returns an error only when writing output fails.
pub async fn run(
    client: &ApiClient,
    store: &mut SessionStore,
    phone: &str,
    out: &mut impl Write,
) -> Result<Option<&'static str>> {
    let phone = match normalize_phone(phone) {
        Ok(phone) => phone,
        Err(err) => {
            writeln!(out, "{}", err.user_message(PROFILE_FAILED))?;
            return Ok(None);
        }
    };

    let Some(token) = store.token().map(str::to_string) else {
        return Ok(Some(paths::LOGIN));
    };

    match client
        .update_profile(&token, &UpdateProfileRequest { phone })
        .await
    {
        Ok(user) => {
            let route = complete_profile(store, user);
            info!(route, "profile completed");
            if let Some(user) = store.user() {
                writeln!(out, "Profile complete. Welcome, {}!", user.display_name())?;
            }
            Ok(Some(route))
        }
        Err(err) => {
            warn!(error = %err, "profile update failed");
            writeln!(out, "{}", err.user_message(PROFILE_FAILED))?;
            Ok(handle_failure(store, &err))
        }
    }
}
