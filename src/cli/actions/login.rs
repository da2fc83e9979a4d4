use crate::{
    cli::{
        actions::{render, verify},
        globals::GlobalArgs,
    },
    client::ApiClient,
};
use anyhow::Result;
use carpool_ui::{
    flows::login::{complete_login, validate_credentials, LoginState, LOGIN_FAILED},
    types::Credentials,
    SessionStore,
};
use secrecy::{ExposeSecret, SecretString};
use std::io::{self, Write};
use tokio::io::{AsyncBufRead, BufReader};
use tracing::{info, warn};

#[derive(Debug)]
pub struct Args {
    pub globals: GlobalArgs,
    pub email: String,
    pub password: SecretString,
    /// Continue to the verification prompt when the email is unverified.
    pub verify: bool,
}

/// # Errors
/// Returns an error if the client cannot be built or the terminal fails.
pub async fn execute(args: Args) -> Result<()> {
    let client = args.globals.client()?;
    let mut store = SessionStore::new();
    let input = BufReader::new(tokio::io::stdin());
    let mut out = io::stdout();

    if let Some(route) = run(
        &client,
        &mut store,
        &args,
        input,
        &mut out,
        verify::Settings::default(),
    )
    .await?
    {
        render::next_step(&mut out, route)?;
    }

    Ok(())
}

/// Signs in and returns the route the flow ended on, or `None` when it
/// stopped at an error message.
///
/// # Errors
/// Returns an error only when reading input or writing output fails.
pub async fn run<R, W>(
    client: &ApiClient,
    store: &mut SessionStore,
    args: &Args,
    input: R,
    out: &mut W,
    settings: verify::Settings,
) -> Result<Option<&'static str>>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let credentials =
        match validate_credentials(&Credentials::new(&args.email, args.password.expose_secret())) {
            Ok(credentials) => credentials,
            Err(err) => {
                writeln!(out, "{}", err.user_message(LOGIN_FAILED))?;
                return Ok(None);
            }
        };

    match client.login(&credentials).await {
        Ok(response) => {
            let route = complete_login(store, response);
            info!(route, "signed in");
            render::signed_in(out, store)?;
            Ok(Some(route))
        }
        Err(err) => {
            warn!(error = %err, "login failed");
            let state = LoginState::from_failure(&err, &credentials.email, LOGIN_FAILED);
            writeln!(out, "{}", state.message().unwrap_or(LOGIN_FAILED))?;

            match state.verification_handoff() {
                Some(pending) if args.verify => {
                    store.set_pending_verification(pending);
                    verify::prompt(client, store, input, out, settings).await
                }
                Some(pending) => {
                    writeln!(
                        out,
                        "Verify it with: carpool verify --email {}",
                        pending.email
                    )?;
                    Ok(None)
                }
                None => Ok(None),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use carpool_ui::{paths, ResendTimer};
    use serde_json::json;
    use std::{net::TcpListener, time::Duration};
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn can_bind_localhost() -> bool {
        TcpListener::bind("127.0.0.1:0").is_ok()
    }

    fn args(server: &MockServer, verify: bool) -> Result<Args> {
        Ok(Args {
            globals: GlobalArgs::new(&server.uri(), 5)?,
            email: "ada@example.com".to_string(),
            password: SecretString::from("secret".to_string()),
            verify,
        })
    }

    fn settings() -> verify::Settings {
        verify::Settings {
            tick: Duration::from_millis(5),
            timer: ResendTimer::with_duration(30),
        }
    }

    async fn mount_unverified(server: &MockServer) {
        Mock::given(method("POST"))
            .and(path("/auth/login"))
            .respond_with(
                ResponseTemplate::new(403)
                    .set_body_json(json!({"message": "Please verify: email NOT VERIFIED"})),
            )
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn user_without_phone_is_sent_to_profile() -> Result<()> {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return Ok(());
        }
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/auth/login"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "token": "jwt-1",
                "user": {"_id": "u1", "email": "ada@example.com"}
            })))
            .mount(&server)
            .await;

        let args = args(&server, false)?;
        let client = args.globals.client()?;
        let mut store = SessionStore::new();
        let mut out = Vec::new();

        let route = run(&client, &mut store, &args, &b""[..], &mut out, settings()).await?;
        assert_eq!(route, Some(paths::COMPLETE_PROFILE));
        assert_eq!(store.token(), Some("jwt-1"));
        assert!(String::from_utf8_lossy(&out).contains("Token: jwt-1"));
        Ok(())
    }

    #[tokio::test]
    async fn unverified_login_suggests_verification() -> Result<()> {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return Ok(());
        }
        let server = MockServer::start().await;
        mount_unverified(&server).await;

        let args = args(&server, false)?;
        let client = args.globals.client()?;
        let mut store = SessionStore::new();
        let mut out = Vec::new();

        let route = run(&client, &mut store, &args, &b""[..], &mut out, settings()).await?;
        assert_eq!(route, None);
        let text = String::from_utf8_lossy(&out);
        assert!(text.contains("Please verify: email NOT VERIFIED"));
        assert!(text.contains("carpool verify --email ada@example.com"));
        assert!(store.pending_verification().is_none());
        Ok(())
    }

    #[tokio::test]
    async fn unverified_login_can_continue_to_prompt() -> Result<()> {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return Ok(());
        }
        let server = MockServer::start().await;
        mount_unverified(&server).await;

        let args = args(&server, true)?;
        let client = args.globals.client()?;
        let mut store = SessionStore::new();
        let mut out = Vec::new();

        let route = run(&client, &mut store, &args, &b"quit\n"[..], &mut out, settings()).await?;
        assert_eq!(route, None);
        assert!(String::from_utf8_lossy(&out)
            .contains("Enter the 6-digit code sent to ada@example.com."));
        Ok(())
    }

    #[tokio::test]
    async fn other_failures_show_fallback() -> Result<()> {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return Ok(());
        }
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/auth/login"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let args = args(&server, true)?;
        let client = args.globals.client()?;
        let mut store = SessionStore::new();
        let mut out = Vec::new();

        let route = run(&client, &mut store, &args, &b""[..], &mut out, settings()).await?;
        assert_eq!(route, None);
        assert_eq!(String::from_utf8_lossy(&out).trim(), LOGIN_FAILED);
        Ok(())
    }

    #[tokio::test]
    async fn blank_password_is_rejected_locally() -> Result<()> {
        let args = Args {
            globals: GlobalArgs::new("http://127.0.0.1:9", 1)?,
            email: "ada@example.com".to_string(),
            password: SecretString::from("  ".to_string()),
            verify: false,
        };
        let client = args.globals.client()?;
        let mut store = SessionStore::new();
        let mut out = Vec::new();

        let route = run(&client, &mut store, &args, &b""[..], &mut out, settings()).await?;
        assert_eq!(route, None);
        assert_eq!(
            String::from_utf8_lossy(&out).trim(),
            "Email and password are required."
        );
        Ok(())
    }
}
