use crate::{
    cli::{
        actions::{render, verify},
        globals::GlobalArgs,
    },
    client::ApiClient,
};
use anyhow::Result;
use carpool_ui::{
    flows::register::{handoff, RegisterForm, REGISTER_FAILED},
    SessionStore,
};
use secrecy::{ExposeSecret, SecretString};
use std::io::{self, Write};
use tokio::io::{AsyncBufRead, BufReader};
use tracing::{info, warn};

#[derive(Debug)]
pub struct Args {
    pub globals: GlobalArgs,
    pub name: String,
    pub email: String,
    pub password: SecretString,
    pub phone: Option<String>,
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

/// Creates the account and hands over to the verification prompt.
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
    let password = args.password.expose_secret().to_string();
    let form = RegisterForm {
        name: args.name.clone(),
        email: args.email.clone(),
        confirm_password: password.clone(),
        password,
        phone: args.phone.clone().unwrap_or_default(),
    };

    let request = match form.validate() {
        Ok(request) => request,
        Err(err) => {
            writeln!(out, "{}", err.user_message(REGISTER_FAILED))?;
            return Ok(None);
        }
    };

    match client.register(&request).await {
        Ok(response) => {
            let message = response.message.clone();
            let pending = handoff(&request, response);
            info!(email = %pending.email, "account created");
            writeln!(
                out,
                "{}",
                message.unwrap_or_else(|| "Account created.".to_string())
            )?;

            store.set_pending_verification(pending);
            verify::prompt(client, store, input, out, settings).await
        }
        Err(err) => {
            warn!(error = %err, "registration failed");
            writeln!(out, "{}", err.user_message(REGISTER_FAILED))?;
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use carpool_ui::{paths, ResendTimer};
    use serde_json::json;
    use std::{net::TcpListener, time::Duration};
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn can_bind_localhost() -> bool {
        TcpListener::bind("127.0.0.1:0").is_ok()
    }

    fn settings() -> verify::Settings {
        verify::Settings {
            tick: Duration::from_millis(5),
            timer: ResendTimer::with_duration(30),
        }
    }

    fn args(api_url: &str, password: &str, phone: Option<&str>) -> Result<Args> {
        Ok(Args {
            globals: GlobalArgs::new(api_url, 5)?,
            name: "Ada Lovelace".to_string(),
            email: "Ada@Example.com".to_string(),
            password: SecretString::from(password.to_string()),
            phone: phone.map(str::to_string),
        })
    }

    #[tokio::test]
    async fn registration_hands_over_to_verification() -> Result<()> {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return Ok(());
        }
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/auth/register"))
            .and(body_json(json!({
                "name": "Ada Lovelace",
                "email": "Ada@Example.com",
                "password": "correct horse",
                "phone": "+1 555 0100"
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "userId": "u9",
                "email": "ada@example.com",
                "message": "Check your inbox for a code."
            })))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/auth/verify-email"))
            .and(body_json(json!({
                "userId": "u9",
                "email": "ada@example.com",
                "otp": "246810"
            })))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"message": "verified"})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let args = args(&server.uri(), "correct horse", Some("+1 555 0100"))?;
        let client = args.globals.client()?;
        let mut store = SessionStore::new();
        let mut out = Vec::new();

        let input = &b"246810\n\n"[..];
        let route = run(&client, &mut store, &args, input, &mut out, settings()).await?;
        assert_eq!(route, Some(paths::LOGIN));
        assert!(store.pending_verification().is_none());

        let text = String::from_utf8_lossy(&out);
        assert!(text.starts_with("Check your inbox for a code."));
        assert!(text.contains("sent to ada@example.com"));
        Ok(())
    }

    #[tokio::test]
    async fn invalid_form_is_not_sent() -> Result<()> {
        let args = args("http://127.0.0.1:9", "short", None)?;
        let client = args.globals.client()?;
        let mut store = SessionStore::new();
        let mut out = Vec::new();

        let route = run(&client, &mut store, &args, &b""[..], &mut out, settings()).await?;
        assert_eq!(route, None);
        assert_eq!(
            String::from_utf8_lossy(&out).trim(),
            "Password must be at least 8 characters."
        );
        Ok(())
    }

    #[tokio::test]
    async fn server_rejection_is_shown() -> Result<()> {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return Ok(());
        }
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/auth/register"))
            .respond_with(
                ResponseTemplate::new(409).set_body_json(json!({"error": "Email already registered"})),
            )
            .mount(&server)
            .await;

        let args = args(&server.uri(), "correct horse", None)?;
        let client = args.globals.client()?;
        let mut store = SessionStore::new();
        let mut out = Vec::new();

        let route = run(&client, &mut store, &args, &b""[..], &mut out, settings()).await?;
        assert_eq!(route, None);
        assert_eq!(String::from_utf8_lossy(&out).trim(), "Email already registered");
        Ok(())
    }
}
