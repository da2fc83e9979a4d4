use crate::cli::{
    actions::{dashboard, google, login, pages, profile, register, verify, Action},
    commands::{account, auth, pages as pages_cmd, ARG_API_URL, ARG_TIMEOUT},
    globals::GlobalArgs,
};
use anyhow::{anyhow, Context, Result};
use clap::ArgMatches;
use secrecy::SecretString;

fn required(matches: &ArgMatches, name: &str) -> Result<String> {
    matches
        .get_one::<String>(name)
        .cloned()
        .with_context(|| format!("missing required argument: --{name}"))
}

fn secret(matches: &ArgMatches, name: &str) -> Result<SecretString> {
    required(matches, name).map(SecretString::from)
}

fn globals(matches: &ArgMatches) -> Result<GlobalArgs> {
    let api_url = required(matches, ARG_API_URL)?;
    let timeout = matches.get_one::<u64>(ARG_TIMEOUT).copied().unwrap_or(10);
    GlobalArgs::new(&api_url, timeout)
}

/// # Errors
/// Returns an error if required arguments are missing or invalid.
pub fn handler(matches: &ArgMatches) -> Result<Action> {
    match matches.subcommand() {
        Some((auth::CMD_LOGIN, sub)) => Ok(Action::Login(login::Args {
            globals: globals(matches)?,
            email: required(sub, auth::ARG_EMAIL)?,
            password: secret(sub, auth::ARG_PASSWORD)?,
            verify: sub.get_flag(auth::ARG_VERIFY),
        })),
        Some((auth::CMD_GOOGLE, sub)) => Ok(Action::Google(google::Args {
            globals: globals(matches)?,
            credential: secret(sub, auth::ARG_CREDENTIAL)?,
        })),
        Some((auth::CMD_REGISTER, sub)) => Ok(Action::Register(register::Args {
            globals: globals(matches)?,
            name: required(sub, auth::ARG_NAME)?,
            email: required(sub, auth::ARG_EMAIL)?,
            password: secret(sub, auth::ARG_PASSWORD)?,
            phone: sub.get_one::<String>(auth::ARG_PHONE).cloned(),
        })),
        Some((auth::CMD_VERIFY, sub)) => Ok(Action::Verify(verify::Args {
            globals: globals(matches)?,
            email: required(sub, auth::ARG_EMAIL)?,
            user_id: sub.get_one::<String>(auth::ARG_USER_ID).cloned(),
        })),
        Some((account::CMD_DASHBOARD, sub)) => Ok(Action::Dashboard(dashboard::Args {
            globals: globals(matches)?,
            token: secret(sub, account::ARG_TOKEN)?,
        })),
        Some((account::CMD_PROFILE, sub)) => Ok(Action::Profile(profile::Args {
            globals: globals(matches)?,
            token: secret(sub, account::ARG_TOKEN)?,
            phone: required(sub, account::ARG_PHONE)?,
        })),
        Some((pages_cmd::CMD_PAGES, sub)) => Ok(Action::Pages(pages::Args {
            slug: sub.get_one::<String>(pages_cmd::ARG_SLUG).cloned(),
            search: sub.get_one::<String>(pages_cmd::ARG_SEARCH).cloned(),
        })),
        Some((name, _)) => Err(anyhow!("unknown command: {name}")),
        None => Err(anyhow!("no command given, see --help")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::commands;
    use secrecy::ExposeSecret;
    use std::time::Duration;

    const CLEAR_ENV: [(&str, Option<&str>); 5] = [
        ("CARPOOL_API_URL", None),
        ("CARPOOL_TIMEOUT", None),
        ("CARPOOL_EMAIL", None),
        ("CARPOOL_PASSWORD", None),
        ("CARPOOL_TOKEN", None),
    ];

    fn action(args: &[&str]) -> Result<Action> {
        let matches = commands::new().try_get_matches_from(args)?;
        handler(&matches)
    }

    #[test]
    fn test_login_action() {
        temp_env::with_vars(CLEAR_ENV, || {
            let action = action(&[
                "carpool",
                "--timeout",
                "3",
                "login",
                "-e",
                "ada@example.com",
                "-p",
                "secret",
            ]);
            match action {
                Ok(Action::Login(args)) => {
                    assert_eq!(args.email, "ada@example.com");
                    assert_eq!(args.password.expose_secret(), "secret");
                    assert!(!args.verify);
                    assert_eq!(args.globals.timeout, Duration::from_secs(3));
                    assert_eq!(args.globals.base_url(), commands::DEFAULT_API_URL);
                }
                other => panic!("unexpected action: {other:?}"),
            }
        });
    }

    #[test]
    fn test_password_from_env() {
        temp_env::with_vars(
            [
                ("CARPOOL_PASSWORD", Some("from-env")),
                ("CARPOOL_API_URL", Some("https://api.carpool.dev")),
            ],
            || {
                let action = action(&[
                    "carpool", "register", "--name", "Ada", "--email", "a@b.c", "--phone", "5550100",
                ]);
                match action {
                    Ok(Action::Register(args)) => {
                        assert_eq!(args.password.expose_secret(), "from-env");
                        assert_eq!(args.phone.as_deref(), Some("5550100"));
                        assert_eq!(args.globals.base_url(), "https://api.carpool.dev");
                    }
                    other => panic!("unexpected action: {other:?}"),
                }
            },
        );
    }

    #[test]
    fn test_verify_and_pages_actions() {
        temp_env::with_vars(CLEAR_ENV, || {
            match action(&["carpool", "verify", "--email", "a@b.c", "--user-id", "u1"]) {
                Ok(Action::Verify(args)) => {
                    assert_eq!(args.email, "a@b.c");
                    assert_eq!(args.user_id.as_deref(), Some("u1"));
                }
                other => panic!("unexpected action: {other:?}"),
            }

            match action(&["carpool", "pages", "help"]) {
                Ok(Action::Pages(args)) => assert_eq!(args.slug.as_deref(), Some("help")),
                other => panic!("unexpected action: {other:?}"),
            }
        });
    }

    #[test]
    fn test_invalid_api_url() {
        temp_env::with_vars(CLEAR_ENV, || {
            let action = action(&["carpool", "--api-url", "localhost", "dashboard", "-t", "x"]);
            assert!(action.is_err());
        });
    }
}
