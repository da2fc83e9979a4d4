pub mod account;
pub mod auth;
pub mod logging;
pub mod pages;

use clap::{
    builder::styling::{AnsiColor, Effects, Styles},
    Arg, ColorChoice, Command,
};

pub const ARG_API_URL: &str = "api-url";
pub const ARG_TIMEOUT: &str = "timeout";

pub const DEFAULT_API_URL: &str = "http://localhost:5000/api";

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

    let command = Command::new("carpool")
        .about("Carpool rider client")
        .version(env!("CARGO_PKG_VERSION"))
        .long_version(long_version)
        .color(ColorChoice::Auto)
        .styles(styles)
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new(ARG_API_URL)
                .long("api-url")
                .help("Base URL of the carpool API")
                .env("CARPOOL_API_URL")
                .default_value(DEFAULT_API_URL)
                .global(true),
        )
        .arg(
            Arg::new(ARG_TIMEOUT)
                .long("timeout")
                .help("Request timeout in seconds")
                .env("CARPOOL_TIMEOUT")
                .default_value("10")
                .global(true)
                .value_parser(clap::value_parser!(u64).range(1..=300)),
        );

    let command = auth::with_subcommands(command);
    let command = account::with_subcommands(command);
    let command = pages::with_subcommands(command);
    logging::with_args(command)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CLEAR_ENV: [(&str, Option<&str>); 7] = [
        ("CARPOOL_API_URL", None),
        ("CARPOOL_TIMEOUT", None),
        ("CARPOOL_LOG_LEVEL", None),
        ("CARPOOL_LOG_JSON", None),
        ("CARPOOL_EMAIL", None),
        ("CARPOOL_PASSWORD", None),
        ("CARPOOL_TOKEN", None),
    ];

    #[test]
    fn test_new() {
        let command = new();

        assert_eq!(command.get_name(), "carpool");
        assert_eq!(
            command.get_about().map(ToString::to_string),
            Some("Carpool rider client".to_string())
        );
        assert_eq!(
            command.get_version().map(ToString::to_string),
            Some(env!("CARGO_PKG_VERSION").to_string())
        );
        for name in ["login", "google", "register", "verify", "dashboard", "profile", "pages"] {
            assert!(
                command.get_subcommands().any(|sub| sub.get_name() == name),
                "missing subcommand {name}"
            );
        }
    }

    #[test]
    fn test_defaults() {
        temp_env::with_vars(CLEAR_ENV, || {
            let matches = new().get_matches_from(["carpool", "pages"]);
            assert_eq!(
                matches.get_one::<String>(ARG_API_URL).map(String::as_str),
                Some(DEFAULT_API_URL)
            );
            assert_eq!(matches.get_one::<u64>(ARG_TIMEOUT).copied(), Some(10));
            assert_eq!(
                matches.get_one::<u8>(logging::ARG_VERBOSITY).copied(),
                Some(0)
            );
            assert!(!matches.get_flag(logging::ARG_LOG_JSON));
        });
    }

    #[test]
    fn test_login_args() {
        temp_env::with_vars(CLEAR_ENV, || {
            let matches = new().get_matches_from([
                "carpool",
                "--api-url",
                "https://api.carpool.dev",
                "login",
                "--email",
                "ada@example.com",
                "--password",
                "secret",
                "--verify",
            ]);
            assert_eq!(
                matches.get_one::<String>(ARG_API_URL).map(String::as_str),
                Some("https://api.carpool.dev")
            );

            let sub = matches.subcommand_matches(auth::CMD_LOGIN);
            assert!(sub.is_some());
            if let Some(sub) = sub {
                assert_eq!(
                    sub.get_one::<String>(auth::ARG_EMAIL).map(String::as_str),
                    Some("ada@example.com")
                );
                assert!(sub.get_flag(auth::ARG_VERIFY));
            }
        });
    }

    #[test]
    fn test_check_env() {
        temp_env::with_vars(
            [
                ("CARPOOL_API_URL", Some("https://api.carpool.dev")),
                ("CARPOOL_TIMEOUT", Some("30")),
                ("CARPOOL_LOG_LEVEL", Some("info")),
                ("CARPOOL_TOKEN", Some("jwt-1")),
            ],
            || {
                let matches = new().get_matches_from(["carpool", "dashboard"]);
                assert_eq!(
                    matches.get_one::<String>(ARG_API_URL).map(String::as_str),
                    Some("https://api.carpool.dev")
                );
                assert_eq!(matches.get_one::<u64>(ARG_TIMEOUT).copied(), Some(30));
                assert_eq!(
                    matches.get_one::<u8>(logging::ARG_VERBOSITY).copied(),
                    Some(2)
                );
                assert_eq!(
                    matches
                        .subcommand_matches(account::CMD_DASHBOARD)
                        .and_then(|sub| sub.get_one::<String>(account::ARG_TOKEN))
                        .map(String::as_str),
                    Some("jwt-1")
                );
            },
        );
    }

    #[test]
    fn test_check_log_level_verbosity() {
        for index in 0..5_u8 {
            temp_env::with_vars(CLEAR_ENV, || {
                let mut args = vec!["carpool".to_string(), "pages".to_string()];
                if index > 0 {
                    args.push(format!("-{}", "v".repeat(index as usize)));
                }

                let matches = new().get_matches_from(args);
                assert_eq!(
                    matches.get_one::<u8>(logging::ARG_VERBOSITY).copied(),
                    Some(index)
                );
            });
        }
    }

    #[test]
    fn test_missing_credentials_are_rejected() {
        temp_env::with_vars(CLEAR_ENV, || {
            let result = new().try_get_matches_from(["carpool", "login", "--email", "a@b.c"]);
            assert!(result.is_err());

            let result = new().try_get_matches_from(["carpool", "dashboard"]);
            assert!(result.is_err());
        });
    }

    #[test]
    fn test_timeout_range() {
        temp_env::with_vars(CLEAR_ENV, || {
            assert!(new()
                .try_get_matches_from(["carpool", "--timeout", "0", "pages"])
                .is_err());
        });
    }

    #[test]
    fn test_pages_slug_and_search_conflict() {
        temp_env::with_vars(CLEAR_ENV, || {
            assert!(new()
                .try_get_matches_from(["carpool", "pages", "pricing"])
                .is_err());
            assert!(new()
                .try_get_matches_from(["carpool", "pages", "help", "--search", "refund"])
                .is_err());
            assert!(new()
                .try_get_matches_from(["carpool", "pages", "--search", "refund"])
                .is_ok());
        });
    }
}
