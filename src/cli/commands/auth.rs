use clap::{Arg, ArgAction, Command};

pub const CMD_LOGIN: &str = "login";
pub const CMD_GOOGLE: &str = "google";
pub const CMD_REGISTER: &str = "register";
pub const CMD_VERIFY: &str = "verify";

pub const ARG_EMAIL: &str = "email";
pub const ARG_PASSWORD: &str = "password";
pub const ARG_VERIFY: &str = "verify";
pub const ARG_CREDENTIAL: &str = "credential";
pub const ARG_NAME: &str = "name";
pub const ARG_PHONE: &str = "phone";
pub const ARG_USER_ID: &str = "user-id";

fn email() -> Arg {
    Arg::new(ARG_EMAIL)
        .short('e')
        .long("email")
        .help("Account email address")
        .env("CARPOOL_EMAIL")
        .required(true)
}

fn password() -> Arg {
    Arg::new(ARG_PASSWORD)
        .short('p')
        .long("password")
        .help("Account password")
        .env("CARPOOL_PASSWORD")
        .hide_env_values(true)
        .required(true)
}

#[must_use]
pub fn with_subcommands(command: Command) -> Command {
    command
        .subcommand(
            Command::new(CMD_LOGIN)
                .about("Sign in with email and password")
                .arg(email())
                .arg(password())
                .arg(
                    Arg::new(ARG_VERIFY)
                        .long("verify")
                        .help("Continue to the verification prompt if the email is not verified")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new(CMD_GOOGLE)
                .about("Sign in with a Google ID token")
                .arg(
                    Arg::new(ARG_CREDENTIAL)
                        .long("credential")
                        .help("ID token returned by Google Identity Services")
                        .env("CARPOOL_GOOGLE_CREDENTIAL")
                        .hide_env_values(true)
                        .required(true),
                ),
        )
        .subcommand(
            Command::new(CMD_REGISTER)
                .about("Create an account and verify its email")
                .arg(
                    Arg::new(ARG_NAME)
                        .short('n')
                        .long("name")
                        .help("Full name")
                        .required(true),
                )
                .arg(email())
                .arg(password())
                .arg(
                    Arg::new(ARG_PHONE)
                        .long("phone")
                        .help("Phone number (optional, can be added later)"),
                ),
        )
        .subcommand(
            Command::new(CMD_VERIFY)
                .about("Enter the 6-digit code sent by email")
                .arg(email())
                .arg(
                    Arg::new(ARG_USER_ID)
                        .long("user-id")
                        .help("Account id returned at registration"),
                ),
        )
}
