use clap::{Arg, Command};

pub const CMD_DASHBOARD: &str = "dashboard";
pub const CMD_PROFILE: &str = "profile";

pub const ARG_TOKEN: &str = "token";
pub const ARG_PHONE: &str = "phone";

fn token() -> Arg {
    Arg::new(ARG_TOKEN)
        .short('t')
        .long("token")
        .help("Session token printed by login or verify")
        .env("CARPOOL_TOKEN")
        .hide_env_values(true)
        .required(true)
}

#[must_use]
pub fn with_subcommands(command: Command) -> Command {
    command
        .subcommand(
            Command::new(CMD_DASHBOARD)
                .about("Show ride statistics and recent activity")
                .arg(token()),
        )
        .subcommand(
            Command::new(CMD_PROFILE)
                .about("Add a phone number to complete the profile")
                .arg(token())
                .arg(
                    Arg::new(ARG_PHONE)
                        .long("phone")
                        .help("Phone number, 7 to 15 digits")
                        .required(true),
                ),
        )
}
