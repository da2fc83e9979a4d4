use carpool_ui::content;
use clap::{builder::PossibleValuesParser, Arg, Command};

pub const CMD_PAGES: &str = "pages";

pub const ARG_SLUG: &str = "slug";
pub const ARG_SEARCH: &str = "search";

#[must_use]
pub fn with_subcommands(command: Command) -> Command {
    command.subcommand(
        Command::new(CMD_PAGES)
            .about("Show the help center, services or driver verification pages")
            .arg(
                Arg::new(ARG_SLUG)
                    .help("Page to show; lists all pages when omitted")
                    .value_parser(PossibleValuesParser::new([
                        content::HELP,
                        content::SERVICES,
                        content::DRIVER_VERIFICATION,
                    ])),
            )
            .arg(
                Arg::new(ARG_SEARCH)
                    .short('s')
                    .long("search")
                    .help("Search help center questions and answers")
                    .conflicts_with(ARG_SLUG),
            ),
    )
}
