use clap::{ArgAction, arg};

/// Directory scanned when none is given on the command line.
pub const DEFAULT_DIRECTORY: &str = "html";

pub const CLAP_STYLING: clap::builder::styling::Styles = clap::builder::styling::Styles::styled()
    .header(clap_cargo::style::HEADER)
    .usage(clap_cargo::style::USAGE)
    .literal(clap_cargo::style::LITERAL)
    .placeholder(clap_cargo::style::PLACEHOLDER)
    .error(clap_cargo::style::ERROR)
    .valid(clap_cargo::style::VALID)
    .invalid(clap_cargo::style::INVALID);

pub fn command_argument_builder() -> clap::Command {
    clap::Command::new("linkcheck")
        .version(env!("CARGO_PKG_VERSION"))
        .bin_name("linkcheck")
        .about("Report internal links in a directory of HTML files that point at missing files")
        .styles(CLAP_STYLING)
        .arg(
            arg!([DIR])
                .required(false)
                .help("Directory of .html files to audit (not recursive)")
                .default_value(DEFAULT_DIRECTORY),
        )
        .arg(
            arg!(-f --"format" <FORMAT>)
                .required(false)
                .help("Report format: text, json")
                .value_parser(["text", "json"])
                .default_value("text"),
        )
        .arg(
            arg!(--"fail-on-broken")
                .required(false)
                .help("Exit with status 1 when broken links are found (default: always exit 0)")
                .action(ArgAction::SetTrue),
        )
        .arg(
            arg!(-v --"verbose")
                .required(false)
                .help("Log every skipped and broken link to stderr")
                .action(ArgAction::SetTrue)
                .conflicts_with("quiet"),
        )
        .arg(
            arg!(-q --"quiet")
                .required(false)
                .help("Only log errors and hide the progress spinner")
                .action(ArgAction::SetTrue)
                .conflicts_with("verbose"),
        )
}
