use colored::Colorize;
use linkcheck::commands::command_argument_builder;
use linkcheck::handlers::{handle_check, init_logging};

fn main() {
    let matches = command_argument_builder().get_matches();
    init_logging(matches.get_flag("verbose"), matches.get_flag("quiet"));

    match handle_check(&matches) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("{} {:#}", "✗".red().bold(), e);
            std::process::exit(1);
        }
    }
}
