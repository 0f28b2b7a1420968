//! Badgesprite - Command-line tool for cutting badges out of sprite sheets

use std::process::ExitCode;

use badgesprite::cli;

fn main() -> ExitCode {
    cli::run()
}
