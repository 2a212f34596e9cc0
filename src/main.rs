//! hqscale - Command-line tool for enlarging pixel art with the HQx filter

use std::process::ExitCode;

use hqscale::cli;

fn main() -> ExitCode {
    cli::run()
}
