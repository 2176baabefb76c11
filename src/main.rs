// src/main.rs
use std::process::ExitCode;

use word_cloud::{app, cli, logging};

fn main() -> ExitCode {
    let args = cli::parse_args();
    logging::init(args.verbose);

    match app::run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
