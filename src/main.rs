//! Binary entrypoint for the `varimail` CLI.

use std::process::ExitCode;

fn main() -> ExitCode {
    match varimail::run(std::env::args()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
