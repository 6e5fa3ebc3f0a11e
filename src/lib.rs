//! Core library for the `varimail` CLI.
//!
//! Generates cosmetic variations of a Gmail address (case permutations and
//! numeric suffixes) that Gmail treats as the same mailbox, tracks how often
//! each variation has been copied to the clipboard, and exports the full set
//! as plain text.

pub mod adapters;
pub mod cli;
pub mod commands;
pub mod context;
pub mod export;
pub mod ports;
pub mod session;
pub mod validate;
pub mod variations;

use clap::Parser;

/// Run the CLI with the provided arguments.
///
/// # Errors
///
/// Returns an error string when argument parsing fails or command execution fails.
pub fn run<I, T>(args: I) -> Result<(), String>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = cli::Cli::try_parse_from(args).map_err(|err| err.to_string())?;
    commands::dispatch(&cli.command)
}

#[cfg(test)]
mod tests {
    use super::run;

    #[test]
    fn run_executes_generate() {
        let result = run(["varimail", "generate", "a@gmail.com", "--count", "3"]);
        assert!(result.is_ok());
    }

    #[test]
    fn run_errors_on_unknown_subcommand() {
        let result = run(["varimail", "unknown"]);
        assert!(result.is_err());
    }

    #[test]
    fn run_errors_on_invalid_address() {
        let result = run(["varimail", "generate", "not-an-email"]);
        assert!(result.is_err());
    }
}
