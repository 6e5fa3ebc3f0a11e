//! Command dispatch and handlers.

pub mod generate;
pub mod session;

use crate::cli::Command;

/// Dispatch a parsed command to its handler.
///
/// # Errors
///
/// Returns an error string if the selected command handler fails.
pub fn dispatch(command: &Command) -> Result<(), String> {
    match command {
        Command::Generate { email, count, format, output } => {
            generate::run(email, *count, *format, output.as_deref())
        }
        Command::Session => session::run(),
    }
}
