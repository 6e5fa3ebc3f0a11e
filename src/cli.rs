//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Top-level CLI parser for `varimail`.
#[derive(Debug, Parser)]
#[command(name = "varimail", version, about = "Generate Gmail-equivalent address variations")]
pub struct Cli {
    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate variations of a Gmail address and print them.
    Generate {
        /// Base Gmail address to vary (e.g. `user.name@gmail.com`).
        email: String,
        /// How many variations to produce (clamped to 1..=100).
        #[arg(short, long, default_value_t = 10, allow_negative_numbers = true)]
        count: i64,
        /// Output format for the generated list.
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
        /// Also write the variations to a newline-joined text file.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Start an interactive session with per-item copy tracking.
    Session,
}

/// Output format for the `generate` subcommand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One address per line.
    Text,
    /// JSON array of generated items.
    Json,
}

#[cfg(test)]
mod tests {
    use super::{Cli, Command, OutputFormat};
    use clap::Parser;

    #[test]
    fn parses_generate_subcommand() {
        let cli = Cli::parse_from(["varimail", "generate", "a@gmail.com"]);
        match cli.command {
            Command::Generate { email, count, format, output } => {
                assert_eq!(email, "a@gmail.com");
                assert_eq!(count, 10);
                assert_eq!(format, OutputFormat::Text);
                assert!(output.is_none());
            }
            Command::Session => panic!("expected generate"),
        }
    }

    #[test]
    fn parses_generate_options() {
        let cli = Cli::parse_from([
            "varimail",
            "generate",
            "a@gmail.com",
            "--count",
            "25",
            "--format",
            "json",
            "--output",
            "out.txt",
        ]);
        match cli.command {
            Command::Generate { count, format, output, .. } => {
                assert_eq!(count, 25);
                assert_eq!(format, OutputFormat::Json);
                assert_eq!(output.unwrap().to_str(), Some("out.txt"));
            }
            Command::Session => panic!("expected generate"),
        }
    }

    #[test]
    fn parses_session_subcommand() {
        let cli = Cli::parse_from(["varimail", "session"]);
        assert!(matches!(cli.command, Command::Session));
    }
}
