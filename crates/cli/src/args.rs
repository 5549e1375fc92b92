//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Parse command-line arguments and environment variables.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `dispatch` module).
//! - Does not load configuration files (see `confkit_config::ConfigStore`).

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "confkit")]
#[command(about = "Query JSON and INI configuration files by dotted key", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  confkit -f config.json get languages.PHP\n  confkit -f config.ini -e production get database.host --default localhost\n  confkit -f config.json -d / get planets/0 --raw\n  confkit -f config.json exists license\n  confkit -f config.json show\n"
)]
pub struct Cli {
    /// Configuration file to load (.json or .ini)
    #[arg(short, long, env = "CONFKIT_FILE", value_name = "FILE")]
    pub file: PathBuf,

    /// Environment to select (a top-level key of the document)
    #[arg(short, long, env = "CONFKIT_ENV")]
    pub env: Option<String>,

    /// Single-character separator between key segments
    #[arg(short, long, env = "CONFKIT_DELIMITER", default_value = ".")]
    pub delimiter: String,

    /// Log debug output to stderr
    #[arg(short, long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the value stored at a key
    Get {
        /// Key to look up, e.g. `languages.PHP` or `planets.0`
        key: String,

        /// Value to print when the key is absent (parsed as JSON, else taken as a string)
        #[arg(long, value_name = "VALUE")]
        default: Option<String>,

        /// Print string values without JSON quoting
        #[arg(long)]
        raw: bool,
    },

    /// Check whether a key holds a non-null value
    Exists {
        /// Key to check
        key: String,
    },

    /// Print the whole active document as JSON
    Show,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_get_with_options() {
        let cli = Cli::try_parse_from([
            "confkit", "--file", "config.json", "-e", "prod", "-d", "/", "get", "a/b", "--default",
            "1", "--raw",
        ])
        .unwrap();

        assert_eq!(cli.file, PathBuf::from("config.json"));
        assert_eq!(cli.env.as_deref(), Some("prod"));
        assert_eq!(cli.delimiter, "/");
        match cli.command {
            Commands::Get { key, default, raw } => {
                assert_eq!(key, "a/b");
                assert_eq!(default.as_deref(), Some("1"));
                assert!(raw);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
