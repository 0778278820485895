//! Command-Line Interface

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Gesture Recognizer - match freehand pointer traces against named shapes
#[derive(Parser, Debug)]
#[command(name = "gesture-rec")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Recognize a recorded trace against the built-in gesture set
    Recognize {
        /// JSON file holding an array of trace points
        #[arg(short, long)]
        input: PathBuf,

        /// Print the full ranking instead of just the best match
        #[arg(short, long)]
        ranked: bool,
    },

    /// List the gestures in the built-in database
    List {
        /// Show each exemplar's move vectors
        #[arg(short, long)]
        detailed: bool,
    },

    /// View or modify configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Write the default configuration to the default location
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}

impl Cli {
    /// Parse from process arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recognize_command_parses() {
        let cli = Cli::try_parse_from(["gesture-rec", "recognize", "--input", "trace.json"]).unwrap();
        match cli.command {
            Commands::Recognize { input, ranked } => {
                assert_eq!(input, PathBuf::from("trace.json"));
                assert!(!ranked);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_global_verbose_flag() {
        let cli = Cli::try_parse_from(["gesture-rec", "list", "--verbose"]).unwrap();
        assert!(cli.verbose);
    }

    #[test]
    fn test_config_init_force() {
        let cli = Cli::try_parse_from(["gesture-rec", "config", "init", "--force"]).unwrap();
        match cli.command {
            Commands::Config { action: ConfigAction::Init { force } } => assert!(force),
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_missing_input_is_an_error() {
        assert!(Cli::try_parse_from(["gesture-rec", "recognize"]).is_err());
    }
}
