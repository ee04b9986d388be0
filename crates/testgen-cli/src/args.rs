//! CLI argument definitions using clap
//!
//! - testgen                       # Interactive story picker
//! - testgen "user story"          # Generate from the given story
//! - testgen -o MyTest.java "..."  # Custom output path
//! - testgen config/models          # Utility commands

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Default configuration file name used across all CLI commands.
pub const DEFAULT_CONFIG_FILE: &str = "testgen_config.json";

#[derive(Parser)]
#[command(name = "testgen")]
#[command(about = "Testgen - generate Playwright tests (Java) from user stories")]
#[command(
    long_about = r#"Testgen - generate Playwright tests (Java) from user stories

USAGE:
  testgen                        # Pick an example story or type your own
  testgen "your user story"      # Generate directly from the given story
  testgen --no-save "..."        # Print only, skip writing the file

UTILITY COMMANDS:
  testgen config init            # Create config file
  testgen config show            # Show current config
  testgen models                 # Show the model fallback order

For detailed help: testgen --help"#
)]
#[command(version)]
pub struct Cli {
    /// User story to generate a test for (omit for interactive picker)
    pub story: Option<String>,

    /// Path the generated test file is written to
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,

    /// Display the generated test without writing a file
    #[arg(long)]
    pub no_save: bool,

    /// Path to configuration file
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    pub config_file: String,

    /// Enable verbose output
    #[arg(long, short)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Manage configuration files
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Show the configured model identifiers in fallback order
    Models {
        /// Path to configuration file
        #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
        config_file: String,
    },
}

#[derive(Subcommand, Clone)]
pub enum ConfigAction {
    /// Display current configuration settings
    Show {
        /// Path to configuration file
        #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
        config_file: String,
    },

    /// Validate configuration file for errors
    Validate {
        /// Path to configuration file
        #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
        config_file: String,
    },

    /// Create a new configuration file with defaults
    Init {
        /// Path for the new configuration file
        #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
        config_file: String,

        /// Overwrite existing file without prompting
        #[arg(long)]
        force: bool,
    },
}
