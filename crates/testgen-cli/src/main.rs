//! Testgen CLI application
//!
//! Generates an automated Playwright test (Java) from a natural-language
//! user story by calling an OpenAI-compatible chat-completions endpoint
//! with an ordered model-fallback list.
//!
//! # Usage
//!
//! ```bash
//! testgen                        # interactive story picker
//! testgen "As a user, I want to log in so that I can see my dashboard."
//! testgen config init            # create a default config file
//! ```

mod app;
mod args;
mod commands;
mod console;

use crate::console::CliConsole;
use clap::Parser;
use testgen_core::error::TestGenResult;

// Re-export for external use
pub use args::{Cli, Commands, ConfigAction};

#[tokio::main]
async fn main() {
    // Initialize logging with environment-based filtering
    // Set RUST_LOG=debug for verbose logging; warnings are shown by default
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let verbose = cli.verbose;

    if let Err(error) = route(cli).await {
        CliConsole::new(verbose).error(&error.to_string());
        std::process::exit(1);
    }
}

async fn route(mut cli: Cli) -> TestGenResult<()> {
    let console = CliConsole::new(cli.verbose);

    match cli.command.take() {
        Some(Commands::Config { action }) => commands::handle_config(action, &console),
        Some(Commands::Models { config_file }) => commands::handle_models(&config_file, &console),
        None => app::run(cli).await,
    }
}
