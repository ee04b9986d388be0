//! CLI console utilities

use colored::*;
use console::Term;
use indicatif::{ProgressBar, ProgressStyle};

/// CLI console for formatted output
pub struct CliConsole {
    verbose: bool,
}

impl CliConsole {
    /// Create a new CLI console
    pub const fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    /// Print an info message
    pub fn info(&self, message: &str) {
        if self.verbose {
            println!("{} {}", "ℹ".blue().bold(), message);
        }
    }

    /// Print a success message
    pub fn success(&self, message: &str) {
        println!("{} {}", "✓".green().bold(), message.green());
    }

    /// Print a warning message
    pub fn warn(&self, message: &str) {
        println!("{} {}", "⚠".yellow().bold(), message.yellow());
    }

    /// Print an error message
    pub fn error(&self, message: &str) {
        eprintln!("{} {}", "✗".red().bold(), message.red());
    }

    /// Print a header
    pub fn print_header(&self, title: &str) {
        println!();
        println!("{}", title.bold().underline());
        println!("{}", "=".repeat(title.len()).dimmed());
    }

    /// Print the generated test code between dimmed rules
    pub fn print_code(&self, code: &str) {
        let width = (Term::stdout().size().1 as usize).min(80);
        println!("{}", "-".repeat(width).dimmed());
        println!("{}", code);
        println!("{}", "-".repeat(width).dimmed());
    }
}

/// Spinner shown while a request is in flight
pub struct RequestSpinner {
    bar: ProgressBar,
}

impl RequestSpinner {
    /// Start a spinner with the given message
    pub fn start(message: &str) -> Self {
        let bar = ProgressBar::new_spinner();
        bar.set_style(
            ProgressStyle::default_spinner()
                .tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ ")
                .template("{spinner:.blue} {msg}")
                .expect("Invalid progress template"),
        );
        bar.set_message(message.to_string());
        bar.enable_steady_tick(std::time::Duration::from_millis(100));
        Self { bar }
    }

    /// Print a warning above the spinner without disturbing it
    pub fn warn(&self, message: &str) {
        self.bar
            .println(format!("{} {}", "⚠".yellow().bold(), message.yellow()));
    }

    /// Stop the spinner and clear its line
    pub fn finish(self) {
        self.bar.finish_and_clear();
    }
}
