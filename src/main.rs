// ABOUTME: Entry point for the stevedore CLI application.
// ABOUTME: Sets up tracing and dispatches to the scenario runner.

mod cli;

use clap::Parser;
use cli::{Cli, Commands};
use stevedore::report::{Output, OutputMode};
use stevedore::scenario;
use stevedore::types::SerialIssuer;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber based on verbose flag
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();

    match cli.command {
        Commands::Run { seed, json } => {
            let mut issuer = match seed {
                Some(seed) => SerialIssuer::seeded(seed),
                None => SerialIssuer::random(),
            };
            let mode = if json {
                OutputMode::Json
            } else {
                OutputMode::Text
            };
            scenario::run(&mut issuer, &Output::new(mode));
        }
    }
}
