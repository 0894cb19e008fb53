// ABOUTME: Command-line interface definition using clap derive macros.
// ABOUTME: Defines the subcommands and global flags.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "stevedore")]
#[command(about = "Container-fleet loading simulation")]
#[command(version)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the scripted fleet scenario
    Run {
        /// Seed the serial-number source for reproducible runs
        #[arg(long)]
        seed: Option<u64>,

        /// Emit JSON lines instead of text
        #[arg(long)]
        json: bool,
    },
}
