//! Root CLI parser and global options.

use clap::Parser;

use crate::commands::Commands;

/// Text-to-speech web tool backed by the Edge read-aloud engine.
#[derive(Parser)]
#[command(name = "voxcast")]
#[command(about = "Synthesize speech and serve it to the browser")]
#[command(version)]
pub struct Cli {
    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
