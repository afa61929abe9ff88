//! Commands enum and per-command arguments.

use std::path::PathBuf;

use clap::{Args, Subcommand};
use voxcast_axum::bootstrap::{DEFAULT_HOST, DEFAULT_PORT};
use voxcast_core::{ConcurrencyPolicy, DEFAULT_MAX_TEXT_CHARS, DEFAULT_SYNTHESIS_TIMEOUT_SECS};

/// Available commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Start the web server
    Web(WebArgs),

    /// Print the voice catalog
    Voices {
        /// JSON voice catalog to load instead of the built-in one
        #[arg(long, env = "VOXCAST_VOICES_FILE")]
        voices_file: Option<PathBuf>,
    },

    /// Synthesize TEXT once per voice into voz_<n>_<voice>.mp3 files
    Say {
        /// Text to synthesize
        text: String,
        /// Voice id (repeatable)
        #[arg(long = "voice", value_name = "VOICE")]
        voices: Vec<String>,
        /// Directory for the generated files
        #[arg(long, default_value = ".")]
        out_dir: PathBuf,
    },

    /// Show resolved data and spool directories
    Paths,
}

/// Arguments for `voxcast web`.
#[derive(Args, Debug, Clone)]
pub struct WebArgs {
    /// Address to bind
    #[arg(long, env = "VOXCAST_HOST", default_value = DEFAULT_HOST)]
    pub host: String,

    /// Port to serve on
    #[arg(short, long, env = "VOXCAST_PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// What to do with a submit while a job runs: queue or reject
    #[arg(long, env = "VOXCAST_POLICY", default_value_t = ConcurrencyPolicy::Queue)]
    pub policy: ConcurrencyPolicy,

    /// Upper bound on one engine call, in seconds
    #[arg(long, env = "VOXCAST_TIMEOUT_SECS", default_value_t = DEFAULT_SYNTHESIS_TIMEOUT_SECS)]
    pub timeout_secs: u64,

    /// Maximum text length per request, in characters
    #[arg(long, env = "VOXCAST_MAX_TEXT_CHARS", default_value_t = DEFAULT_MAX_TEXT_CHARS)]
    pub max_text_chars: usize,

    /// JSON voice catalog to load instead of the built-in one
    #[arg(long, env = "VOXCAST_VOICES_FILE")]
    pub voices_file: Option<PathBuf>,

    /// Directory for the spooled tts_temp.mp3 (default: <data root>/spool)
    #[arg(long, env = "VOXCAST_SPOOL_DIR", conflicts_with = "no_spool")]
    pub spool_dir: Option<PathBuf>,

    /// Keep the current audio in memory only
    #[arg(long)]
    pub no_spool: bool,

    /// Allowed CORS origin (repeatable; default allows all)
    #[arg(long = "allow-origin", value_name = "ORIGIN")]
    pub allow_origin: Vec<String>,
}
