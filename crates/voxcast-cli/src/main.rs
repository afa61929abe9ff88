//! CLI entry point - the composition root.

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use voxcast_cli::{Cli, Commands, handlers};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables before clap reads env fallbacks
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    match command {
        Commands::Web(args) => handlers::web::execute(args).await?,
        Commands::Voices { voices_file } => handlers::voices::execute(voices_file.as_deref())?,
        Commands::Say {
            text,
            voices,
            out_dir,
        } => handlers::say::execute(&text, voices, &out_dir).await?,
        Commands::Paths => handlers::paths::execute()?,
    }

    Ok(())
}
