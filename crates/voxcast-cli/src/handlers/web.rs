//! `voxcast web` handler.

use anyhow::Result;
use voxcast_axum::{CorsConfig, ServerConfig, start_server};
use voxcast_core::{Settings, default_spool_dir};

use crate::commands::WebArgs;

/// Translate CLI arguments into a server configuration.
pub fn server_config(args: WebArgs) -> Result<ServerConfig> {
    let spool_dir = if args.no_spool {
        None
    } else {
        match args.spool_dir {
            Some(dir) => Some(dir),
            None => Some(default_spool_dir()?),
        }
    };

    let cors = if args.allow_origin.is_empty() {
        CorsConfig::AllowAll
    } else {
        CorsConfig::AllowOrigins(args.allow_origin)
    };

    Ok(ServerConfig {
        host: args.host,
        port: args.port,
        settings: Settings {
            policy: args.policy,
            synthesis_timeout_secs: args.timeout_secs,
            max_text_chars: args.max_text_chars,
            ..Settings::default()
        },
        spool_dir,
        voices_file: args.voices_file,
        cors,
        ..ServerConfig::in_memory()
    })
}

pub async fn execute(args: WebArgs) -> Result<()> {
    let config = server_config(args)?;
    start_server(config).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    use crate::{Cli, Commands};

    fn web_args(argv: &[&str]) -> WebArgs {
        let mut full = vec!["voxcast", "web"];
        full.extend_from_slice(argv);
        match Cli::parse_from(full).command {
            Some(Commands::Web(args)) => args,
            _ => panic!("expected web command"),
        }
    }

    #[test]
    fn no_spool_keeps_audio_in_memory() {
        let config = server_config(web_args(&["--no-spool"])).unwrap();
        assert!(config.spool_dir.is_none());
    }

    #[test]
    fn explicit_spool_dir_is_used() {
        let dir = tempfile::tempdir().unwrap();
        let config =
            server_config(web_args(&["--spool-dir", dir.path().to_str().unwrap()])).unwrap();
        assert_eq!(config.spool_dir.as_deref(), Some(dir.path()));
    }

    #[test]
    fn origins_switch_cors_mode() {
        let config = server_config(web_args(&["--no-spool", "--allow-origin", "http://a"])).unwrap();
        assert!(matches!(config.cors, CorsConfig::AllowOrigins(ref o) if o == &["http://a"]));

        let config = server_config(web_args(&["--no-spool"])).unwrap();
        assert!(matches!(config.cors, CorsConfig::AllowAll));
    }

    #[test]
    fn pipeline_settings_come_from_flags() {
        let config = server_config(web_args(&[
            "--no-spool",
            "--timeout-secs",
            "30",
            "--max-text-chars",
            "200",
        ]))
        .unwrap();
        assert_eq!(config.settings.synthesis_timeout_secs, 30);
        assert_eq!(config.settings.max_text_chars, 200);
        assert_eq!(config.settings.delivery_path, "/download");
    }
}
