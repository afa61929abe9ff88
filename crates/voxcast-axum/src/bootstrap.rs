//! Axum server bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the web adapter. The Edge client, voice catalog, artifact store and
//! job runner are all instantiated here.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::net::TcpListener;
use tracing::{info, warn};
use voxcast_core::{
    ArtifactStore, Settings, SynthesisClient, SynthesisJobRunner, VoiceCatalog, default_spool_dir,
    ensure_directory, validate_settings,
};
use voxcast_edge::{EdgeTtsClient, EdgeTtsConfig};

/// Default listen address.
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default listen port.
pub const DEFAULT_PORT: u16 = 8050;

/// CORS configuration for the web server.
#[derive(Debug, Clone, Default)]
pub enum CorsConfig {
    /// Allow all origins (development mode).
    #[default]
    AllowAll,
    /// Allow specific origins (production mode).
    AllowOrigins(Vec<String>),
}

/// Server configuration for the Axum adapter.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Pipeline settings (policy, timeout, limits, delivery path).
    pub settings: Settings,
    /// Directory mirroring the current artifact; `None` keeps it in memory only.
    pub spool_dir: Option<PathBuf>,
    /// JSON voice catalog; `None` uses the built-in table.
    pub voices_file: Option<PathBuf>,
    pub edge: EdgeTtsConfig,
    pub cors: CorsConfig,
}

impl ServerConfig {
    /// Create config with the default spool directory.
    pub fn with_defaults() -> Result<Self> {
        Ok(Self {
            spool_dir: Some(default_spool_dir()?),
            ..Self::in_memory()
        })
    }

    /// Config that never touches the filesystem.
    pub fn in_memory() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            settings: Settings::default(),
            spool_dir: None,
            voices_file: None,
            edge: EdgeTtsConfig::default(),
            cors: CorsConfig::default(),
        }
    }

    /// Set CORS to allow specific origins.
    #[must_use]
    pub fn with_allowed_origins(mut self, origins: Vec<String>) -> Self {
        self.cors = CorsConfig::AllowOrigins(origins);
        self
    }
}

/// Application context for the Axum adapter.
pub struct AxumContext {
    pub runner: Arc<SynthesisJobRunner>,
    pub catalog: Arc<VoiceCatalog>,
    pub store: Arc<ArtifactStore>,
    pub settings: Settings,
}

impl AxumContext {
    /// Build the context around an assembled runner.
    pub fn from_runner(runner: SynthesisJobRunner) -> Self {
        Self {
            catalog: Arc::clone(runner.catalog()),
            store: Arc::clone(runner.store()),
            settings: runner.settings().clone(),
            runner: Arc::new(runner),
        }
    }
}

/// Bootstrap the pipeline with the Edge read-aloud engine.
pub fn bootstrap(config: &ServerConfig) -> Result<AxumContext> {
    let client = EdgeTtsClient::new(config.edge.clone()).context("Invalid Edge configuration")?;
    bootstrap_with_client(config, Arc::new(client))
}

/// Bootstrap the pipeline around an injected synthesis client.
pub fn bootstrap_with_client(
    config: &ServerConfig,
    client: Arc<dyn SynthesisClient>,
) -> Result<AxumContext> {
    validate_settings(&config.settings)?;

    let catalog = match &config.voices_file {
        Some(path) => VoiceCatalog::load(path)?,
        None => VoiceCatalog::builtin(),
    };

    let store = match &config.spool_dir {
        Some(dir) => {
            ensure_directory(dir)?;
            ArtifactStore::with_spool_dir(dir)
        }
        None => ArtifactStore::in_memory(),
    };

    info!(
        target: "voxcast.paths",
        spool_file = ?store.spool_path(),
        voices_file = ?config.voices_file,
        "Axum bootstrap resolved paths"
    );
    info!(
        target: "voxcast.http",
        engine = client.name(),
        voices = catalog.len(),
        default_voice = catalog.default_voice(),
        policy = %config.settings.policy,
        timeout_secs = config.settings.synthesis_timeout_secs,
        "Synthesis pipeline ready"
    );

    let runner = SynthesisJobRunner::new(
        client,
        Arc::new(catalog),
        Arc::new(store),
        config.settings.clone(),
    );
    Ok(AxumContext::from_runner(runner))
}

/// Start the web server with the Edge engine.
pub async fn start_server(config: ServerConfig) -> Result<()> {
    let ctx = bootstrap(&config)?;
    serve(ctx, &config).await
}

/// Serve an assembled context until Ctrl-C, then drop the artifact.
pub async fn serve(ctx: AxumContext, config: &ServerConfig) -> Result<()> {
    let store = Arc::clone(&ctx.store);
    let app = crate::routes::create_router(ctx, &config.cors);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    info!("voxcast web server listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    store.clear().await;
    info!("voxcast web server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for Ctrl-C, shutdown only by process exit: {}", e);
        std::future::pending::<()>().await;
    }
}
