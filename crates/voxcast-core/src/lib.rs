//! Core of voxcast: voice catalog, synthesis port, job runner and the
//! single-artifact store behind the delivery endpoint.
//!
//! Adapters (`voxcast-edge`, `voxcast-axum`, `voxcast-cli`) depend on this
//! crate; it depends on none of them.
#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod paths;
pub mod ports;
pub mod services;
pub mod settings;

// Re-export commonly used types for convenience
pub use domain::{
    Artifact, CatalogError, DEFAULT_VOICE_ID, DEMO_TEXT, JobError, JobErrorKind, JobOutcome,
    MPEG_MIME_TYPE, SelectorOption, SynthesisRequest, VersionToken, VoiceCatalog, VoiceEntry,
    VoiceGroup,
};
pub use paths::{
    DATA_DIR_ENV, PathError, data_root, default_spool_dir, ensure_directory, normalize_user_path,
    verify_writable,
};
pub use ports::{SynthesisClient, SynthesisError};
pub use services::{ArtifactStore, JobRunnerStatus, SPOOL_FILE_NAME, StoreError, SynthesisJobRunner};
pub use settings::{
    ConcurrencyPolicy, DEFAULT_DELIVERY_PATH, DEFAULT_DOWNLOAD_FILENAME, DEFAULT_MAX_TEXT_CHARS,
    DEFAULT_SYNTHESIS_TIMEOUT_SECS, Settings, SettingsError, validate_settings,
};
