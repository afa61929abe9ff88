//! Pipeline settings and validation.
//!
//! Pure domain types with no infrastructure dependencies. Adapters build a
//! [`Settings`] from their own configuration sources (CLI flags, env vars).

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Default bound on a single engine call.
pub const DEFAULT_SYNTHESIS_TIMEOUT_SECS: u64 = 60;

/// Default maximum text length accepted per job.
pub const DEFAULT_MAX_TEXT_CHARS: usize = 5000;

/// Default path of the delivery endpoint.
pub const DEFAULT_DELIVERY_PATH: &str = "/download";

/// File name suggested to the browser for downloads.
pub const DEFAULT_DOWNLOAD_FILENAME: &str = "tts.mp3";

/// What to do with a submit that arrives while a job is in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConcurrencyPolicy {
    /// Wait behind the active job, first come first served.
    #[default]
    Queue,
    /// Fail immediately with `Busy`.
    Reject,
}

impl fmt::Display for ConcurrencyPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Queue => write!(f, "queue"),
            Self::Reject => write!(f, "reject"),
        }
    }
}

impl FromStr for ConcurrencyPolicy {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "queue" => Ok(Self::Queue),
            "reject" => Ok(Self::Reject),
            other => Err(SettingsError::UnknownPolicy(other.to_string())),
        }
    }
}

/// Settings for the synthesis pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub policy: ConcurrencyPolicy,
    pub synthesis_timeout_secs: u64,
    pub max_text_chars: usize,
    /// Path component of delivery URLs (e.g. `/download`).
    pub delivery_path: String,
    /// Attachment file name for downloads.
    pub download_filename: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            policy: ConcurrencyPolicy::Queue,
            synthesis_timeout_secs: DEFAULT_SYNTHESIS_TIMEOUT_SECS,
            max_text_chars: DEFAULT_MAX_TEXT_CHARS,
            delivery_path: DEFAULT_DELIVERY_PATH.to_string(),
            download_filename: DEFAULT_DOWNLOAD_FILENAME.to_string(),
        }
    }
}

impl Settings {
    pub const fn synthesis_timeout(&self) -> Duration {
        Duration::from_secs(self.synthesis_timeout_secs)
    }

    /// Delivery URL for a given version token.
    pub fn delivery_url(&self, version: impl fmt::Display) -> String {
        format!("{}?t={}", self.delivery_path, version)
    }
}

/// Settings validation error.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SettingsError {
    #[error("Synthesis timeout must be between 1 and 600 seconds, got {0}")]
    InvalidTimeout(u64),

    #[error("Max text length must be between 1 and 100000 characters, got {0}")]
    InvalidMaxTextChars(usize),

    #[error("Delivery path must start with '/' and be a plain path, got '{0}'")]
    InvalidDeliveryPath(String),

    #[error("Delivery path '{0}' collides with a built-in route")]
    ReservedDeliveryPath(String),

    #[error("Download file name cannot be empty or contain quotes or path separators")]
    InvalidDownloadFilename,

    #[error("Unknown concurrency policy '{0}' (expected 'queue' or 'reject')")]
    UnknownPolicy(String),
}

/// Routes the HTTP layer mounts itself. `/api` covers everything below it.
const RESERVED_ROUTES: &[&str] = &["/health", "/api"];

fn check_delivery_path(path: &str) -> Result<(), SettingsError> {
    let plain = path.len() > 1
        && path.starts_with('/')
        && !path.contains("//")
        && !path.contains(['?', '#', ':', '*', '{', '}'])
        && !path.chars().any(char::is_whitespace);
    if !plain {
        return Err(SettingsError::InvalidDeliveryPath(path.to_string()));
    }

    let reserved = RESERVED_ROUTES.iter().any(|route| {
        path.strip_prefix(route)
            .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
    });
    if reserved {
        return Err(SettingsError::ReservedDeliveryPath(path.to_string()));
    }
    Ok(())
}

/// Validate settings values.
pub fn validate_settings(settings: &Settings) -> Result<(), SettingsError> {
    if !(1..=600).contains(&settings.synthesis_timeout_secs) {
        return Err(SettingsError::InvalidTimeout(
            settings.synthesis_timeout_secs,
        ));
    }

    if !(1..=100_000).contains(&settings.max_text_chars) {
        return Err(SettingsError::InvalidMaxTextChars(settings.max_text_chars));
    }

    check_delivery_path(&settings.delivery_path)?;

    let name = settings.download_filename.trim();
    if name.is_empty() || name.contains(['"', '/', '\\']) {
        return Err(SettingsError::InvalidDownloadFilename);
    }

    Ok(())
}
