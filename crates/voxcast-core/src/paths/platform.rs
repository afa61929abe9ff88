//! Data directory resolution.

use std::env;
use std::path::PathBuf;

use super::error::PathError;

/// Environment variable overriding the data root.
pub const DATA_DIR_ENV: &str = "VOXCAST_DATA_DIR";

/// Name of the spool directory under the data root.
const SPOOL_DIR_NAME: &str = "spool";

/// Get the root directory for application data.
///
/// Resolution order:
/// 1. `VOXCAST_DATA_DIR` environment variable (highest priority)
/// 2. System data directory (e.g., `~/.local/share/voxcast`)
///
/// The directory is not created here; see [`super::ensure_directory`].
pub fn data_root() -> Result<PathBuf, PathError> {
    if let Ok(path) = env::var(DATA_DIR_ENV) {
        return normalize_user_path(&path);
    }

    let data_dir = dirs::data_local_dir().ok_or(PathError::NoDataDir)?;
    Ok(data_dir.join("voxcast"))
}

/// Default directory holding the current audio artifact.
pub fn default_spool_dir() -> Result<PathBuf, PathError> {
    Ok(data_root()?.join(SPOOL_DIR_NAME))
}

/// Normalize a user-provided path, expanding `~` and making it absolute.
pub fn normalize_user_path(raw: &str) -> Result<PathBuf, PathError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(PathError::EmptyPath);
    }

    let expanded = if trimmed.starts_with("~/") || trimmed == "~" {
        let home = dirs::home_dir().ok_or(PathError::NoHomeDir)?;
        if trimmed == "~" {
            home
        } else {
            home.join(trimmed.trim_start_matches("~/"))
        }
    } else {
        PathBuf::from(trimmed)
    };

    if expanded.is_absolute() {
        Ok(expanded)
    } else {
        env::current_dir()
            .map(|cwd| cwd.join(expanded))
            .map_err(|e| PathError::CurrentDir(e.to_string()))
    }
}
