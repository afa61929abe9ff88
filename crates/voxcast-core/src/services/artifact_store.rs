//! Artifact store - owns the single current audio artifact.
//!
//! Writers stage the payload where no reader can see it, rename it onto the
//! visible spool file, and only then swap the in-memory `Arc`. Readers clone
//! the `Arc` under a read lock held for the pointer copy only, so they observe
//! either the previous complete artifact or the new complete one.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Arc, PoisonError, RwLock};

use bytes::Bytes;
use chrono::Utc;
use thiserror::Error;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::domain::{Artifact, VersionToken};

/// Name of the visible spool file.
pub const SPOOL_FILE_NAME: &str = "tts_temp.mp3";

/// Errors raised while committing an artifact.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Failed to write {path}: {reason}")]
    Write { path: PathBuf, reason: String },

    #[error("Failed to publish {path}: {reason}")]
    Publish { path: PathBuf, reason: String },
}

/// On-disk mirror of the current artifact.
#[derive(Debug)]
struct Spool {
    dir: PathBuf,
}

impl Spool {
    fn visible_path(&self) -> PathBuf {
        self.dir.join(SPOOL_FILE_NAME)
    }

    fn staging_path(&self, version: VersionToken) -> PathBuf {
        self.dir
            .join(format!(".{SPOOL_FILE_NAME}.{version}.partial"))
    }

    /// Write to a staging file, then rename it over the visible file.
    async fn publish(&self, version: VersionToken, bytes: &[u8]) -> Result<(), StoreError> {
        let staging = self.staging_path(version);
        let visible = self.visible_path();

        if let Err(e) = tokio::fs::write(&staging, bytes).await {
            remove_quietly(&staging).await;
            return Err(StoreError::Write {
                path: staging,
                reason: e.to_string(),
            });
        }

        if let Err(e) = tokio::fs::rename(&staging, &visible).await {
            remove_quietly(&staging).await;
            return Err(StoreError::Publish {
                path: visible,
                reason: e.to_string(),
            });
        }

        debug!(
            target: "voxcast.store",
            path = %visible.display(),
            version = %version,
            "Spool file published"
        );
        Ok(())
    }
}

async fn remove_quietly(path: &Path) {
    match tokio::fs::remove_file(path).await {
        Ok(()) => {}
        Err(e) if e.kind() == ErrorKind::NotFound => {}
        Err(e) => warn!(
            target: "voxcast.store",
            path = %path.display(),
            error = %e,
            "Failed to remove spool file"
        ),
    }
}

/// Holds exactly one live [`Artifact`].
#[derive(Debug)]
pub struct ArtifactStore {
    current: RwLock<Option<Arc<Artifact>>>,
    /// Serializes writers; holds the last issued version.
    writer: Mutex<u64>,
    spool: Option<Spool>,
}

impl ArtifactStore {
    /// Store that keeps the artifact in memory only.
    pub fn in_memory() -> Self {
        Self {
            current: RwLock::new(None),
            writer: Mutex::new(0),
            spool: None,
        }
    }

    /// Store that also mirrors the artifact to `dir/tts_temp.mp3`.
    ///
    /// The directory must already exist.
    pub fn with_spool_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            spool: Some(Spool { dir: dir.into() }),
            ..Self::in_memory()
        }
    }

    /// Path of the visible spool file, if spooling is enabled.
    pub fn spool_path(&self) -> Option<PathBuf> {
        self.spool.as_ref().map(Spool::visible_path)
    }

    /// Replace the current artifact, returning the new version token.
    ///
    /// On error the previous artifact stays current.
    pub async fn replace(
        &self,
        bytes: impl Into<Bytes>,
        mime_type: &str,
        voice_id: &str,
    ) -> Result<VersionToken, StoreError> {
        let mut last_version = self.writer.lock().await;
        let version = next_version(*last_version, now_millis());
        let bytes: Bytes = bytes.into();

        if let Some(spool) = &self.spool {
            spool.publish(version, &bytes).await?;
        }

        let artifact = Arc::new(Artifact {
            bytes,
            version,
            mime_type: mime_type.to_string(),
            voice_id: voice_id.to_string(),
            created_at: Utc::now(),
        });
        let size = artifact.len();

        let previous = {
            let mut slot = self.current.write().unwrap_or_else(PoisonError::into_inner);
            slot.replace(artifact)
        };
        *last_version = version.get();
        drop(previous);

        info!(
            target: "voxcast.store",
            version = %version,
            bytes = size,
            voice = voice_id,
            "Artifact replaced"
        );
        Ok(version)
    }

    /// The current artifact, or `None` if nothing was produced yet.
    pub fn current(&self) -> Option<Arc<Artifact>> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn current_version(&self) -> Option<VersionToken> {
        self.current().map(|a| a.version)
    }

    /// Drop the current artifact and remove the spool file.
    pub async fn clear(&self) {
        let _writer = self.writer.lock().await;
        self.current
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        if let Some(path) = self.spool_path() {
            remove_quietly(&path).await;
        }
    }
}

impl Default for ArtifactStore {
    fn default() -> Self {
        Self::in_memory()
    }
}

fn now_millis() -> u64 {
    u64::try_from(Utc::now().timestamp_millis()).unwrap_or(0)
}

/// Next token: wall-clock milliseconds, bumped past `last` when the clock has
/// not moved or went backwards.
fn next_version(last: u64, now_ms: u64) -> VersionToken {
    VersionToken::new(now_ms.max(last.saturating_add(1)))
}
