//! The synthesized audio artifact served to the browser.

use std::fmt;

use bytes::Bytes;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// MIME type of every artifact the pipeline produces.
pub const MPEG_MIME_TYPE: &str = "audio/mpeg";

/// Monotonically increasing marker identifying one artifact revision.
///
/// Used as the cache-busting `t` query parameter on delivery URLs, so two
/// different artifacts never share a URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VersionToken(u64);

impl VersionToken {
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for VersionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One complete synthesized payload.
///
/// Artifacts are never mutated after construction; the store swaps whole
/// `Arc<Artifact>` values. `bytes` is reference counted, so handing out
/// the body or a slice of it never copies the payload.
#[derive(Debug, Clone)]
pub struct Artifact {
    pub bytes: Bytes,
    pub version: VersionToken,
    pub mime_type: String,
    /// Voice that produced the audio.
    pub voice_id: String,
    pub created_at: DateTime<Utc>,
}

impl Artifact {
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Strong `ETag` value for this revision.
    pub fn etag(&self) -> String {
        format!("\"{}\"", self.version)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn artifact(bytes: &'static [u8]) -> Artifact {
        Artifact {
            bytes: Bytes::from_static(bytes),
            version: VersionToken::new(7),
            mime_type: MPEG_MIME_TYPE.to_string(),
            voice_id: "es-ES-ElviraNeural".to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn body_clones_and_slices_share_the_payload() {
        let artifact = artifact(b"ID3 audio frames");
        let body = artifact.bytes.clone();
        let head = artifact.bytes.slice(0..3);

        assert_eq!(body.as_ptr(), artifact.bytes.as_ptr());
        assert_eq!(head.as_ptr(), artifact.bytes.as_ptr());
        assert_eq!(&head[..], b"ID3");
    }

    #[test]
    fn etag_quotes_the_version() {
        assert_eq!(artifact(b"x").etag(), "\"7\"");
        assert_eq!(artifact(b"x").len(), 1);
    }
}
