//! Synthesis job request, outcome and error types.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::artifact::VersionToken;
use crate::ports::SynthesisError;

/// A user-triggered synthesis request. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SynthesisRequest {
    pub text: String,
    pub voice_id: String,
}

impl SynthesisRequest {
    pub fn new(text: impl Into<String>, voice_id: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            voice_id: voice_id.into(),
        }
    }
}

/// Result of a successful job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobOutcome {
    /// URL serving the new artifact, with the version as cache buster.
    pub delivery_url: String,
    pub version: VersionToken,
    /// Size of the committed artifact in bytes.
    pub byte_len: usize,
    pub voice_id: String,
}

/// Stable error discriminant exposed to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum JobErrorKind {
    InvalidInput,
    Busy,
    SynthesisFailed,
    Storage,
}

impl JobErrorKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InvalidInput => "invalidInput",
            Self::Busy => "busy",
            Self::SynthesisFailed => "synthesisFailed",
            Self::Storage => "storage",
        }
    }
}

/// Why a job failed. None of these mutate the artifact store.
#[derive(Debug, Error)]
pub enum JobError {
    #[error("Text is empty")]
    EmptyText,

    #[error("Text is too long: {len} characters (limit {max})")]
    TextTooLong { len: usize, max: usize },

    #[error("Unknown voice '{0}'")]
    UnknownVoice(String),

    #[error("A synthesis job is already in progress")]
    Busy,

    #[error("Synthesis failed: {0}")]
    SynthesisFailed(#[source] SynthesisError),

    #[error("Failed to store audio: {0}")]
    Storage(String),
}

impl JobError {
    pub const fn kind(&self) -> JobErrorKind {
        match self {
            Self::EmptyText | Self::TextTooLong { .. } | Self::UnknownVoice(_) => {
                JobErrorKind::InvalidInput
            }
            Self::Busy => JobErrorKind::Busy,
            Self::SynthesisFailed(_) => JobErrorKind::SynthesisFailed,
            Self::Storage(_) => JobErrorKind::Storage,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn error_kinds() {
        assert_eq!(JobError::EmptyText.kind(), JobErrorKind::InvalidInput);
        assert_eq!(
            JobError::UnknownVoice("x".into()).kind(),
            JobErrorKind::InvalidInput
        );
        assert_eq!(
            JobError::TextTooLong { len: 9, max: 3 }.kind(),
            JobErrorKind::InvalidInput
        );
        assert_eq!(JobError::Busy.kind(), JobErrorKind::Busy);
        assert_eq!(
            JobError::SynthesisFailed(SynthesisError::Timeout(Duration::from_secs(1))).kind(),
            JobErrorKind::SynthesisFailed
        );
        assert_eq!(
            JobError::SynthesisFailed(SynthesisError::EmptyAudio).kind(),
            JobErrorKind::SynthesisFailed
        );
        assert_eq!(JobError::Storage("disk".into()).kind(), JobErrorKind::Storage);
    }

    #[test]
    fn kind_serializes_camel_case() {
        let json = serde_json::to_string(&JobErrorKind::SynthesisFailed).unwrap();
        assert_eq!(json, "\"synthesisFailed\"");
        assert_eq!(JobErrorKind::InvalidInput.as_str(), "invalidInput");
    }
}
