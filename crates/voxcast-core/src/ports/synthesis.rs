//! Synthesis engine port: the boundary to the external text-to-speech service.
//!
//! # Design Rules
//!
//! - The engine is opaque: text and a voice id go in, MPEG bytes come out.
//! - No wire-protocol, authentication or codec types cross this boundary.
//! - Implementations make no ordering promises across overlapping calls;
//!   serialization is the job runner's responsibility.

use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

/// Errors returned by a [`SynthesisClient`].
#[derive(Debug, Clone, Error)]
pub enum SynthesisError {
    /// The engine could not be reached or failed mid-request.
    #[error("Engine error: {0}")]
    Engine(String),

    /// The engine refused the request (unknown voice, empty text, ...).
    #[error("Engine rejected request: {0}")]
    Rejected(String),

    /// The call did not finish within the configured bound.
    #[error("Timed out after {0:?}")]
    Timeout(Duration),

    /// The engine finished without returning any audio.
    #[error("No audio received from engine")]
    EmptyAudio,
}

/// Port trait for the external speech-synthesis engine.
///
/// Implemented by `EdgeTtsClient` in `voxcast-edge`; tests provide scripted fakes.
#[async_trait]
pub trait SynthesisClient: Send + Sync {
    /// Synthesize `text` with `voice_id`, returning MPEG audio bytes.
    async fn synthesize(&self, text: &str, voice_id: &str) -> Result<Vec<u8>, SynthesisError>;

    /// Short engine name for logs.
    fn name(&self) -> &str;
}
