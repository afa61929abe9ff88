//! Edge adapter error types.

use voxcast_core::SynthesisError;

/// Errors raised by the Edge adapter.
#[derive(Debug, thiserror::Error)]
pub enum EdgeError {
    /// Websocket handshake with the read-aloud service failed.
    #[error("Failed to connect to Edge read-aloud service: {0}")]
    Connect(String),

    /// The service dropped or refused the synthesis request.
    #[error("Edge synthesis failed: {0}")]
    Synthesis(String),

    /// The blocking worker panicked or was cancelled.
    #[error("Synthesis worker failed: {0}")]
    Worker(String),

    #[error("Invalid Edge configuration: {0}")]
    InvalidConfig(String),
}

impl From<EdgeError> for SynthesisError {
    fn from(err: EdgeError) -> Self {
        match err {
            EdgeError::InvalidConfig(_) => Self::Rejected(err.to_string()),
            EdgeError::Connect(_) | EdgeError::Synthesis(_) | EdgeError::Worker(_) => {
                Self::Engine(err.to_string())
            }
        }
    }
}
