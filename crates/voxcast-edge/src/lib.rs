//! Edge read-aloud adapter for the [`SynthesisClient`](voxcast_core::SynthesisClient) port.
//!
//! The websocket protocol, token handling and SSML framing live in the
//! `msedge-tts` crate; this crate only maps configuration and errors.
#![deny(unused_crate_dependencies)]

mod client;
mod config;
mod error;

pub use client::EdgeTtsClient;
pub use config::{DEFAULT_AUDIO_FORMAT, EdgeTtsConfig};
pub use error::EdgeError;
