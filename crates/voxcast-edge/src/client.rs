//! Edge read-aloud client implementing [`SynthesisClient`].
//!
//! `msedge-tts` exposes a blocking websocket client. Each job opens a fresh
//! connection on the blocking pool, so the Tokio workers never wait on the
//! network and no connection state is shared between jobs.

use std::time::Instant;

use async_trait::async_trait;
use msedge_tts::tts::SpeechConfig;
use msedge_tts::tts::client::connect;
use voxcast_core::{SynthesisClient, SynthesisError};

use crate::config::EdgeTtsConfig;
use crate::error::EdgeError;

/// Synthesis client backed by the Microsoft Edge read-aloud service.
#[derive(Debug, Clone)]
pub struct EdgeTtsClient {
    config: EdgeTtsConfig,
}

impl EdgeTtsClient {
    pub fn new(config: EdgeTtsConfig) -> Result<Self, EdgeError> {
        config.validate()?;
        Ok(Self { config })
    }
}

#[async_trait]
impl SynthesisClient for EdgeTtsClient {
    async fn synthesize(&self, text: &str, voice_id: &str) -> Result<Vec<u8>, SynthesisError> {
        let speech = self.config.speech_config(voice_id);
        let text = text.to_string();
        let started = Instant::now();

        tracing::debug!(
            target: "voxcast.edge",
            voice = voice_id,
            format = %self.config.audio_format,
            chars = text.chars().count(),
            "Requesting Edge synthesis"
        );

        let audio = tokio::task::spawn_blocking(move || synthesize_blocking(&text, &speech))
            .await
            .map_err(|e| EdgeError::Worker(e.to_string()))??;

        tracing::debug!(
            target: "voxcast.edge",
            voice = voice_id,
            bytes = audio.len(),
            elapsed_ms = started.elapsed().as_millis(),
            "Edge synthesis finished"
        );
        Ok(audio)
    }

    fn name(&self) -> &str {
        "edge"
    }
}

fn synthesize_blocking(text: &str, speech: &SpeechConfig) -> Result<Vec<u8>, EdgeError> {
    let mut client = connect().map_err(|e| EdgeError::Connect(e.to_string()))?;
    let audio = client
        .synthesize(text, speech)
        .map_err(|e| EdgeError::Synthesis(e.to_string()))?;
    Ok(audio.audio_bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_validates_config() {
        let bad = EdgeTtsConfig {
            audio_format: "ogg-24khz-16bit-mono-opus".into(),
            ..EdgeTtsConfig::default()
        };
        assert!(EdgeTtsClient::new(bad).is_err());

        let client = EdgeTtsClient::new(EdgeTtsConfig::default()).unwrap();
        assert_eq!(client.name(), "edge");
    }

    #[tokio::test]
    #[ignore = "requires network access to the Edge read-aloud service"]
    async fn synthesizes_spanish_sample() {
        let client = EdgeTtsClient::new(EdgeTtsConfig::default()).unwrap();
        let audio = client
            .synthesize("Hola, esto es una prueba.", "es-ES-ElviraNeural")
            .await
            .unwrap();
        assert!(!audio.is_empty());
    }
}
