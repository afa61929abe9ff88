//! Edge synthesis configuration.

use msedge_tts::tts::SpeechConfig;
use serde::{Deserialize, Serialize};

use crate::error::EdgeError;

/// MP3 output format requested from the service.
pub const DEFAULT_AUDIO_FORMAT: &str = "audio-24khz-48kbitrate-mono-mp3";

/// Prosody and output format applied to every request.
///
/// `rate`, `pitch` and `volume` are relative adjustments in percent, with
/// `0` meaning the voice's default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EdgeTtsConfig {
    pub audio_format: String,
    pub rate: i32,
    pub pitch: i32,
    pub volume: i32,
}

impl Default for EdgeTtsConfig {
    fn default() -> Self {
        Self {
            audio_format: DEFAULT_AUDIO_FORMAT.to_string(),
            rate: 0,
            pitch: 0,
            volume: 0,
        }
    }
}

impl EdgeTtsConfig {
    /// Check the format is an MP3 variant and adjustments are in range.
    pub fn validate(&self) -> Result<(), EdgeError> {
        let format = self.audio_format.trim();
        if format.is_empty() || !format.ends_with("-mp3") {
            return Err(EdgeError::InvalidConfig(format!(
                "audio format '{}' is not an MP3 format",
                self.audio_format
            )));
        }

        for (name, value) in [("rate", self.rate), ("pitch", self.pitch), ("volume", self.volume)] {
            if !(-100..=200).contains(&value) {
                return Err(EdgeError::InvalidConfig(format!(
                    "{name} must be between -100 and 200 percent, got {value}"
                )));
            }
        }

        Ok(())
    }

    /// Request configuration for one voice.
    pub(crate) fn speech_config(&self, voice_id: &str) -> SpeechConfig {
        SpeechConfig {
            voice_name: voice_id.to_string(),
            audio_format: self.audio_format.clone(),
            pitch: self.pitch,
            rate: self.rate,
            volume: self.volume,
        }
    }
}
