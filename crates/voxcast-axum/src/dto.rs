//! Response bodies for the JSON API.

use serde::Serialize;
use voxcast_core::{DEMO_TEXT, JobOutcome, VersionToken, VoiceCatalog};

/// Successful `POST /api/synthesize` body.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SynthesizeResponse {
    pub success: bool,
    /// Cache-busting URL for both the player and the download link.
    pub delivery_url: String,
    pub version: VersionToken,
    pub bytes: usize,
    pub voice_id: String,
}

impl From<JobOutcome> for SynthesizeResponse {
    fn from(outcome: JobOutcome) -> Self {
        Self {
            success: true,
            delivery_url: outcome.delivery_url,
            version: outcome.version,
            bytes: outcome.byte_len,
            voice_id: outcome.voice_id,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct VoiceDto {
    pub id: String,
    pub label: String,
}

#[derive(Debug, Serialize)]
pub struct VoiceGroupDto {
    pub name: String,
    pub voices: Vec<VoiceDto>,
}

/// `GET /api/voices` body: the grouped catalog in configured order.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VoicesResponse {
    pub default_voice: String,
    /// Sample sentence a client can prefill its text box with.
    pub demo_text: String,
    pub groups: Vec<VoiceGroupDto>,
}

impl From<&VoiceCatalog> for VoicesResponse {
    fn from(catalog: &VoiceCatalog) -> Self {
        Self {
            default_voice: catalog.default_voice().to_string(),
            demo_text: DEMO_TEXT.to_string(),
            groups: catalog
                .groups()
                .iter()
                .map(|group| VoiceGroupDto {
                    name: group.name.clone(),
                    voices: group
                        .voices
                        .iter()
                        .map(|voice| VoiceDto {
                            id: voice.id.clone(),
                            label: voice.display_label.clone(),
                        })
                        .collect(),
                })
                .collect(),
        }
    }
}
