//! `voxcast say` handler: batch synthesis straight to files.
//!
//! Every voice gets its own engine call, all running concurrently. This path
//! does not go through the job runner or the artifact store.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Result, bail};
use voxcast_core::{
    DEFAULT_SYNTHESIS_TIMEOUT_SECS, SynthesisClient, SynthesisError, ensure_directory,
};
use voxcast_edge::{EdgeTtsClient, EdgeTtsConfig};

/// Voices used when none are given.
pub const DEFAULT_SAY_VOICES: &[&str] = &[
    "es-ES-ElviraNeural",
    "es-ES-AlvaroNeural",
    "es-ES-ManuelEsCUNeural",
];

/// Outcome for one voice.
#[derive(Debug)]
pub struct SayResult {
    pub voice: String,
    pub path: PathBuf,
    /// Bytes written, or why the voice failed.
    pub outcome: Result<usize, String>,
}

/// `voz_<n>_<voice>.mp3`, numbered from 1.
pub fn output_file_name(index: usize, voice: &str) -> String {
    format!("voz_{}_{voice}.mp3", index + 1)
}

/// Synthesize `text` with every voice concurrently; results keep input order.
pub async fn synthesize_all(
    client: Arc<dyn SynthesisClient>,
    text: &str,
    voices: &[String],
    out_dir: &Path,
    timeout: Duration,
) -> Vec<SayResult> {
    let handles: Vec<_> = voices
        .iter()
        .enumerate()
        .map(|(index, voice)| {
            let client = Arc::clone(&client);
            let text = text.to_string();
            let voice = voice.clone();
            let path = out_dir.join(output_file_name(index, &voice));
            let task_path = path.clone();
            let task_voice = voice.clone();
            let handle = tokio::spawn(async move {
                synthesize_one(client.as_ref(), &text, &task_voice, &task_path, timeout).await
            });
            (voice, path, handle)
        })
        .collect();

    let mut results = Vec::with_capacity(handles.len());
    for (voice, path, handle) in handles {
        let outcome = handle
            .await
            .unwrap_or_else(|e| Err(format!("task failed: {e}")));
        results.push(SayResult {
            voice,
            path,
            outcome,
        });
    }
    results
}

async fn synthesize_one(
    client: &dyn SynthesisClient,
    text: &str,
    voice: &str,
    path: &Path,
    timeout: Duration,
) -> Result<usize, String> {
    let audio = match tokio::time::timeout(timeout, client.synthesize(text, voice)).await {
        Ok(Ok(audio)) if audio.is_empty() => Err(SynthesisError::EmptyAudio),
        Ok(result) => result,
        Err(_) => Err(SynthesisError::Timeout(timeout)),
    }
    .map_err(|e| e.to_string())?;

    tokio::fs::write(path, &audio)
        .await
        .map_err(|e| format!("failed to write {}: {e}", path.display()))?;

    tracing::debug!(voice, path = %path.display(), bytes = audio.len(), "Wrote audio file");
    Ok(audio.len())
}

pub async fn execute(text: &str, voices: Vec<String>, out_dir: &Path) -> Result<()> {
    let text = text.trim();
    if text.is_empty() {
        bail!("Text is empty");
    }

    let voices = if voices.is_empty() {
        DEFAULT_SAY_VOICES.iter().map(ToString::to_string).collect()
    } else {
        voices
    };

    ensure_directory(out_dir)?;
    let client = Arc::new(EdgeTtsClient::new(EdgeTtsConfig::default())?);
    let timeout = Duration::from_secs(DEFAULT_SYNTHESIS_TIMEOUT_SECS);

    let results = synthesize_all(client, text, &voices, out_dir, timeout).await;

    let mut failed = 0;
    for result in &results {
        match &result.outcome {
            Ok(bytes) => println!("✓ {} -> {} ({bytes} bytes)", result.voice, result.path.display()),
            Err(reason) => {
                failed += 1;
                eprintln!("✗ {}: {reason}", result.voice);
            }
        }
    }

    if failed > 0 {
        bail!("{failed} of {} voices failed", results.len());
    }
    println!("{} MP3 files created", results.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    /// Fails for voices containing "Broken", returns the voice id otherwise.
    struct EchoEngine;

    #[async_trait]
    impl SynthesisClient for EchoEngine {
        async fn synthesize(&self, _text: &str, voice_id: &str) -> Result<Vec<u8>, SynthesisError> {
            if voice_id.contains("Broken") {
                return Err(SynthesisError::Rejected(format!("no such voice {voice_id}")));
            }
            Ok(voice_id.as_bytes().to_vec())
        }

        fn name(&self) -> &str {
            "echo"
        }
    }

    #[test]
    fn file_names_are_numbered_from_one() {
        assert_eq!(
            output_file_name(0, "es-ES-ElviraNeural"),
            "voz_1_es-ES-ElviraNeural.mp3"
        );
        assert_eq!(output_file_name(2, "x"), "voz_3_x.mp3");
    }

    #[tokio::test]
    async fn writes_one_file_per_voice_and_reports_failures() {
        let dir = tempfile::tempdir().unwrap();
        let voices = vec![
            "es-ES-ElviraNeural".to_string(),
            "es-ES-BrokenNeural".to_string(),
            "es-ES-AlvaroNeural".to_string(),
        ];

        let results = synthesize_all(
            Arc::new(EchoEngine),
            "Hola",
            &voices,
            dir.path(),
            Duration::from_secs(5),
        )
        .await;

        assert_eq!(results.len(), 3);
        assert_eq!(results[0].voice, "es-ES-ElviraNeural");
        assert_eq!(results[0].outcome, Ok("es-ES-ElviraNeural".len()));
        assert!(results[1].outcome.as_ref().unwrap_err().contains("no such voice"));
        assert!(results[2].outcome.is_ok());

        let written = std::fs::read(dir.path().join("voz_3_es-ES-AlvaroNeural.mp3")).unwrap();
        assert_eq!(written, b"es-ES-AlvaroNeural");
        assert!(!dir.path().join("voz_2_es-ES-BrokenNeural.mp3").exists());
    }
}
