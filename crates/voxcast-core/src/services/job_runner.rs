//! Synthesis job runner - validates, serializes and commits synthesis jobs.
//!
//! At most one job talks to the engine at a time, system-wide. The gate is an
//! explicit async mutex; `tokio::sync::Mutex` hands out the lock in FIFO order,
//! which gives the queuing policy its ordering.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::{Duration, Instant};

use serde::Serialize;
use tokio::sync::{Mutex, OwnedMutexGuard};
use tracing::{info, warn};

use crate::domain::{
    JobError, JobOutcome, MPEG_MIME_TYPE, SynthesisRequest, VersionToken, VoiceCatalog,
};
use crate::ports::{SynthesisClient, SynthesisError};
use crate::services::ArtifactStore;
use crate::settings::{ConcurrencyPolicy, Settings};

/// Snapshot of the runner for diagnostics.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobRunnerStatus {
    /// Whether a job is currently running.
    pub busy: bool,
    /// Submissions waiting behind the active job.
    pub queued: usize,
    pub policy: ConcurrencyPolicy,
    pub current_version: Option<VersionToken>,
    pub engine: String,
}

/// Counts a waiting submission until dropped.
struct QueueSlot(Arc<AtomicUsize>);

impl QueueSlot {
    fn enter(counter: &Arc<AtomicUsize>) -> Self {
        counter.fetch_add(1, Ordering::SeqCst);
        Self(Arc::clone(counter))
    }
}

impl Drop for QueueSlot {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

/// Marks the runner busy for as long as a job task holds it.
struct ActiveJob(Arc<AtomicBool>);

impl ActiveJob {
    fn start(flag: &Arc<AtomicBool>) -> Self {
        flag.store(true, Ordering::SeqCst);
        Self(Arc::clone(flag))
    }
}

impl Drop for ActiveJob {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

/// Everything a single job needs once it owns the gate.
struct Job {
    client: Arc<dyn SynthesisClient>,
    store: Arc<ArtifactStore>,
    timeout: Duration,
    settings: Settings,
    text: String,
    voice_id: String,
}

impl Job {
    async fn run(self) -> Result<JobOutcome, JobError> {
        let started = Instant::now();
        info!(
            target: "voxcast.jobs",
            engine = self.client.name(),
            voice = %self.voice_id,
            chars = self.text.chars().count(),
            "Synthesis started"
        );

        let bytes = match tokio::time::timeout(
            self.timeout,
            self.client.synthesize(&self.text, &self.voice_id),
        )
        .await
        {
            Ok(Ok(bytes)) if bytes.is_empty() => Err(SynthesisError::EmptyAudio),
            Ok(result) => result,
            Err(_) => Err(SynthesisError::Timeout(self.timeout)),
        }
        .map_err(|e| {
            warn!(
                target: "voxcast.jobs",
                voice = %self.voice_id,
                elapsed_ms = started.elapsed().as_millis(),
                error = %e,
                "Synthesis failed"
            );
            JobError::SynthesisFailed(e)
        })?;

        let byte_len = bytes.len();
        let version = self
            .store
            .replace(bytes, MPEG_MIME_TYPE, &self.voice_id)
            .await
            .map_err(|e| {
                warn!(target: "voxcast.jobs", error = %e, "Failed to commit artifact");
                JobError::Storage(e.to_string())
            })?;

        info!(
            target: "voxcast.jobs",
            voice = %self.voice_id,
            version = %version,
            bytes = byte_len,
            elapsed_ms = started.elapsed().as_millis(),
            "Synthesis completed"
        );

        Ok(JobOutcome {
            delivery_url: self.settings.delivery_url(version),
            version,
            byte_len,
            voice_id: self.voice_id,
        })
    }
}

/// Accepts synthesis requests and runs them one at a time.
pub struct SynthesisJobRunner {
    client: Arc<dyn SynthesisClient>,
    catalog: Arc<VoiceCatalog>,
    store: Arc<ArtifactStore>,
    settings: Settings,
    timeout: Duration,
    gate: Arc<Mutex<()>>,
    waiting: Arc<AtomicUsize>,
    active: Arc<AtomicBool>,
}

impl SynthesisJobRunner {
    /// Create a runner. The engine timeout comes from `settings`.
    pub fn new(
        client: Arc<dyn SynthesisClient>,
        catalog: Arc<VoiceCatalog>,
        store: Arc<ArtifactStore>,
        settings: Settings,
    ) -> Self {
        let timeout = settings.synthesis_timeout();
        Self {
            client,
            catalog,
            store,
            settings,
            timeout,
            gate: Arc::new(Mutex::new(())),
            waiting: Arc::new(AtomicUsize::new(0)),
            active: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Override the engine timeout with a finer-grained value.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn catalog(&self) -> &Arc<VoiceCatalog> {
        &self.catalog
    }

    pub fn store(&self) -> &Arc<ArtifactStore> {
        &self.store
    }

    pub const fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Validate, wait for (or fail on) the gate, synthesize, and commit.
    ///
    /// Once the gate is held the job runs on its own task: dropping the
    /// returned future does not interrupt the engine call or the commit.
    pub async fn submit(&self, request: SynthesisRequest) -> Result<JobOutcome, JobError> {
        let text = self.validate(&request)?;
        let permit = self.acquire().await?;
        let active = ActiveJob::start(&self.active);

        let job = Job {
            client: Arc::clone(&self.client),
            store: Arc::clone(&self.store),
            timeout: self.timeout,
            settings: self.settings.clone(),
            text,
            voice_id: request.voice_id,
        };

        tokio::spawn(async move {
            let _permit = permit;
            let _active = active;
            job.run().await
        })
        .await
        .map_err(|e| JobError::SynthesisFailed(SynthesisError::Engine(format!("job task aborted: {e}"))))?
    }

    /// Reads counters only; never touches the gate.
    pub fn status(&self) -> JobRunnerStatus {
        JobRunnerStatus {
            busy: self.active.load(Ordering::SeqCst),
            queued: self.waiting.load(Ordering::SeqCst),
            policy: self.settings.policy,
            current_version: self.store.current_version(),
            engine: self.client.name().to_string(),
        }
    }

    /// Returns the trimmed text.
    fn validate(&self, request: &SynthesisRequest) -> Result<String, JobError> {
        let text = request.text.trim();
        if text.is_empty() {
            return Err(JobError::EmptyText);
        }

        let len = text.chars().count();
        if len > self.settings.max_text_chars {
            return Err(JobError::TextTooLong {
                len,
                max: self.settings.max_text_chars,
            });
        }

        if !self.catalog.exists(&request.voice_id) {
            return Err(JobError::UnknownVoice(request.voice_id.clone()));
        }

        Ok(text.to_string())
    }

    async fn acquire(&self) -> Result<OwnedMutexGuard<()>, JobError> {
        match self.settings.policy {
            ConcurrencyPolicy::Queue => {
                let _slot = QueueSlot::enter(&self.waiting);
                Ok(Arc::clone(&self.gate).lock_owned().await)
            }
            ConcurrencyPolicy::Reject => Arc::clone(&self.gate).try_lock_owned().map_err(|_| {
                info!(target: "voxcast.jobs", "Rejected submission while a job is in flight");
                JobError::Busy
            }),
        }
    }
}
