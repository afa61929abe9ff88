//! Core services: the artifact store and the job runner that feeds it.

mod artifact_store;
mod job_runner;

pub use artifact_store::{ArtifactStore, SPOOL_FILE_NAME, StoreError};
pub use job_runner::{JobRunnerStatus, SynthesisJobRunner};
