//! Domain types for the synthesis pipeline.
//!
//! Pure data with no infrastructure dependencies.

pub mod artifact;
pub mod job;
pub mod voice;

pub use artifact::{Artifact, MPEG_MIME_TYPE, VersionToken};
pub use job::{JobError, JobErrorKind, JobOutcome, SynthesisRequest};
pub use voice::{
    CatalogError, DEFAULT_VOICE_ID, DEMO_TEXT, SelectorOption, VoiceCatalog, VoiceEntry,
    VoiceGroup,
};
