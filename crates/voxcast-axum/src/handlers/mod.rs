//! HTTP request handlers for the Axum web server.
//!
//! Handlers are thin wrappers that delegate to the job runner and the
//! artifact store.

pub mod delivery;
pub mod status;
pub mod synthesize;
pub mod voices;
