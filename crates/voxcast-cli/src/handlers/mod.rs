//! Command handlers.

pub mod paths;
pub mod say;
pub mod voices;
pub mod web;
