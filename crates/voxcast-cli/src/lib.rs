//! `voxcast` command-line interface.
//!
//! Argument parsing and command handlers live here so they can be tested;
//! `main.rs` only initializes logging and dispatches.
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Used by main.rs binary
use dotenvy as _;
use tracing_subscriber as _;

pub mod commands;
pub mod handlers;
pub mod parser;

pub use commands::{Commands, WebArgs};
pub use parser::Cli;
