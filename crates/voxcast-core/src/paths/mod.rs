//! Path utilities for voxcast data directories.
//!
//! - Data root (overridable with `VOXCAST_DATA_DIR`)
//! - Spool directory holding the current audio artifact

mod ensure;
mod error;
mod platform;

pub use ensure::{ensure_directory, verify_writable};
pub use error::PathError;
pub use platform::{DATA_DIR_ENV, data_root, default_spool_dir, normalize_user_path};
