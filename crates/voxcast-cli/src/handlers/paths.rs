//! `voxcast paths` handler.
//!
//! Displays resolved paths in `key = value` format for diagnostics.

use anyhow::Result;
use voxcast_core::{DATA_DIR_ENV, SPOOL_FILE_NAME, data_root, default_spool_dir};

pub fn execute() -> Result<()> {
    let root = data_root()?;
    let spool = default_spool_dir()?;
    let source = if std::env::var_os(DATA_DIR_ENV).is_some() {
        DATA_DIR_ENV
    } else {
        "system default"
    };

    println!("data_root = {} ({source})", root.display());
    println!("spool_dir = {}", spool.display());
    println!("spool_file = {}", spool.join(SPOOL_FILE_NAME).display());
    Ok(())
}
