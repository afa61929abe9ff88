//! Errors from resolving the data root and preparing the spool directory.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PathError {
    /// `~` expansion with no home directory.
    #[error("No home directory to expand '~' against")]
    NoHomeDir,

    #[error("No local data directory on this platform; set VOXCAST_DATA_DIR")]
    NoDataDir,

    #[error("{0} is not a directory")]
    NotADirectory(PathBuf),

    #[error("Cannot create {path}: {reason}")]
    CreateFailed { path: PathBuf, reason: String },

    /// The spool directory exists but a probe file could not be written.
    #[error("Cannot write to {path}: {reason}")]
    NotWritable { path: PathBuf, reason: String },

    #[error("Empty path")]
    EmptyPath,

    #[error("Cannot resolve relative path: {0}")]
    CurrentDir(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_path() {
        let err = PathError::NotWritable {
            path: PathBuf::from("/srv/voxcast/spool"),
            reason: "read-only file system".into(),
        };
        assert_eq!(
            err.to_string(),
            "Cannot write to /srv/voxcast/spool: read-only file system"
        );
        assert!(PathError::NoDataDir.to_string().contains("VOXCAST_DATA_DIR"));
    }
}
