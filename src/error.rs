//! Error types for backing-file access.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Failures while reading or writing the task file.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Failed to access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to serialize tasks for {}: {source}", .path.display())]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("No task id left after {max} in {}", .path.display())]
    IdsExhausted { path: PathBuf, max: i64 },
}

impl StoreError {
    pub fn io(path: &Path, source: std::io::Error) -> Self {
        StoreError::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    pub fn parse(path: &Path, source: serde_json::Error) -> Self {
        StoreError::Parse {
            path: path.to_path_buf(),
            source,
        }
    }

    pub fn serialize(path: &Path, source: serde_json::Error) -> Self {
        StoreError::Serialize {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Failures while running a command.
#[derive(Error, Debug)]
pub enum CmdError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),
}
