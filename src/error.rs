//! Errors raised while collecting imports and emitting the Dockerfile

use std::io;
use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

/// Every failure is terminal for the run; variants only differ in what gets logged.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("Failed to start {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("I/O error talking to {program}: {source}")]
    Pipe {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("Malformed package record: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("{program} exited with {status}")]
    EnumerationFailed { program: String, status: ExitStatus },

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{path} is out of date ({program} exited with {status})")]
    DiffMismatch {
        path: PathBuf,
        program: String,
        status: ExitStatus,
    },
}

pub type Result<T> = std::result::Result<T, GenerateError>;
