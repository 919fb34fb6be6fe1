//! Error types for batch style-check runs.
//!
//! Every variant is fatal: the run stops at the point of detection, nothing
//! is retried, and invocations that already happened are not undone. The
//! binary's single top-level handler prints the message and exits.

use crate::runner::RunState;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Main error type for batchlint operations
#[derive(Debug, Error)]
pub enum BatchError {
    /// The project iteration directory does not exist
    #[error("iteration directory '{}' does not exist", path.display())]
    InvalidRoot { path: PathBuf },

    /// The style checker is not present beneath the project root
    #[error("cannot find checker script '{}'", path.display())]
    ToolNotFound { path: PathBuf },

    /// The include-list file does not exist
    #[error("include_list file '{}' does not exist", path.display())]
    IncludeListNotFound { path: PathBuf },

    /// A selected file is not on disk when its turn comes
    #[error("cannot find selected file: {}", spec.display())]
    MissingFile { spec: PathBuf, path: PathBuf },

    /// The interpreter used to launch the checker is not on PATH
    #[error("cannot find interpreter '{name}' on PATH")]
    InterpreterNotFound {
        name: String,
        #[source]
        source: which::Error,
    },

    /// The checker process could not be started
    #[error("failed to launch checker for '{}'", path.display())]
    Spawn {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Configuration file errors
    #[error("configuration error in '{}': {message}", path.display())]
    Config { path: PathBuf, message: String },

    /// A run was asked to execute after it had already left `NotStarted`
    #[error("run already executed (state {state:?})")]
    AlreadyExecuted { state: RunState },

    /// File system errors while reading the include-list or writing a config file
    #[error("I/O error at '{}'", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl BatchError {
    /// Create an I/O error with path context.
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a configuration error with path context.
    pub fn config(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Config {
            path: path.into(),
            message: message.into(),
        }
    }

    /// The filesystem path the error is about, when there is one.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::InvalidRoot { path }
            | Self::ToolNotFound { path }
            | Self::IncludeListNotFound { path }
            | Self::MissingFile { path, .. }
            | Self::Spawn { path, .. }
            | Self::Config { path, .. }
            | Self::Io { path, .. } => Some(path.as_path()),
            Self::InterpreterNotFound { .. } | Self::AlreadyExecuted { .. } => None,
        }
    }
}

/// Result alias for batchlint operations
pub type Result<T> = std::result::Result<T, BatchError>;
