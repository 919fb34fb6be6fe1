//! Run configuration.
//!
//! Values come from, in decreasing precedence: command-line flags, the
//! environment (through clap's `env` support), an optional TOML file, and
//! the defaults below.

mod loader;

pub use loader::{load_config, parse_config, CONFIG_FILE_NAME};

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Interpreter used to launch the checker script.
pub const DEFAULT_INTERPRETER: &str = "python";

/// Location of the checker script, relative to the project root.
pub const DEFAULT_TOOL: &str = "ext/cpplint/cpplint.py";

/// Settings for one batch run
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct BatchConfig {
    /// Program that runs the checker; empty runs the checker directly
    pub interpreter: String,

    /// Checker script, relative to the project root
    pub tool: PathBuf,

    /// Header subtree scanned in discovery mode
    pub header_dir: PathBuf,

    /// Source subtree scanned in discovery mode
    pub source_dir: PathBuf,

    /// Base-name suffixes that select header files
    pub header_suffixes: Vec<String>,

    /// Base-name suffixes that select source files
    pub source_suffixes: Vec<String>,

    /// Sort each subtree's walk by file name
    pub sort: bool,

    /// Follow symbolic links while walking
    pub follow_links: bool,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            interpreter: DEFAULT_INTERPRETER.to_string(),
            tool: PathBuf::from(DEFAULT_TOOL),
            header_dir: PathBuf::from("src/include"),
            source_dir: PathBuf::from("src"),
            header_suffixes: vec![".h".to_string()],
            source_suffixes: vec![".cc".to_string()],
            sort: false,
            follow_links: false,
        }
    }
}

impl BatchConfig {
    /// Apply command-line overrides on top of file or default values.
    pub fn with_overrides(mut self, interpreter: Option<String>, sort: bool) -> Self {
        if let Some(interpreter) = interpreter {
            self.interpreter = interpreter;
        }
        self.sort |= sort;
        self
    }
}
