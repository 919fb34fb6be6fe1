// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod errors;
pub mod fileset;
pub mod formatting;
pub mod progress;
pub mod resolve;
pub mod runner;

// Re-export commonly used types
pub use crate::core::{FileSet, FileSpec, ProjectRoot, RunContext, ToolPath};

pub use crate::errors::{BatchError, Result};

pub use crate::config::{load_config, BatchConfig};

pub use crate::fileset::{build_file_set, discover_files, parse_include_list, Selection};

pub use crate::runner::{run_checks, CheckRun, Invoker, ProcessInvoker, RunState, RunSummary};

pub use crate::progress::{ConsoleReporter, Reporter, SilentReporter};
