//! Command implementations.
//!
//! - **check**: resolve the project, select files, run the checker on each
//! - **list**: resolve the project and print the selected files only
//! - **init**: write a default `.batchlint.toml` into the project root

pub mod check;
pub mod init;

pub use check::{check_with, handle_check, list_files, prepare_run, CheckOptions, PreparedRun};
pub use init::init_config;
