//! File selection: which files a run checks.
//!
//! Two mutually exclusive strategies, chosen by whether an include-list was
//! supplied. Either way the result is built once and never changed.

pub mod discovery;
pub mod include_list;

pub use discovery::discover_files;
pub use include_list::{parse_include_list, read_include_list};

use crate::config::BatchConfig;
use crate::core::{FileSet, ProjectRoot};
use crate::errors::Result;
use std::path::{Path, PathBuf};

/// Selection strategy for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// Check exactly the files named in this list file
    IncludeList(PathBuf),
    /// Scan the header and source subtrees
    Discovery,
}

impl Selection {
    pub fn from_include_list(include_list: Option<&Path>) -> Self {
        include_list.map_or(Self::Discovery, |path| Self::IncludeList(path.to_path_buf()))
    }
}

/// Build the file set for a run.
pub fn build_file_set(
    selection: &Selection,
    root: &ProjectRoot,
    config: &BatchConfig,
) -> Result<FileSet> {
    match selection {
        Selection::IncludeList(path) => {
            log::debug!("Selecting files from include list {}", path.display());
            read_include_list(path)
        }
        Selection::Discovery => {
            log::debug!(
                "Discovering files under {} and {}",
                config.header_dir.display(),
                config.source_dir.display()
            );
            Ok(discover_files(root, config))
        }
    }
}
