//! Explicit-list selection.
//!
//! Only the leading run of non-blank lines is honored: the first line that
//! is empty after trimming ends the list, and anything below it is ignored.

use crate::core::{FileSet, FileSpec};
use crate::errors::{BatchError, Result};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Read an include-list file.
///
/// `path` is resolved against the working directory, not the project root.
pub fn read_include_list(path: &Path) -> Result<FileSet> {
    if !path.is_file() {
        return Err(BatchError::IncludeListNotFound {
            path: path.to_path_buf(),
        });
    }

    let file = File::open(path).map_err(|e| BatchError::io(path, e))?;
    let files = parse_include_list(BufReader::new(file)).map_err(|e| BatchError::io(path, e))?;
    log::info!(
        "Include list {} selects {} file(s)",
        path.display(),
        files.len()
    );
    Ok(files)
}

/// Parse include-list content, stopping at the first blank line.
pub fn parse_include_list<R: BufRead>(reader: R) -> io::Result<FileSet> {
    let mut specs = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let entry = line.trim();
        if entry.is_empty() {
            break;
        }
        specs.push(FileSpec::new(entry));
    }
    Ok(FileSet::new(specs))
}
