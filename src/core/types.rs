//! Data model for a batch check run.
//!
//! Paths resolved once at startup (`ProjectRoot`, `ToolPath`) are carried
//! as explicit values in a [`RunContext`] rather than as process-wide state.

use std::fmt;
use std::path::{Path, PathBuf};

/// Absolute path of the project iteration directory.
///
/// Only constructed by the resolver once the directory is known to exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectRoot(PathBuf);

impl ProjectRoot {
    pub(crate) fn new(path: PathBuf) -> Self {
        Self(path)
    }

    pub fn as_path(&self) -> &Path {
        &self.0
    }

    /// Absolute location of a root-relative file.
    pub fn join(&self, spec: &FileSpec) -> PathBuf {
        self.0.join(spec.as_path())
    }
}

impl fmt::Display for ProjectRoot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

/// Absolute path of the style checker script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolPath(PathBuf);

impl ToolPath {
    pub(crate) fn new(path: PathBuf) -> Self {
        Self(path)
    }

    pub fn as_path(&self) -> &Path {
        &self.0
    }
}

impl fmt::Display for ToolPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

/// One candidate file, relative to the project root.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FileSpec(PathBuf);

impl FileSpec {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }

    pub fn as_path(&self) -> &Path {
        &self.0
    }
}

impl fmt::Display for FileSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

impl From<&str> for FileSpec {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Ordered, immutable sequence of files to check.
///
/// Duplicates are kept and order is exactly the order of construction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileSet {
    specs: Vec<FileSpec>,
}

impl FileSet {
    pub fn new(specs: Vec<FileSpec>) -> Self {
        Self { specs }
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FileSpec> {
        self.specs.iter()
    }

    pub fn as_slice(&self) -> &[FileSpec] {
        &self.specs
    }
}

impl FromIterator<FileSpec> for FileSet {
    fn from_iter<I: IntoIterator<Item = FileSpec>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a FileSet {
    type Item = &'a FileSpec;
    type IntoIter = std::slice::Iter<'a, FileSpec>;

    fn into_iter(self) -> Self::IntoIter {
        self.specs.iter()
    }
}

/// Resolved paths shared by file selection and the invocation loop.
#[derive(Debug, Clone)]
pub struct RunContext {
    pub root: ProjectRoot,
    pub tool: ToolPath,
}
