//! Discovery-mode selection.
//!
//! Walks the header subtree, then the source subtree, keeping files whose
//! base name ends with one of the configured suffixes. Header results come
//! first. Nothing is deduplicated, so with the default layout a `.cc` file
//! placed under `src/include` is found by the source walk as well.
//!
//! Order inside a subtree is whatever the directory traversal yields, which
//! differs across platforms and filesystems, unless sorting is enabled.

use crate::config::BatchConfig;
use crate::core::{FileSet, FileSpec, ProjectRoot};
use std::ffi::OsStr;
use std::path::Path;
use walkdir::{DirEntry, WalkDir};

/// Skipped-entry warnings printed per subtree before summarizing
const MAX_SKIP_WARNINGS: usize = 10;

/// Options for one subtree walk.
#[derive(Debug, Clone, Copy)]
struct WalkOptions<'a> {
    suffixes: &'a [String],
    sort: bool,
    follow_links: bool,
}

/// Discover header and source files beneath the project root.
pub fn discover_files(root: &ProjectRoot, config: &BatchConfig) -> FileSet {
    let headers = walk_subtree(
        root,
        &config.header_dir,
        WalkOptions {
            suffixes: &config.header_suffixes,
            sort: config.sort,
            follow_links: config.follow_links,
        },
    );
    let sources = walk_subtree(
        root,
        &config.source_dir,
        WalkOptions {
            suffixes: &config.source_suffixes,
            sort: config.sort,
            follow_links: config.follow_links,
        },
    );

    log::info!(
        "Discovered {} header(s) and {} source file(s)",
        headers.len(),
        sources.len()
    );
    headers.into_iter().chain(sources).collect()
}

// =============================================================================
// Pure Predicates
// =============================================================================

/// Check a base name against the suffix list.
///
/// Compares raw bytes, so names that are not valid UTF-8 still match.
fn matches_suffix(name: &OsStr, suffixes: &[String]) -> bool {
    let name = name.as_encoded_bytes();
    suffixes
        .iter()
        .any(|suffix| name.ends_with(suffix.as_bytes()))
}

/// Anything that is not a directory, as seen through symlinks.
///
/// Dangling symlinks are kept; the invocation loop reports them missing.
fn is_candidate_file(entry: &DirEntry) -> bool {
    let file_type = entry.file_type();
    if file_type.is_dir() {
        return false;
    }
    if file_type.is_symlink() {
        let path = entry.path();
        if !path.exists() {
            log::warn!("Dangling symlink selected: {}", path.display());
            return true;
        }
        return !path.is_dir();
    }
    true
}

// =============================================================================
// I/O - Directory Walk
// =============================================================================

fn walk_subtree(root: &ProjectRoot, subtree: &Path, options: WalkOptions<'_>) -> Vec<FileSpec> {
    let dir = root.as_path().join(subtree);
    if !dir.is_dir() {
        log::debug!("Subtree {} does not exist, nothing to discover", dir.display());
        return Vec::new();
    }

    let mut walker = WalkDir::new(&dir).follow_links(options.follow_links);
    if options.sort {
        walker = walker.sort_by_file_name();
    }

    let mut files = Vec::new();
    let mut skipped_count = 0;
    for entry in walker.into_iter().filter_map(|e| match e {
        Ok(entry) => Some(entry),
        Err(err) => {
            if skipped_count < MAX_SKIP_WARNINGS {
                log::warn!("Skipping directory entry: {}", err);
            }
            skipped_count += 1;
            None
        }
    }) {
        if is_candidate_file(&entry) && matches_suffix(entry.file_name(), options.suffixes) {
            let relative = entry
                .path()
                .strip_prefix(root.as_path())
                .unwrap_or_else(|_| entry.path());
            files.push(FileSpec::new(relative));
        }
    }

    if skipped_count > MAX_SKIP_WARNINGS {
        log::warn!(
            "Skipped {} additional directory entries under {}",
            skipped_count - MAX_SKIP_WARNINGS,
            dir.display()
        );
    }

    files
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::BTreeSet;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn suffixes(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn touch(root: &Path, relative: &str) {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "").unwrap();
    }

    fn project() -> (TempDir, ProjectRoot) {
        let dir = TempDir::new().unwrap();
        let root = ProjectRoot::new(dir.path().to_path_buf());
        (dir, root)
    }

    fn as_set(files: &FileSet) -> BTreeSet<PathBuf> {
        files.iter().map(|f| f.as_path().to_path_buf()).collect()
    }

    #[test]
    fn matches_suffix_on_base_name() {
        let header = suffixes(&[".h"]);
        assert!(matches_suffix(OsStr::new("foo.h"), &header));
        assert!(!matches_suffix(OsStr::new("foo.hpp"), &header));
        assert!(!matches_suffix(OsStr::new("foo.h.orig"), &header));
        assert!(!matches_suffix(OsStr::new("Makefile"), &header));
    }

    #[test]
    fn matches_suffix_any_of_several() {
        let source = suffixes(&[".cc", ".cpp"]);
        assert!(matches_suffix(OsStr::new("bar.cc"), &source));
        assert!(matches_suffix(OsStr::new("bar.cpp"), &source));
        assert!(!matches_suffix(OsStr::new("bar.c"), &source));
    }

    #[test]
    fn test_empty_subtrees_yield_empty_set() {
        let (dir, root) = project();
        fs::create_dir_all(dir.path().join("src/include")).unwrap();

        let files = discover_files(&root, &BatchConfig::default());
        assert!(files.is_empty());
    }

    #[test]
    fn test_missing_subtrees_yield_empty_set() {
        let (_dir, root) = project();
        assert!(discover_files(&root, &BatchConfig::default()).is_empty());
    }

    #[test]
    fn test_finds_headers_and_sources_excludes_others() {
        let (dir, root) = project();
        touch(dir.path(), "src/include/foo.h");
        touch(dir.path(), "src/include/baz.txt");
        touch(dir.path(), "src/bar.cc");
        touch(dir.path(), "src/baz.txt");

        let files = discover_files(&root, &BatchConfig::default());
        let expected: BTreeSet<PathBuf> =
            ["src/include/foo.h", "src/bar.cc"].iter().map(PathBuf::from).collect();
        assert_eq!(as_set(&files), expected);
    }

    #[test]
    fn test_headers_precede_sources() {
        let (dir, root) = project();
        touch(dir.path(), "src/zeta.cc");
        touch(dir.path(), "src/nested/deep/alpha.cc");
        touch(dir.path(), "src/include/one.h");
        touch(dir.path(), "src/include/sub/two.h");

        let files = discover_files(&root, &BatchConfig::default());
        let kinds: Vec<bool> = files
            .iter()
            .map(|f| f.as_path().extension() == Some(OsStr::new("h")))
            .collect();
        assert_eq!(kinds, vec![true, true, false, false]);
    }

    #[test]
    fn test_header_outside_include_dir_is_not_selected() {
        let (dir, root) = project();
        touch(dir.path(), "src/stray.h");
        touch(dir.path(), "src/include/kept.h");

        let files = discover_files(&root, &BatchConfig::default());
        assert_eq!(files.as_slice(), &[FileSpec::from("src/include/kept.h")]);
    }

    #[test]
    fn test_source_under_include_dir_is_selected_by_source_walk() {
        let (dir, root) = project();
        touch(dir.path(), "src/include/inline.cc");

        let files = discover_files(&root, &BatchConfig::default());
        assert_eq!(files.as_slice(), &[FileSpec::from("src/include/inline.cc")]);
    }

    #[test]
    fn test_sorted_walk_is_deterministic() {
        let (dir, root) = project();
        for name in ["src/c.cc", "src/a.cc", "src/b/z.cc", "src/include/y.h", "src/include/x.h"] {
            touch(dir.path(), name);
        }
        let config = BatchConfig {
            sort: true,
            ..BatchConfig::default()
        };

        let names: Vec<String> = discover_files(&root, &config)
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(
            names,
            vec![
                "src/include/x.h",
                "src/include/y.h",
                "src/a.cc",
                "src/b/z.cc",
                "src/c.cc",
            ]
        );
    }

    #[test]
    fn test_directory_named_like_header_is_skipped() {
        let (dir, root) = project();
        fs::create_dir_all(dir.path().join("src/include/odd.h")).unwrap();

        assert!(discover_files(&root, &BatchConfig::default()).is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_name_is_selected() {
        use std::os::unix::ffi::OsStrExt;

        let (dir, root) = project();
        fs::create_dir_all(dir.path().join("src")).unwrap();
        let name = OsStr::from_bytes(b"caf\xe9.cc");
        fs::write(dir.path().join("src").join(name), "").unwrap();

        let files = discover_files(&root, &BatchConfig::default());
        assert_eq!(
            files.as_slice(),
            &[FileSpec::new(Path::new("src").join(name))]
        );
    }

    #[cfg(unix)]
    #[test]
    fn matches_suffix_non_utf8_bytes() {
        use std::os::unix::ffi::OsStrExt;

        let header = suffixes(&[".h"]);
        assert!(matches_suffix(OsStr::from_bytes(b"\xff\xfe.h"), &header));
        assert!(!matches_suffix(OsStr::from_bytes(b"\xff.cc"), &header));
    }

    #[cfg(unix)]
    #[test]
    fn test_dangling_symlink_is_selected() {
        let (dir, root) = project();
        fs::create_dir_all(dir.path().join("src/include")).unwrap();
        std::os::unix::fs::symlink(
            dir.path().join("gone/foo.h"),
            dir.path().join("src/include/foo.h"),
        )
        .unwrap();

        let files = discover_files(&root, &BatchConfig::default());
        assert_eq!(files.as_slice(), &[FileSpec::from("src/include/foo.h")]);
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinked_directory_is_not_a_file() {
        let (dir, root) = project();
        fs::create_dir_all(dir.path().join("elsewhere.h")).unwrap();
        fs::create_dir_all(dir.path().join("src/include")).unwrap();
        std::os::unix::fs::symlink(
            dir.path().join("elsewhere.h"),
            dir.path().join("src/include/linked.h"),
        )
        .unwrap();

        assert!(discover_files(&root, &BatchConfig::default()).is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinked_file_is_selected() {
        let (dir, root) = project();
        touch(dir.path(), "shared/common.h");
        fs::create_dir_all(dir.path().join("src/include")).unwrap();
        std::os::unix::fs::symlink(
            dir.path().join("shared/common.h"),
            dir.path().join("src/include/common.h"),
        )
        .unwrap();

        let files = discover_files(&root, &BatchConfig::default());
        assert_eq!(files.as_slice(), &[FileSpec::from("src/include/common.h")]);
    }
}
