// Test utility module for batchlint integration tests
#![allow(dead_code)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Fake checker: records each argument it is given, one per line.
pub const RECORDING_CHECKER: &str = r#"echo "$1" >> "$(dirname "$0")/calls.log"
echo "Done processing $1"
"#;

/// Fake checker that records its argument and then reports a violation.
pub const FAILING_CHECKER: &str = r#"echo "$1" >> "$(dirname "$0")/calls.log"
echo "$1:1:  No copyright message found.  [legal/copyright] [5]" >&2
exit 1
"#;

/// A throwaway project iteration directory
pub struct ProjectFixture {
    _tmp: TempDir,
    pub base: PathBuf,
    pub root: PathBuf,
}

impl ProjectFixture {
    /// An iteration directory with no checker and no sources.
    pub fn empty() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let base = tmp.path().to_path_buf();
        let root = base.join("iteration1");
        fs::create_dir_all(&root).expect("create iteration dir");
        Self {
            _tmp: tmp,
            base,
            root,
        }
    }

    /// An iteration directory with the recording checker installed.
    pub fn new() -> Self {
        Self::empty().with_checker(RECORDING_CHECKER)
    }

    pub fn with_checker(self, script: &str) -> Self {
        self.write("ext/cpplint/cpplint.py", script);
        self
    }

    pub fn with_files(self, files: &[&str]) -> Self {
        for file in files {
            self.write(file, "// content\n");
        }
        self
    }

    pub fn write(&self, relative: &str, contents: &str) -> PathBuf {
        let path = self.root.join(relative);
        fs::create_dir_all(path.parent().expect("parent dir")).expect("create parent dirs");
        fs::write(&path, contents).expect("write fixture file");
        path
    }

    /// Write a file next to, not inside, the iteration directory.
    pub fn write_outside(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.base.join(name);
        fs::write(&path, contents).expect("write fixture file");
        path
    }

    pub fn checker_dir(&self) -> PathBuf {
        self.root.join("ext").join("cpplint")
    }

    /// Absolute paths the fake checker was run on, in call order.
    pub fn calls(&self) -> Vec<PathBuf> {
        match fs::read_to_string(self.checker_dir().join("calls.log")) {
            Ok(log) => log.lines().map(PathBuf::from).collect(),
            Err(_) => Vec::new(),
        }
    }

    /// Root-relative version of `calls()`.
    pub fn relative_calls(&self) -> Vec<String> {
        self.calls()
            .iter()
            .map(|p| p.strip_prefix(&self.root).unwrap_or(p).display().to_string())
            .collect()
    }

    /// The binary, run from the temp base with `sh` as the interpreter.
    pub fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("batchlint");
        cmd.current_dir(&self.base)
            .env_remove("RUST_LOG")
            .env("BATCHLINT_INTERPRETER", "sh")
            .arg("--plain");
        cmd
    }
}
