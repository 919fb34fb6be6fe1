//! Progress banners for a batch run.
//!
//! The [`Reporter`] is told about each lifecycle step of the invocation
//! loop. Banner text goes to stdout, interleaved with the checker's own
//! output, which the children write to the same inherited stream.

use crate::core::{FileSpec, ProjectRoot};
use crate::formatting::{banner, file_name};

/// Receives run lifecycle notifications.
pub trait Reporter {
    /// Called once, before the first file.
    fn run_started(&self, root: &ProjectRoot, total: usize);

    /// Called before the checker runs on `spec`. `index` is 1-based.
    fn file_started(&self, spec: &FileSpec, index: usize, total: usize);

    /// Called once after every file was checked. Not called on abort.
    fn run_finished(&self, checked: usize);
}

/// Prints the fixed banners to stdout.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn run_started(&self, root: &ProjectRoot, total: usize) {
        log::info!("Checking {} file(s) under {}", total, root);
        println!();
        println!("{}", banner("----------------------"));
        println!("{}", banner("--- STARTING CHECK ---"));
        println!("{}", banner("----------------------"));
    }

    fn file_started(&self, spec: &FileSpec, index: usize, total: usize) {
        log::debug!("Checking file {}/{}", index, total);
        println!();
        println!(
            "{} {} {}",
            banner("--- CHECKING FILE:"),
            file_name(&spec.to_string()),
            banner("---")
        );
    }

    fn run_finished(&self, checked: usize) {
        log::info!("Checked {} file(s)", checked);
        println!();
        println!("{}", banner("--- DONE CHECKING ---"));
    }
}

/// Reporter that prints nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentReporter;

impl Reporter for SilentReporter {
    fn run_started(&self, _root: &ProjectRoot, _total: usize) {}

    fn file_started(&self, _spec: &FileSpec, _index: usize, _total: usize) {}

    fn run_finished(&self, _checked: usize) {}
}
