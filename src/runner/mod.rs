//! The invocation loop.
//!
//! Files are checked strictly in order, one child process at a time. The
//! first selected file that is missing from disk ends the run; checks that
//! already ran stay as they are.

pub mod invoker;

pub use invoker::{Invoker, ProcessInvoker};

use crate::core::{FileSet, RunContext};
use crate::errors::{BatchError, Result};
use crate::progress::Reporter;

/// Lifecycle of a run.
///
/// `Done` and `Aborted` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    NotStarted,
    Running,
    Checking,
    Checked,
    Done,
    Aborted,
}

impl RunState {
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Done | Self::Aborted)
    }

    /// Whether the lifecycle allows moving from `self` to `next`.
    pub fn can_transition_to(self, next: RunState) -> bool {
        use RunState::*;
        matches!(
            (self, next),
            (NotStarted, Running)
                | (NotStarted, Aborted)
                | (Running, Checking)
                | (Running, Done)
                | (Checking, Checked)
                | (Checking, Aborted)
                | (Checked, Checking)
                | (Checked, Done)
        )
    }
}

/// Outcome of a run that reached `Done`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Number of checker invocations
    pub checked: usize,
}

/// Tracks the lifecycle of one run.
#[derive(Debug)]
pub struct CheckRun {
    state: RunState,
    checked: usize,
}

impl Default for CheckRun {
    fn default() -> Self {
        Self::new()
    }
}

impl CheckRun {
    pub fn new() -> Self {
        Self {
            state: RunState::NotStarted,
            checked: 0,
        }
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    /// Number of files the checker has been run on so far.
    pub fn checked(&self) -> usize {
        self.checked
    }

    fn transition(&mut self, next: RunState) {
        debug_assert!(
            self.state.can_transition_to(next),
            "invalid run transition {:?} -> {:?}",
            self.state,
            next
        );
        log::trace!("Run state {:?} -> {:?}", self.state, next);
        self.state = next;
    }

    /// Mark a run that failed before any file was considered.
    pub fn abort_before_start(&mut self) {
        if self.state == RunState::NotStarted {
            self.transition(RunState::Aborted);
        }
    }

    /// Check every file in `files`, in order.
    ///
    /// A run executes once; calling this on a run that already left
    /// `NotStarted` fails with [`BatchError::AlreadyExecuted`] and checks
    /// nothing.
    pub fn execute<I, R>(
        &mut self,
        context: &RunContext,
        files: &FileSet,
        invoker: &mut I,
        reporter: &R,
    ) -> Result<RunSummary>
    where
        I: Invoker + ?Sized,
        R: Reporter + ?Sized,
    {
        if self.state != RunState::NotStarted {
            return Err(BatchError::AlreadyExecuted { state: self.state });
        }

        self.transition(RunState::Running);
        reporter.run_started(&context.root, files.len());

        for (index, spec) in files.iter().enumerate() {
            self.transition(RunState::Checking);
            let path = context.root.join(spec);
            if !path.is_file() {
                self.transition(RunState::Aborted);
                return Err(BatchError::MissingFile {
                    spec: spec.as_path().to_path_buf(),
                    path,
                });
            }

            reporter.file_started(spec, index + 1, files.len());
            if let Err(e) = invoker.invoke(&context.tool, &path) {
                self.transition(RunState::Aborted);
                return Err(e);
            }
            self.checked += 1;
            self.transition(RunState::Checked);
        }

        self.transition(RunState::Done);
        reporter.run_finished(self.checked);
        Ok(RunSummary {
            checked: self.checked,
        })
    }
}

/// Run the checker over `files` with a fresh run.
pub fn run_checks<I, R>(
    context: &RunContext,
    files: &FileSet,
    invoker: &mut I,
    reporter: &R,
) -> Result<RunSummary>
where
    I: Invoker + ?Sized,
    R: Reporter + ?Sized,
{
    CheckRun::new().execute(context, files, invoker, reporter)
}
