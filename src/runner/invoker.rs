//! Launching the style checker.

use crate::core::ToolPath;
use crate::errors::{BatchError, Result};
use std::path::{Path, PathBuf};
use std::process::Command;

/// Runs the checker on one file.
///
/// Implementations block until the checker finishes. The checker's exit
/// status and output belong to the operator, so only a failure to run it
/// at all is reported back.
pub trait Invoker {
    fn invoke(&mut self, tool: &ToolPath, file: &Path) -> Result<()>;
}

/// Invoker that spawns the checker as a foreground child process.
///
/// The child inherits stdin, stdout and stderr.
#[derive(Debug, Clone)]
pub struct ProcessInvoker {
    interpreter: Option<PathBuf>,
}

impl ProcessInvoker {
    /// Locate `interpreter` on `PATH`. An empty name runs the checker directly.
    pub fn from_interpreter(interpreter: &str) -> Result<Self> {
        if interpreter.is_empty() {
            log::info!("Running checker directly, without an interpreter");
            return Ok(Self { interpreter: None });
        }

        let path = which::which(interpreter).map_err(|source| BatchError::InterpreterNotFound {
            name: interpreter.to_string(),
            source,
        })?;
        log::info!("Interpreter: {}", path.display());
        Ok(Self {
            interpreter: Some(path),
        })
    }

    fn command(&self, tool: &ToolPath, file: &Path) -> Command {
        let mut command = match &self.interpreter {
            Some(interpreter) => {
                let mut command = Command::new(interpreter);
                command.arg(tool.as_path());
                command
            }
            None => Command::new(tool.as_path()),
        };
        command.arg(file);
        command
    }
}

impl Invoker for ProcessInvoker {
    fn invoke(&mut self, tool: &ToolPath, file: &Path) -> Result<()> {
        let status = self
            .command(tool, file)
            .status()
            .map_err(|source| BatchError::Spawn {
                path: file.to_path_buf(),
                source,
            })?;
        log::debug!("Checker exited with {} for {}", status, file.display());
        Ok(())
    }
}
