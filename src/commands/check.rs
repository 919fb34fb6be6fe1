use crate::config::{load_config, BatchConfig};
use crate::core::{FileSet, RunContext};
use crate::errors::Result;
use crate::fileset::{build_file_set, Selection};
use crate::progress::Reporter;
use crate::resolve::{resolve_root, resolve_tool};
use crate::runner::{CheckRun, Invoker, ProcessInvoker, RunSummary};
use std::path::PathBuf;

/// Inputs for a check run, as given on the command line
#[derive(Debug, Clone)]
pub struct CheckOptions {
    pub iteration_dir: PathBuf,
    pub include_list: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub interpreter: Option<String>,
    pub sort: bool,
}

/// Everything resolved before the first file is checked
#[derive(Debug, Clone)]
pub struct PreparedRun {
    pub context: RunContext,
    pub config: BatchConfig,
    pub files: FileSet,
}

/// Resolve root, configuration and checker, then select files.
///
/// Fails before any invocation if the root or checker is missing or the
/// include-list cannot be read.
pub fn prepare_run(options: &CheckOptions) -> Result<PreparedRun> {
    let root = resolve_root(&options.iteration_dir)?;
    let config = load_config(options.config.as_deref(), &root)?
        .with_overrides(options.interpreter.clone(), options.sort);
    let tool = resolve_tool(&root, &config.tool)?;

    let selection = Selection::from_include_list(options.include_list.as_deref());
    let files = build_file_set(&selection, &root, &config)?;
    log::info!("{} file(s) selected", files.len());

    Ok(PreparedRun {
        context: RunContext { root, tool },
        config,
        files,
    })
}

/// Resolve and select without checking anything.
pub fn list_files(options: &CheckOptions) -> Result<FileSet> {
    prepare_run(options).map(|prepared| prepared.files)
}

/// Run the checker over every selected file with a real child process.
pub fn handle_check<R: Reporter + ?Sized>(
    options: &CheckOptions,
    reporter: &R,
) -> Result<RunSummary> {
    check_with(options, reporter, |config| {
        ProcessInvoker::from_interpreter(&config.interpreter)
    })
}

/// Run the checker over every selected file with a caller-supplied invoker.
///
/// `make_invoker` is called once, after files are selected and before the
/// first one is checked.
pub fn check_with<R, I, F>(
    options: &CheckOptions,
    reporter: &R,
    make_invoker: F,
) -> Result<RunSummary>
where
    R: Reporter + ?Sized,
    I: Invoker,
    F: FnOnce(&BatchConfig) -> Result<I>,
{
    let mut run = CheckRun::new();
    let prepared = prepare_run(options).inspect_err(|_| run.abort_before_start())?;
    let mut invoker =
        make_invoker(&prepared.config).inspect_err(|_| run.abort_before_start())?;
    run.execute(&prepared.context, &prepared.files, &mut invoker, reporter)
}
