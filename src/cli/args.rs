use crate::commands::CheckOptions;
use crate::resolve::DEFAULT_ITERATION_DIR;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "batchlint")]
#[command(
    about = "Runs the Google C++ Style Guide checker on every .h and .cc file in an iteration's \
             'src/include' and 'src' directories, or only on those named in an include list"
)]
#[command(version)]
pub struct Cli {
    /// Directory of the iteration you want to check
    #[arg(value_name = "ITERATION_DIR", default_value = DEFAULT_ITERATION_DIR)]
    pub iteration_dir: PathBuf,

    /// Text file naming the files to check, one per line, relative to ITERATION_DIR.
    /// The list ends at the first blank line.
    #[arg(long = "include-list", visible_alias = "include_list", value_name = "FILE")]
    pub include_list: Option<PathBuf>,

    /// Configuration file (defaults to ITERATION_DIR/.batchlint.toml when present)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Program used to run the checker script; empty runs the script directly
    #[arg(long, env = "BATCHLINT_INTERPRETER", value_name = "PROGRAM")]
    pub interpreter: Option<String>,

    /// Sort discovered files by name within each directory
    #[arg(long)]
    pub sort: bool,

    /// Print the selected files and exit without running the checker
    #[arg(long, conflicts_with = "init")]
    pub list: bool,

    /// Write a default .batchlint.toml into ITERATION_DIR and exit
    #[arg(long)]
    pub init: bool,

    /// Overwrite an existing configuration file with --init
    #[arg(long, requires = "init")]
    pub force: bool,

    /// Disable colored banners
    #[arg(long)]
    pub plain: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbosity: u8,
}

impl Cli {
    pub fn check_options(&self) -> CheckOptions {
        CheckOptions {
            iteration_dir: self.iteration_dir.clone(),
            include_list: self.include_list.clone(),
            config: self.config.clone(),
            interpreter: self.interpreter.clone(),
            sort: self.sort,
        }
    }
}
