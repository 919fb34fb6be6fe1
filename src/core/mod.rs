pub mod types;

pub use types::{FileSet, FileSpec, ProjectRoot, RunContext, ToolPath};
