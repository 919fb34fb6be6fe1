use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use super::BatchConfig;
use crate::core::ProjectRoot;
use crate::errors::{BatchError, Result};

/// File looked up in the project root when no `--config` is given
pub const CONFIG_FILE_NAME: &str = ".batchlint.toml";

/// Pure function to read config file contents
fn read_config_file(path: &Path) -> std::io::Result<String> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Pure function to parse config from a TOML string
pub fn parse_config(contents: &str) -> std::result::Result<BatchConfig, String> {
    toml::from_str::<BatchConfig>(contents).map_err(|e| e.to_string())
}

/// Load the run configuration.
///
/// An explicit path must exist. Without one, `.batchlint.toml` in the
/// project root is used when present and defaults apply otherwise.
pub fn load_config(explicit: Option<&Path>, root: &ProjectRoot) -> Result<BatchConfig> {
    let (path, required) = match explicit {
        Some(path) => (path.to_path_buf(), true),
        None => (root.as_path().join(CONFIG_FILE_NAME), false),
    };

    let contents = match read_config_file(&path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound && !required => {
            log::debug!("No {} in {}, using defaults", CONFIG_FILE_NAME, root);
            return Ok(BatchConfig::default());
        }
        Err(e) => return Err(read_error(path, &e)),
    };

    let config = parse_config(&contents).map_err(|message| BatchError::config(&path, message))?;
    log::debug!("Loaded config from {}", path.display());
    Ok(config)
}

fn read_error(path: PathBuf, error: &std::io::Error) -> BatchError {
    let message = if error.kind() == std::io::ErrorKind::NotFound {
        "file does not exist".to_string()
    } else {
        error.to_string()
    };
    BatchError::config(path, message)
}
