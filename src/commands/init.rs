use crate::config::{BatchConfig, CONFIG_FILE_NAME};
use crate::errors::{BatchError, Result};
use crate::resolve::resolve_root;
use std::path::{Path, PathBuf};

/// Write a default `.batchlint.toml` into the project root.
///
/// Refuses to replace an existing file unless `force` is set.
pub fn init_config(iteration_dir: &Path, force: bool) -> Result<PathBuf> {
    let root = resolve_root(iteration_dir)?;
    let config_path = root.as_path().join(CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        return Err(BatchError::config(
            &config_path,
            "configuration file already exists, use --force to overwrite",
        ));
    }

    let contents = toml::to_string_pretty(&BatchConfig::default())
        .map_err(|e| BatchError::config(&config_path, e.to_string()))?;
    std::fs::write(&config_path, contents).map_err(|e| BatchError::io(&config_path, e))?;
    log::info!("Created {}", config_path.display());

    Ok(config_path)
}
