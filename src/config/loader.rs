use std::fs;
use std::path::Path;

use crate::config::types::MigrationConfig;
use crate::config::validation::validate_config;
use crate::utils::error::MigrateError;

/// Name of the optional per-export configuration file
pub const CONFIG_FILE: &str = "newsmig.yml";

/// Load configuration for a run: built-in defaults, overlaid by
/// `newsmig.yml` in the source directory when present. Fields missing from
/// the file keep their defaults.
pub fn load_config(source_dir: &Path) -> Result<MigrationConfig, MigrateError> {
    let path = source_dir.join(CONFIG_FILE);

    let config = if path.exists() {
        let raw = fs::read_to_string(&path)
            .map_err(|e| MigrateError::Config(format!("failed to read {}: {}", path.display(), e)))?;
        serde_yaml::from_str(&raw)
            .map_err(|e| MigrateError::Config(format!("failed to parse {}: {}", path.display(), e)))?
    } else {
        MigrationConfig::default()
    };

    validate_config(&config)?;

    Ok(config)
}
