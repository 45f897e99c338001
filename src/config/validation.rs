use chrono_tz::Tz;

use crate::config::types::MigrationConfig;
use crate::utils::error::MigrateError;

/// Check a configuration for values the migration cannot run with.
pub fn validate_config(config: &MigrationConfig) -> Result<(), MigrateError> {
    if config.user.is_empty() {
        return Err(MigrateError::Config("user must not be empty".into()));
    }

    if config.folder_name.is_empty() {
        return Err(MigrateError::Config("folder_name must not be empty".into()));
    }

    if config.article_limit == 0 {
        return Err(MigrateError::Config(
            "article_limit must be greater than zero".into(),
        ));
    }

    if config.timezone.parse::<Tz>().is_err() {
        return Err(MigrateError::Config(format!(
            "unknown timezone: {}",
            config.timezone
        )));
    }

    if !(0..24).contains(&config.publish_hour_offset) {
        return Err(MigrateError::Config(format!(
            "publish_hour_offset must be between 0 and 23, got {}",
            config.publish_hour_offset
        )));
    }

    Ok(())
}
