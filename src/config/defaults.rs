use crate::config::types::MigrationConfig;

// Business rules carried over from the legacy migration script.
pub const DEFAULT_USER: &str = "admin";
pub const DEFAULT_FOLDER_NAME: &str = "News images";
pub const DEFAULT_ARTICLE_LIMIT: usize = 666;
pub const DEFAULT_TIMEZONE: &str = "Europe/Prague";
pub const DEFAULT_PUBLISH_HOUR_OFFSET: i64 = 6;
pub const DEFAULT_MEDIA_BASE_URL: &str = "/media";
pub const DEFAULT_DATA_DIR: &str = "data_for_migration";

/// Built-in configuration defaults
pub fn default_config() -> MigrationConfig {
    MigrationConfig {
        user: DEFAULT_USER.to_string(),
        folder_name: DEFAULT_FOLDER_NAME.to_string(),
        article_limit: DEFAULT_ARTICLE_LIMIT,
        timezone: DEFAULT_TIMEZONE.to_string(),
        publish_hour_offset: DEFAULT_PUBLISH_HOUR_OFFSET,
        media_base_url: DEFAULT_MEDIA_BASE_URL.to_string(),
        data_dir: DEFAULT_DATA_DIR.to_string(),
    }
}
