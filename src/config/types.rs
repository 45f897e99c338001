use serde::Deserialize;

use crate::config::defaults;

/// Migration settings, merged from built-in defaults, the optional
/// `newsmig.yml` file in the source directory, and command-line overrides.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MigrationConfig {
    /// Owner recorded on created folders, images and articles
    pub user: String,
    /// Destination media folder for uploaded images
    pub folder_name: String,
    /// Maximum number of input entries examined per run
    pub article_limit: usize,
    /// IANA timezone publish timestamps are localized to
    pub timezone: String,
    /// Hours added to the source date before localization
    pub publish_hour_offset: i64,
    /// Base URL stored images are served under
    pub media_base_url: String,
    /// Name of the export data directory inside the source
    pub data_dir: String,
}

impl Default for MigrationConfig {
    fn default() -> Self {
        defaults::default_config()
    }
}
