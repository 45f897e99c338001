mod defaults;
mod loader;
mod types;
mod validation;

pub use loader::{load_config, CONFIG_FILE};
pub use types::MigrationConfig;
pub use validation::validate_config;
