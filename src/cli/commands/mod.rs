mod check;
mod clean;
mod migrate;

pub use check::handle_check_command;
pub use clean::handle_clean_command;
pub use migrate::{handle_default_migrate, handle_migrate_command};

use std::path::PathBuf;

/// Resolve a directory from the subcommand flag, the global flag, or a default
pub(crate) fn resolve_dir(
    flag: Option<&PathBuf>,
    global: Option<&PathBuf>,
    default: &str,
) -> PathBuf {
    if let Some(dir) = flag {
        dir.clone()
    } else if let Some(dir) = global {
        dir.clone()
    } else {
        PathBuf::from(default)
    }
}

/// Default destination for the migrated stores
pub(crate) const DEFAULT_DESTINATION: &str = "./newsmig-store";
