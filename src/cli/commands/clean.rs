use std::path::PathBuf;
use std::process;

use crate::cli::commands::{resolve_dir, DEFAULT_DESTINATION};
use crate::cli::types::Commands;
use crate::utils::fs::remove_directory;

pub fn handle_clean_command(command: &Commands, destination_dir: Option<&PathBuf>) {
    if let Commands::Clean { destination } = command {
        let destination_dir = resolve_dir(destination.as_ref(), destination_dir, DEFAULT_DESTINATION);

        if !destination_dir.exists() {
            log::info!("Nothing to clean at {}", destination_dir.display());
            return;
        }

        match remove_directory(&destination_dir) {
            Ok(()) => log::info!("Removed {}", destination_dir.display()),
            Err(e) => {
                log::error!("Failed to remove {}: {}", destination_dir.display(), e);
                process::exit(1);
            }
        }
    }
}
