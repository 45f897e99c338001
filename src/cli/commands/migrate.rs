use std::path::PathBuf;
use std::process;

use crate::cli::commands::{resolve_dir, DEFAULT_DESTINATION};
use crate::cli::types::Commands;
use crate::config;
use crate::migrate;

pub fn handle_migrate_command(
    command: &Commands,
    source_dir: Option<&PathBuf>,
    destination_dir: Option<&PathBuf>,
) {
    if let Commands::Migrate {
        source,
        destination,
        user,
        limit,
        folder,
        verbose,
    } = command
    {
        let source_dir = resolve_dir(source.as_ref(), source_dir, "./");
        let destination_dir = resolve_dir(destination.as_ref(), destination_dir, DEFAULT_DESTINATION);

        if !source_dir.exists() {
            log::error!("Source directory does not exist: {}", source_dir.display());
            process::exit(1);
        }

        let mut config = match config::load_config(&source_dir) {
            Ok(cfg) => cfg,
            Err(e) => {
                log::error!("Failed to load config: {}", e);
                process::exit(1);
            }
        };

        // Command-line overrides
        if let Some(user) = user {
            config.user = user.clone();
        }
        if let Some(limit) = limit {
            config.article_limit = *limit;
        }
        if let Some(folder) = folder {
            config.folder_name = folder.clone();
        }
        if let Err(e) = config::validate_config(&config) {
            log::error!("{}", e);
            process::exit(1);
        }

        if *verbose {
            log::info!("Source directory: {}", source_dir.display());
            log::info!("Destination directory: {}", destination_dir.display());
        }

        let options = migrate::MigrationOptions {
            source_dir,
            dest_dir: destination_dir.clone(),
            config,
            verbose: *verbose,
        };

        match migrate::run_migration(&options) {
            Ok(summary) => {
                match migrate::generate_migration_report(&summary, &destination_dir) {
                    Ok(report_path) => {
                        log::info!("Migration report generated at: {}", report_path.display())
                    }
                    Err(e) => log::error!("Failed to generate migration report: {}", e),
                }

                migrate::print_summary(&summary);
            }
            Err(e) => {
                log::error!("Migration failed: {}", e);
                process::exit(1);
            }
        }
    }
}

/// Run the migration with no subcommand flags (bare `newsmig`)
pub fn handle_default_migrate(source_dir: Option<&PathBuf>, destination_dir: Option<&PathBuf>) {
    let command = Commands::Migrate {
        source: None,
        destination: None,
        user: None,
        limit: None,
        folder: None,
        verbose: false,
    };

    handle_migrate_command(&command, source_dir, destination_dir);
}
