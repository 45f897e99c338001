use std::path::PathBuf;
use std::process;

use crate::cli::commands::resolve_dir;
use crate::cli::types::Commands;
use crate::config;
use crate::migrate;

pub fn handle_check_command(command: &Commands, source_dir: Option<&PathBuf>) {
    if let Commands::Check { source, verbose } = command {
        let source_dir = resolve_dir(source.as_ref(), source_dir, "./");

        if !source_dir.exists() {
            log::error!("Source directory does not exist: {}", source_dir.display());
            process::exit(1);
        }

        let config = match config::load_config(&source_dir) {
            Ok(cfg) => cfg,
            Err(e) => {
                log::error!("Failed to load config: {}", e);
                process::exit(1);
            }
        };

        match migrate::check_export(&source_dir, &config) {
            Ok(report) => {
                if *verbose {
                    log::info!("Articles in export: {}", report.articles_seen);
                    log::info!("Images in catalog: {}", report.images_seen);
                }

                for warning in &report.warnings {
                    log::warn!("{}", warning);
                }
                for finding in &report.fatal {
                    log::error!("{}", finding);
                }

                if report.is_clean() {
                    log::info!("Export is ready to migrate.");
                } else {
                    log::error!(
                        "{} findings would abort a migration run.",
                        report.fatal.len()
                    );
                    process::exit(1);
                }
            }
            Err(e) => {
                log::error!("Check failed: {}", e);
                process::exit(1);
            }
        }
    }
}
