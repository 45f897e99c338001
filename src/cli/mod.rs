pub mod commands;
pub mod logging;
pub mod types;

use clap::Parser;

/// Run the command-line interface
pub fn run() {
    let cli = types::Cli::parse();

    // Initialize logging system
    logging::init_logging(cli.debug);

    // Configure backtrace
    logging::configure_backtrace(cli.trace);

    match &cli.command {
        Some(types::Commands::Migrate { .. }) => {
            commands::handle_migrate_command(
                cli.command.as_ref().unwrap(),
                cli.source.as_ref(),
                cli.destination.as_ref(),
            );
        }
        Some(types::Commands::Check { .. }) => {
            commands::handle_check_command(cli.command.as_ref().unwrap(), cli.source.as_ref());
        }
        Some(types::Commands::Clean { .. }) => {
            commands::handle_clean_command(cli.command.as_ref().unwrap(), cli.destination.as_ref());
        }
        None => {
            // Default to the migrate command when none is given
            commands::handle_default_migrate(cli.source.as_ref(), cli.destination.as_ref());
        }
    }
}
