use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Main CLI parser structure
#[derive(Parser)]
#[command(name = "newsmig")]
#[command(about = "Migrates legacy news exports into a blog store and media library", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Source directory containing the export (defaults to ./)
    #[arg(short, long, value_name = "DIR")]
    pub source: Option<PathBuf>,

    /// Destination directory for the migrated stores (defaults to ./newsmig-store)
    #[arg(short, long, value_name = "DIR")]
    pub destination: Option<PathBuf>,

    /// Show the full backtrace when an error occurs
    #[arg(short, long, default_value_t = false)]
    pub trace: bool,

    /// Enable verbose debugging
    #[arg(short = 'g', long, default_value_t = false)]
    pub debug: bool,
}

/// Subcommands for the CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Run the migration
    #[command(alias = "m")]
    Migrate {
        /// Source directory containing the export
        #[arg(short, long, value_name = "DIR")]
        source: Option<PathBuf>,

        /// Destination directory for the migrated stores
        #[arg(short, long, value_name = "DIR")]
        destination: Option<PathBuf>,

        /// Owner recorded on created records (overrides the config file)
        #[arg(short, long, value_name = "NAME")]
        user: Option<String>,

        /// Maximum number of input entries to examine (overrides the config file)
        #[arg(short, long, value_name = "N")]
        limit: Option<usize>,

        /// Destination media folder name (overrides the config file)
        #[arg(short, long, value_name = "NAME")]
        folder: Option<String>,

        /// Print verbose output
        #[arg(short = 'V', long, default_value_t = false)]
        verbose: bool,
    },

    /// Validate an export without writing anything
    #[command(alias = "c")]
    Check {
        /// Source directory containing the export
        #[arg(short, long, value_name = "DIR")]
        source: Option<PathBuf>,

        /// Print verbose output
        #[arg(short = 'V', long, default_value_t = false)]
        verbose: bool,
    },

    /// Remove the destination stores
    Clean {
        /// Destination directory to remove
        #[arg(short, long, value_name = "DIR")]
        destination: Option<PathBuf>,
    },
}
