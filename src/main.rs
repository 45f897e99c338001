// Module declarations
mod blog;
mod cli;
mod config;
mod legacy;
mod media;
mod migrate;
mod utils;

fn main() {
    // Run the CLI
    cli::run();
}
