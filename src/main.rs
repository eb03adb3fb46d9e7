//! sharedsettings - shared project settings synchronizer
//!
//! Propagates a canonical LICENSE, build settings file and CI workflow from a
//! remote source into every sibling project that opts in with a marker file.

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod config;
mod discovery;
mod distribute;
mod error;
mod fetch;
mod sync;
#[cfg(test)]
mod test_fixtures;

use cli::Cli;
use config::SyncConfig;
use fetch::HttpSource;

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = SyncConfig::default();

    if let Err(e) = sync::run(&config, HttpSource::new) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
