// src/main.rs

use anyhow::Result;
use clap::Parser;
use repo_scribe::cli::Cli;
use repo_scribe::run;
use repo_scribe::ConfigBuilder;

fn main() -> Result<()> {
    // Initialize logging. Default to 'warn' if RUST_LOG is not set.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    log::info!("Starting repo-scribe v{}...", env!("CARGO_PKG_VERSION"));
    log::debug!("Raw arguments: {:?}", std::env::args().collect::<Vec<_>>());

    let args = Cli::parse();

    let config = ConfigBuilder::from_cli(args).build()?;
    log::debug!("Configuration built successfully: {:?}", config);

    if let Err(e) = run(&config) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}
