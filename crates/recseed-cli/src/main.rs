//! recseed - main entry point

use clap::Parser;
use recseed_cli::{commands, Cli, Commands, Config};
use recseed_common::logging::{init_logging, LogConfig, LogLevel};
use std::process;
use tracing::error;

#[tokio::main]
async fn main() {
    // Load .env before anything reads the environment
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Initialize logging; --verbose lowers the console level to debug
    let mut log_config = LogConfig::from_env().unwrap_or_default();
    if cli.verbose {
        log_config.level = LogLevel::Debug;
    }

    // The CLI must keep working even when logging cannot be set up
    let _ = init_logging(&log_config);

    if let Err(e) = execute_command(cli).await {
        error!(error = %e, "Command failed");
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

/// Execute the CLI command
async fn execute_command(cli: Cli) -> recseed_cli::Result<()> {
    let mut config = Config::from_env()?;
    if let Some(url) = cli.api_url {
        config.api_url = Some(url);
    }

    match cli.command {
        Commands::Run {
            csv,
            limit,
            users,
            skip_users,
            seed,
        } => commands::run::run(&config, csv, limit, users, skip_users, seed).await,

        Commands::Check => commands::check::run(&config).await,
    }
}
