use dashboard::cli::{Cli, Command};
use dashboard::commands::{self, Context};
use dashboard::error::DashboardError;
use dashboard::logger::initialize as LoggerInitialize;

use client_core::config::{AppConfig, default_config_dir, load_dotenv};
use client_core::session::{CredentialStore, FileCredentialStore, detect_data_paths};

use std::fs::create_dir_all;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use colored::Colorize;
use log::{debug, error, info};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let json = cli.json;

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            report_error(&e, json);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), DashboardError> {
    // .env feeds both the config directory and the overrides
    let dotenv_path = load_dotenv();

    let config_dir = match cli.config_dir {
        Some(dir) => dir,
        None => default_config_dir()?,
    };

    let mut config = AppConfig::load(&config_dir)?;
    let overrides = config.apply_env_overrides()?;

    let paths = detect_data_paths(config.data_dir_override().as_deref())?;
    create_dir_all(&paths.log_dir).map_err(|e| {
        DashboardError::dashboard(format!("Failed to create log directory: {e}"))
    })?;

    let command = cli.command.unwrap_or(Command::Tui { path: None });
    let console = cli.verbose && !matches!(command, Command::Tui { .. });

    // Initialize logger FIRST
    LoggerInitialize(&paths.log_dir, console)?;

    info!("Shortener dashboard starting");
    match dotenv_path {
        Some(path) => info!("Loaded .env from: {}", path.display()),
        None => debug!("No .env file found - using existing environment variables"),
    }
    for key in overrides {
        info!("Config value overridden by {key}");
    }
    info!("Config directory: {}", config_dir.display());
    info!("Data directory: {} ({:?})", paths.data_dir.display(), paths.source);
    info!("API: {}", config.api.base_url);

    let credentials: Arc<dyn CredentialStore> =
        Arc::new(FileCredentialStore::new(paths.credential_file));
    let ctx = Context::new(config, credentials, cli.json)?;

    commands::run(&ctx, command).await
}

fn report_error(error: &DashboardError, json: bool) {
    if json {
        match serde_json::to_string_pretty(error) {
            Ok(rendered) => eprintln!("{rendered}"),
            Err(_) => eprintln!("{error}"),
        }
        return;
    }

    let (label, message) = match error {
        DashboardError::NotLoggedIn { message, .. } => ("Not logged in:", message),
        DashboardError::Dashboard { message, .. }
        | DashboardError::Core { message, .. }
        | DashboardError::Terminal { message, .. } => ("Error:", message),
    };
    eprintln!("{} {}", label.red().bold(), message);
}
