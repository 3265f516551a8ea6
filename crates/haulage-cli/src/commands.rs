//! Command implementations

use haulage_app::config::Config;
use haulage_app::repository::open_memory_storage;
use haulage_server::AppState;
use haulage_types::{OutputFormat, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::{Cli, Commands};

pub async fn execute(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Serve {
            host,
            port,
            log_level,
        } => {
            let mut config = Config::load()?;
            if let Some(host) = host {
                config.host = host;
            }
            if let Some(port) = port {
                config.port = port;
            }
            if let Some(level) = log_level {
                config.log_level = level;
            }
            cmd_serve(config).await
        }
        Commands::Config {
            show,
            set_host,
            set_port,
            set_log_level,
            reset,
        } => cmd_config(cli.format, show, set_host, set_port, set_log_level, reset),
    }
}

fn init_tracing(log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

async fn cmd_serve(config: Config) -> Result<()> {
    init_tracing(&config.log_level);
    tracing::info!("haulage v{}", env!("CARGO_PKG_VERSION"));

    let state = AppState::new(open_memory_storage());
    haulage_server::serve(&config, state).await
}

fn cmd_config(
    format: OutputFormat,
    show: bool,
    set_host: Option<String>,
    set_port: Option<u16>,
    set_log_level: Option<String>,
    reset: bool,
) -> Result<()> {
    if reset {
        let config = Config::default();
        config.save()?;
        println!("Configuration reset to defaults");
        print_config(format, &config)?;
        return Ok(());
    }

    let mut config = Config::load()?;
    let mut modified = false;

    if let Some(host) = set_host {
        config.host = host;
        modified = true;
    }

    if let Some(port) = set_port {
        config.port = port;
        modified = true;
    }

    if let Some(level) = set_log_level {
        config.log_level = level;
        modified = true;
    }

    if modified {
        config.save()?;
        println!("Configuration updated");
    }

    if show || !modified {
        print_config(format, &config)?;
    }

    Ok(())
}

fn print_config(format: OutputFormat, config: &Config) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(config)?),
        OutputFormat::Table => println!("\n{}", config),
    }
    Ok(())
}
