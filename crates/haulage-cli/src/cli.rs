//! Command line definitions

use clap::{Parser, Subcommand};
use haulage_types::OutputFormat;

#[derive(Parser)]
#[command(name = "haulage")]
#[command(author, version, about = "Track parcels and load them onto vehicles", long_about = None)]
pub struct Cli {
    /// Output format for printed results
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the REST API server
    Serve {
        /// Address to bind (overrides config)
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on (overrides config)
        #[arg(short, long)]
        port: Option<u16>,

        /// Log filter when RUST_LOG is unset (overrides config)
        #[arg(long)]
        log_level: Option<String>,
    },

    /// Show or edit configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set default bind address
        #[arg(long)]
        set_host: Option<String>,

        /// Set default port
        #[arg(long)]
        set_port: Option<u16>,

        /// Set default log filter
        #[arg(long)]
        set_log_level: Option<String>,

        /// Reset configuration to defaults
        #[arg(long)]
        reset: bool,
    },
}
