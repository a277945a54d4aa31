//! BabyJayBot CLI — entry point.
//!
//! # Commands
//!
//! - `babyjaybot run [--config PATH] [--logs] [--json]` — connect and serve
//! - `babyjaybot status` — show configuration and database status
//! - `babyjaybot onboard` — write default config and create the database file

mod helpers;
mod onboard;
mod run;
mod status;

use anyhow::Result;
use clap::{Parser, Subcommand};

// ─────────────────────────────────────────────
// CLI definition
// ─────────────────────────────────────────────

/// 🐦 BabyJayBot — a Slack bot that tells (honest) jokes
#[derive(Parser)]
#[command(name = "babyjaybot", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Connect to Slack and answer mentions
    Run {
        /// Config file (defaults to ~/.babyjaybot/config.json)
        #[arg(short, long)]
        config: Option<String>,

        /// Enable debug logging
        #[arg(long, default_value_t = false)]
        logs: bool,

        /// Emit logs as JSON lines
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Show configuration and database status
    Status,

    /// Initialize configuration and the database file
    Onboard,
}

// ─────────────────────────────────────────────
// Entrypoint
// ─────────────────────────────────────────────

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run { config, logs, json } => {
            init_logging(logs, json);
            let config_path = config.as_deref().map(helpers::expand_tilde);
            run::run(config_path.as_deref()).await
        }
        Commands::Status => status::run(),
        Commands::Onboard => onboard::run(),
    }
}

/// Log filter: `RUST_LOG` wins when set, otherwise `--logs` picks debug.
fn log_filter(verbose: bool, env: Option<String>) -> String {
    match env {
        Some(directives) if !directives.trim().is_empty() => directives,
        _ if verbose => "babyjay=debug,info".to_string(),
        _ => "warn".to_string(),
    }
}

/// Initialize tracing/logging.
fn init_logging(verbose: bool, json: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::new(log_filter(verbose, std::env::var("RUST_LOG").ok()));

    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .init();
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
