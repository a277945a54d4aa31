//! `babyjaybot run` — wires config, Slack transport, SQLite storage and the
//! session together.
//!
//! Startup sequence:
//! 1. Load config (file + env) and validate it
//! 2. Create the Slack RTM transport
//! 3. Create the session over SQLite storage
//! 4. Ctrl+C → session shutdown handle
//! 5. Run until shutdown; a missing database exits with status 1

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use tracing::info;

use babyjay_core::config::load_config;
use babyjay_core::{Session, SessionError};
use babyjay_slack::SlackRtmTransport;
use babyjay_storage::SqliteStorage;

use crate::helpers;

/// Run the bot until Ctrl+C.
pub async fn run(config_path: Option<&Path>) -> Result<()> {
    // 1. Config
    let config = load_config(config_path);
    if let Err(e) = config.validate() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
    let config = Arc::new(config);

    helpers::print_banner();
    println!("  Name:      {}", config.bot.name);
    println!("  Database:  {}", config.db_path().display());
    println!("  Greeting:  #{}", config.bot.greeting_channel);
    println!();
    println!("  Ctrl+C to stop");
    println!();

    // 2. Transport
    let transport = Arc::new(SlackRtmTransport::new(&config.slack, &config.bot.name));

    // 3. Session
    let mut session: Session<SqliteStorage> = Session::new(config.clone(), transport);

    // 4. Ctrl+C
    let shutdown = session.shutdown_handle();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("received Ctrl+C, shutting down");
            shutdown.notify_one();
        }
    });

    // 5. Run
    match session.run().await {
        Ok(()) => {
            println!("  BabyJayBot stopped. Goodbye!");
            Ok(())
        }
        Err(e @ SessionError::MissingDatabase(_)) => {
            eprintln!("Error: {}", e);
            eprintln!("Run `babyjaybot onboard` to create it.");
            std::process::exit(1);
        }
        Err(e) => Err(anyhow::Error::new(e).context("session failed to start")),
    }
}
