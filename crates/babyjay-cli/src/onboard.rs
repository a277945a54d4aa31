//! `babyjaybot onboard` — initialize configuration and the database file.
//!
//! - Creates `~/.babyjaybot/config.json` with defaults
//! - Creates the configured database file (empty) so `run` can open it

use std::path::Path;

use anyhow::{Context, Result};
use colored::Colorize;

use babyjay_core::config::{get_config_path, load_config, save_config};

/// Run the onboard command.
pub fn run() -> Result<()> {
    println!();
    println!("{}", "🐦 BabyJayBot — Setup".cyan().bold());
    println!();

    setup(&get_config_path())?;

    println!();
    println!(
        "{}",
        "  Setup complete! Add your Slack token, then run `babyjaybot run`.".green()
    );
    println!();

    Ok(())
}

/// Write the config (if missing) and create the database it points at.
fn setup(config_path: &Path) -> Result<()> {
    // 1. Config
    if config_path.exists() {
        println!(
            "  {} config already exists at {}",
            "✓".green(),
            config_path.display()
        );
    } else {
        let config = load_config(Some(config_path)); // defaults + env
        save_config(&config, Some(config_path))
            .with_context(|| format!("failed to write {}", config_path.display()))?;
        println!(
            "  {} created config at {}",
            "✓".green(),
            config_path.display()
        );
    }

    // 2. Database file
    let config = load_config(Some(config_path));
    create_database(&config.db_path())
}

/// Create an empty database file (and its directory) if it doesn't exist.
fn create_database(path: &Path) -> Result<()> {
    if path.exists() {
        println!("  {} database already exists at {}", "✓".green(), path.display());
        return Ok(());
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    std::fs::write(path, b"")
        .with_context(|| format!("failed to create {}", path.display()))?;
    println!("  {} created database at {}", "✓".green(), path.display());
    Ok(())
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
