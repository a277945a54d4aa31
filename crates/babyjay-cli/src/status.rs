//! `babyjaybot status` — show configuration and database status.

use anyhow::Result;
use colored::Colorize;

use babyjay_core::config::{get_config_path, load_config};

use crate::helpers::presence_mark;

/// Run the status command.
pub fn run() -> Result<()> {
    let config_path = get_config_path();
    let config = load_config(None);

    println!();
    println!("{}", "🐦 BabyJayBot Status".cyan().bold());
    println!();

    // Config
    println!(
        "  {:<14} {} {}",
        "Config:".bold(),
        config_path.display(),
        presence_mark(&config_path)
    );

    // Database
    let db_path = config.db_path();
    println!(
        "  {:<14} {} {}",
        "Database:".bold(),
        db_path.display(),
        presence_mark(&db_path)
    );

    // Bot
    println!("  {:<14} {}", "Name:".bold(), config.bot.name);
    println!("  {:<14} #{}", "Greeting:".bold(), config.bot.greeting_channel);
    println!("  {:<14} {}", "Jokes:".bold(), config.bot.jokes.len());

    // Slack
    println!();
    let token_status = if config.slack.is_configured() {
        format!("{} ({})", "✓".green(), config.slack.masked_token())
    } else {
        format!("{}", "· not configured".dimmed())
    };
    println!("  {:<14} {}", "Slack token:".bold(), token_status);
    println!("  {:<14} {}", "API base:".bold(), config.slack.api_base.dimmed());

    if let Err(e) = config.validate() {
        println!();
        println!("  {} {}", "⚠".yellow(), e);
    }

    println!();

    Ok(())
}
