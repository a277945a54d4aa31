//! Shared CLI helpers — path expansion, version banner, status marks.

use std::path::{Path, PathBuf};

use colored::Colorize;

/// Expand `~` at the start of a path to the user's home directory.
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs_next::home_dir() {
            return home.join(rest);
        }
    }
    if path == "~" {
        if let Some(home) = dirs_next::home_dir() {
            return home;
        }
    }
    PathBuf::from(path)
}

/// Print the banner shown when the bot starts.
pub fn print_banner() {
    let version = env!("CARGO_PKG_VERSION");
    println!();
    println!("{}  v{}", "🐦 BabyJayBot".cyan().bold(), version.dimmed());
}

/// `✓` when the path exists, `(not found)` otherwise.
pub fn presence_mark(path: &Path) -> String {
    if path.exists() {
        "✓".green().to_string()
    } else {
        "(not found)".red().to_string()
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expand_tilde_home() {
        let result = expand_tilde("~/foo/bar");
        assert!(result.ends_with("foo/bar"));
        assert!(!result.starts_with("~"));
    }

    #[test]
    fn expand_tilde_no_tilde() {
        assert_eq!(expand_tilde("/absolute/path"), PathBuf::from("/absolute/path"));
        assert_eq!(expand_tilde("data/babyjaybot.db"), PathBuf::from("data/babyjaybot.db"));
    }

    #[test]
    fn presence_mark_missing() {
        let dir = tempfile::tempdir().unwrap();
        let mark = presence_mark(&dir.path().join("missing.db"));
        assert!(mark.contains("not found"));
        assert!(presence_mark(dir.path()).contains('✓'));
    }
}
