//! Reply text sources.
//!
//! The dispatcher decides *whether* to reply; a [`TextSource`] decides *what*
//! to say.

use std::sync::atomic::{AtomicUsize, Ordering};

/// Line used when there is nothing else to say.
pub const PLACEHOLDER_TEXT: &str = "Goo goo ga ga! (I'm out of jokes.)";

/// Supplies reply text for mentions.
pub trait TextSource: Send + Sync {
    fn next_text(&self) -> String;
}

/// Cycles through a fixed list of jokes.
pub struct CannedJokes {
    jokes: Vec<String>,
    cursor: AtomicUsize,
}

impl CannedJokes {
    pub fn new(jokes: Vec<String>) -> Self {
        Self {
            jokes,
            cursor: AtomicUsize::new(0),
        }
    }
}

impl TextSource for CannedJokes {
    fn next_text(&self) -> String {
        if self.jokes.is_empty() {
            return PLACEHOLDER_TEXT.to_string();
        }
        let idx = self.cursor.fetch_add(1, Ordering::Relaxed) % self.jokes.len();
        self.jokes[idx].clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_robin() {
        let source = CannedJokes::new(vec!["a".into(), "b".into()]);
        assert_eq!(source.next_text(), "a");
        assert_eq!(source.next_text(), "b");
        assert_eq!(source.next_text(), "a");
    }

    #[test]
    fn test_empty_list_uses_placeholder() {
        let source = CannedJokes::new(Vec::new());
        assert_eq!(source.next_text(), PLACEHOLDER_TEXT);
        assert_eq!(source.next_text(), PLACEHOLDER_TEXT);
    }
}
