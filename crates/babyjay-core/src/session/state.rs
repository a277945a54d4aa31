//! Session lifecycle states.

use std::fmt;

/// Where the session is in its lifecycle.
///
/// ```text
/// Disconnected → Connecting → Connected → Running
///       └──────────────→ Terminated (missing database, before connecting)
/// ```
///
/// Transport errors never move the session; it stays `Running` until shut
/// down.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionState {
    Disconnected,
    Connecting,
    /// Start event handled, identity resolved.
    Connected,
    Running,
    /// Fatal startup failure.
    Terminated,
}

impl SessionState {
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionState::Disconnected => "disconnected",
            SessionState::Connecting => "connecting",
            SessionState::Connected => "connected",
            SessionState::Running => "running",
            SessionState::Terminated => "terminated",
        }
    }
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
