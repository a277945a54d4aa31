//! Identity resolution — which roster entry is the bot itself.

use crate::types::RosterEntry;

/// The bot's own identity for the lifetime of a session.
///
/// `resolved_user_id` stays `None` when the configured name is not in the
/// roster. Nothing downstream treats that as an error; the classifier just
/// never recognises a message as coming from the bot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Identity {
    pub name: String,
    pub resolved_user_id: Option<String>,
}

impl Identity {
    /// Resolve the bot's identity against a roster snapshot.
    pub fn resolve(configured_name: &str, roster: &[RosterEntry]) -> Self {
        Identity {
            name: configured_name.to_string(),
            resolved_user_id: resolve_identity(configured_name, roster).map(|u| u.id.clone()),
        }
    }

    pub fn is_resolved(&self) -> bool {
        self.resolved_user_id.is_some()
    }
}

/// First roster entry whose name equals `configured_name` exactly.
///
/// Duplicate names resolve to the earliest entry in roster order.
pub fn resolve_identity<'a>(
    configured_name: &str,
    roster: &'a [RosterEntry],
) -> Option<&'a RosterEntry> {
    roster.iter().find(|user| user.name == configured_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster() -> Vec<RosterEntry> {
        vec![
            RosterEntry::new("1", "alice"),
            RosterEntry::new("2", "babyjaybot"),
        ]
    }

    #[test]
    fn test_resolves_matching_entry() {
        let roster = roster();
        let found = resolve_identity("babyjaybot", &roster).unwrap();
        assert_eq!(found.id, "2");
    }

    #[test]
    fn test_no_match_is_absent() {
        let roster = roster();
        assert!(resolve_identity("norrisbot", &roster).is_none());
    }

    #[test]
    fn test_empty_roster() {
        assert!(resolve_identity("babyjaybot", &[]).is_none());
    }

    #[test]
    fn test_match_is_exact() {
        let roster = vec![RosterEntry::new("3", "BabyJayBot")];
        assert!(resolve_identity("babyjaybot", &roster).is_none());
    }

    #[test]
    fn test_duplicates_take_first() {
        let roster = vec![
            RosterEntry::new("7", "babyjaybot"),
            RosterEntry::new("8", "babyjaybot"),
        ];
        assert_eq!(resolve_identity("babyjaybot", &roster).unwrap().id, "7");
    }

    #[test]
    fn test_identity_resolve() {
        let identity = Identity::resolve("babyjaybot", &roster());
        assert_eq!(identity.name, "babyjaybot");
        assert_eq!(identity.resolved_user_id.as_deref(), Some("2"));
        assert!(identity.is_resolved());

        let missing = Identity::resolve("ghost", &roster());
        assert!(!missing.is_resolved());
    }
}
