//! Bus event types — what the transport pushes towards the session.

use crate::types::{InboundEvent, Snapshot};

/// One notification from the transport.
///
/// The three variants are the three subscriptions the session cares about:
/// `start` (once, with the workspace snapshot), `message` (per real-time
/// event) and `error` (transport fault, logged only).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TransportEvent {
    Start(Snapshot),
    Message(InboundEvent),
    Error(String),
}

impl TransportEvent {
    /// Short kind label, used in log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            TransportEvent::Start(_) => "start",
            TransportEvent::Message(_) => "message",
            TransportEvent::Error(_) => "error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_kinds() {
        assert_eq!(TransportEvent::Start(Snapshot::default()).kind(), "start");
        assert_eq!(
            TransportEvent::Message(InboundEvent::message("hi", "C1", "U1")).kind(),
            "message"
        );
        assert_eq!(TransportEvent::Error("boom".into()).kind(), "error");
    }
}
