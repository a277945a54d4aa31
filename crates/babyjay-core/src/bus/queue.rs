//! Event bus — bounded queue between the transport and the session loop.
//!
//! Uses a tokio::sync::mpsc bounded channel. The transport is the producer;
//! the session controller is the only consumer, so events are handled one at
//! a time in arrival order.

use super::types::TransportEvent;
use tokio::sync::mpsc;

/// The queue connecting transport → session.
pub struct EventBus {
    tx: mpsc::Sender<TransportEvent>,
    rx: tokio::sync::Mutex<mpsc::Receiver<TransportEvent>>,
}

impl EventBus {
    /// Create a new event bus with the given buffer capacity.
    pub fn new(buffer_size: usize) -> Self {
        let (tx, rx) = mpsc::channel(buffer_size);

        EventBus {
            tx,
            rx: tokio::sync::Mutex::new(rx),
        }
    }

    /// Publish an event from the transport.
    pub async fn publish(
        &self,
        event: TransportEvent,
    ) -> Result<(), mpsc::error::SendError<TransportEvent>> {
        self.tx.send(event).await
    }

    /// Consume the next event (blocks until available).
    ///
    /// The bus keeps its own sender alive, so this only returns `None` if the
    /// bus itself is being torn down.
    pub async fn consume(&self) -> Option<TransportEvent> {
        let mut rx = self.rx.lock().await;
        rx.recv().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{InboundEvent, Snapshot};

    #[tokio::test]
    async fn test_event_flow() {
        let bus = EventBus::new(10);

        bus.publish(TransportEvent::Start(Snapshot::default()))
            .await
            .unwrap();

        let received = bus.consume().await.unwrap();
        assert_eq!(received, TransportEvent::Start(Snapshot::default()));
    }

    #[tokio::test]
    async fn test_event_ordering() {
        let bus = EventBus::new(10);

        for i in 1..=3 {
            let event = InboundEvent::message(format!("msg-{}", i), "C1", "U1");
            bus.publish(TransportEvent::Message(event)).await.unwrap();
        }

        for i in 1..=3 {
            match bus.consume().await.unwrap() {
                TransportEvent::Message(event) => {
                    assert_eq!(event.text, Some(format!("msg-{}", i)));
                }
                other => panic!("unexpected event: {:?}", other),
            }
        }
    }

    #[tokio::test]
    async fn test_publish_from_task() {
        let bus = std::sync::Arc::new(EventBus::new(10));
        let producer = bus.clone();

        let handle = tokio::spawn(async move {
            producer
                .publish(TransportEvent::Error("socket closed".into()))
                .await
                .unwrap();
        });
        handle.await.unwrap();

        let received = bus.consume().await.unwrap();
        assert_eq!(received, TransportEvent::Error("socket closed".into()));
    }
}
