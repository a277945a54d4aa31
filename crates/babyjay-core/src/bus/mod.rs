//! Event bus — transport events flowing into the session loop.

pub mod queue;
pub mod types;

pub use queue::EventBus;
pub use types::TransportEvent;
