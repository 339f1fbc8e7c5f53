//! Outbound messaging for integration events (broker-agnostic mechanics).

pub mod bus;
pub mod in_memory_bus;
pub mod message;

pub use bus::{MessagePublisher, PublishError, Subscription};
pub use in_memory_bus::InMemoryPublisher;
pub use message::OutboundMessage;
