//! Message publishing abstraction (mechanics only).
//!
//! The query layer emits integration events (e.g. "switch this country to
//! online sale") through a [`MessagePublisher`]. The contract is deliberately
//! thin:
//!
//! - **Transport-agnostic**: in-memory channels, Redis pub/sub, a Kafka-style broker.
//! - **Fire-and-forget at the call site**: callers may detach the publish and
//!   never observe its outcome.
//! - **No delivery guarantees here**: durability and retries belong to the broker.

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;
use tokio::sync::mpsc::UnboundedReceiver;

use crate::message::OutboundMessage;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PublishError {
    /// The transport refused or dropped the message.
    #[error("transport error: {0}")]
    Transport(String),

    /// The publisher has been shut down.
    #[error("publisher closed")]
    Closed,
}

/// A subscription to published messages.
///
/// Each subscription gets a copy of every message published after it was
/// created (broadcast semantics). Used by tests and local consumers.
#[derive(Debug)]
pub struct Subscription<M> {
    receiver: UnboundedReceiver<M>,
}

impl<M> Subscription<M> {
    pub fn new(receiver: UnboundedReceiver<M>) -> Self {
        Self { receiver }
    }

    /// Wait for the next message; `None` once the publisher is gone.
    pub async fn recv(&mut self) -> Option<M> {
        self.receiver.recv().await
    }
}

/// Sink for outbound integration messages.
///
/// `publish` resolves once the transport has accepted the message. The
/// trait requires `Send + Sync` so one publisher can serve every request.
#[async_trait]
pub trait MessagePublisher: Send + Sync {
    async fn publish(&self, message: OutboundMessage) -> Result<(), PublishError>;
}

#[async_trait]
impl<P> MessagePublisher for Arc<P>
where
    P: MessagePublisher + ?Sized,
{
    async fn publish(&self, message: OutboundMessage) -> Result<(), PublishError> {
        (**self).publish(message).await
    }
}
