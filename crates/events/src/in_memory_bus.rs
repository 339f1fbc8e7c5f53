//! In-memory publisher for tests/dev.

use std::sync::Mutex;

use async_trait::async_trait;
use tokio::sync::mpsc;

use crate::bus::{MessagePublisher, PublishError, Subscription};
use crate::message::OutboundMessage;

/// In-memory publisher.
///
/// - No IO
/// - Keeps every published message (inspect with [`InMemoryPublisher::published`])
/// - Best-effort fan-out to live subscribers
#[derive(Debug, Default)]
pub struct InMemoryPublisher {
    subscribers: Mutex<Vec<mpsc::UnboundedSender<OutboundMessage>>>,
    published: Mutex<Vec<OutboundMessage>>,
}

impl InMemoryPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self) -> Subscription<OutboundMessage> {
        let (tx, rx) = mpsc::unbounded_channel();

        // If the lock is poisoned, we still return a subscription;
        // it just won't receive messages.
        if let Ok(mut subs) = self.subscribers.lock() {
            subs.push(tx);
        }

        Subscription::new(rx)
    }

    /// Snapshot of every message published so far, oldest first.
    pub fn published(&self) -> Vec<OutboundMessage> {
        self.published
            .lock()
            .map(|log| log.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl MessagePublisher for InMemoryPublisher {
    async fn publish(&self, message: OutboundMessage) -> Result<(), PublishError> {
        self.published
            .lock()
            .map_err(|_| PublishError::Closed)?
            .push(message.clone());

        let mut subs = self.subscribers.lock().map_err(|_| PublishError::Closed)?;
        // Drop any dead subscribers while publishing.
        subs.retain(|tx| tx.send(message.clone()).is_ok());

        tracing::debug!(topic = message.topic(), "message published in memory");
        Ok(())
    }
}
