//! Redis pub/sub-backed publisher (optional).
//!
//! Note: Redis pub/sub is not durable (messages are dropped if no subscriber
//! is listening). The switch-to-online consumer is expected to be online;
//! durability is the broker's concern, not this service's.

use async_trait::async_trait;
use redis::AsyncCommands;
use redis::aio::MultiplexedConnection;
use tokio::sync::Mutex;

use ticketing_events::{MessagePublisher, OutboundMessage, PublishError};

/// Publishes each message on the Redis channel named after its topic.
///
/// One multiplexed connection is opened on first use and shared by every
/// publish. A transport failure discards it; the next publish reconnects.
pub struct RedisPublisher {
    client: redis::Client,
    connection: Mutex<Option<MultiplexedConnection>>,
}

impl RedisPublisher {
    pub fn new(redis_url: impl AsRef<str>) -> Result<Self, PublishError> {
        let client = redis::Client::open(redis_url.as_ref())
            .map_err(|e| PublishError::Transport(e.to_string()))?;
        Ok(Self {
            client,
            connection: Mutex::new(None),
        })
    }

    async fn connection(&self) -> Result<MultiplexedConnection, PublishError> {
        let mut cached = self.connection.lock().await;
        if let Some(conn) = cached.as_ref() {
            return Ok(conn.clone());
        }

        let conn = self
            .client
            .get_multiplexed_async_connection()
            .await
            .map_err(|e| PublishError::Transport(e.to_string()))?;
        tracing::debug!("opened redis connection");
        *cached = Some(conn.clone());
        Ok(conn)
    }

    #[cfg(test)]
    async fn has_connection(&self) -> bool {
        self.connection.lock().await.is_some()
    }
}

impl core::fmt::Debug for RedisPublisher {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RedisPublisher")
            .field("client", &self.client)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl MessagePublisher for RedisPublisher {
    async fn publish(&self, message: OutboundMessage) -> Result<(), PublishError> {
        let mut conn = self.connection().await?;

        let receivers: i64 = match conn.publish(message.topic(), message.payload()).await {
            Ok(n) => n,
            Err(e) => {
                *self.connection.lock().await = None;
                return Err(PublishError::Transport(e.to_string()));
            }
        };

        tracing::debug!(topic = message.topic(), receivers, "published to redis");
        Ok(())
    }
}
