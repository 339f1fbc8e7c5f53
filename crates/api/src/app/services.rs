use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;

use ticketing_catalog::AvailabilityPolicy;
use ticketing_events::{InMemoryPublisher, MessagePublisher, PublishError};
use ticketing_infra::event_bus::RedisPublisher;
use ticketing_infra::store::SeedError;
use ticketing_infra::{
    InMemoryTicketStore, PostgresTicketStore, ServiceConfig, SwitchNotifier, TicketQueryService,
    TicketStore,
};

/// Type-erased ticket store (in-memory or Postgres).
pub type DynTicketStore = Arc<dyn TicketStore>;

#[derive(Debug, Error)]
pub enum ServicesError {
    #[error("failed to seed in-memory ticket store: {0}")]
    Seed(#[from] SeedError),

    #[error("failed to prepare postgres ticket store: {0}")]
    Database(#[from] sqlx::Error),

    #[error("failed to configure notification broker: {0}")]
    Broker(#[from] PublishError),
}

#[derive(Clone)]
pub struct AppServices {
    pub tickets: TicketQueryService<DynTicketStore>,
    pub request_timeout: Duration,
}

impl AppServices {
    pub fn new(
        store: DynTicketStore,
        publisher: Arc<dyn MessagePublisher>,
        switch_topic: impl Into<String>,
        request_timeout: Duration,
    ) -> Self {
        Self {
            tickets: TicketQueryService::new(
                store,
                SwitchNotifier::new(publisher, switch_topic),
                AvailabilityPolicy::standard(),
            ),
            request_timeout,
        }
    }
}

/// Wire store and publisher from configuration.
///
/// `DATABASE_URL` selects Postgres (schema ensured at startup); otherwise the
/// in-memory store is used, optionally seeded from `TICKETS_SEED_PATH`.
/// `REDIS_URL` selects Redis pub/sub for notifications.
pub async fn build_services(config: &ServiceConfig) -> Result<AppServices, ServicesError> {
    let store: DynTicketStore = match &config.database_url {
        Some(url) => {
            let store = PostgresTicketStore::connect(url).await?;
            store.ensure_schema().await?;
            tracing::info!("using postgres ticket store");
            Arc::new(store)
        }
        None => {
            let store = match &config.seed_path {
                Some(path) => InMemoryTicketStore::from_seed_file(path).await?,
                None => {
                    tracing::warn!("DATABASE_URL not set; using empty in-memory ticket store");
                    InMemoryTicketStore::new()
                }
            };
            Arc::new(store)
        }
    };

    let publisher: Arc<dyn MessagePublisher> = match &config.redis_url {
        Some(url) => {
            tracing::info!("publishing switch notifications to redis");
            Arc::new(RedisPublisher::new(url)?)
        }
        None => {
            tracing::warn!("REDIS_URL not set; switch notifications stay in memory");
            Arc::new(InMemoryPublisher::new())
        }
    };

    Ok(AppServices::new(
        store,
        publisher,
        config.switch_topic.clone(),
        config.request_timeout,
    ))
}
