//! Infrastructure layer: ticket store adapters, broker publishers, config and
//! the ticket query use-cases that compose them.

pub mod config;
pub mod context;
pub mod event_bus;
pub mod notifier;
pub mod store;
pub mod ticket_query;

pub use config::{ConfigError, ServiceConfig};
pub use context::RequestContext;
pub use notifier::SwitchNotifier;
pub use store::{InMemoryTicketStore, PostgresTicketStore, StoreError, TicketStore};
pub use ticket_query::TicketQueryService;

#[cfg(test)]
mod fixtures;
