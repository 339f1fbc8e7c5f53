//! Ticket store gateway.
//!
//! The query layer reads ticket documents only through [`TicketStore`]. This
//! module holds the trait, the backend-neutral query description, and the
//! in-memory and Postgres adapters.

pub mod in_memory;
pub mod postgres;
pub mod query;
pub mod r#trait;

pub use in_memory::{InMemoryTicketStore, SeedError};
pub use postgres::PostgresTicketStore;
pub use query::{Channel, Page, QueryKind, TicketFilter, TicketQuery};
pub use r#trait::{StoreError, StoreResult, TicketStore};
