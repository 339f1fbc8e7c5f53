//! `ticketing-core`: shared building blocks for the ticketing workspace.
//!
//! This crate contains **pure** primitives (no infrastructure concerns): the
//! error taxonomy every layer reports through, and the strongly-typed
//! identifiers used by ticket records and requests.

pub mod entity;
pub mod error;
pub mod id;
pub mod value_object;

pub use entity::Entity;
pub use error::{TicketError, TicketResult};
pub use id::{CountryCode, EventId, Tag, TicketId};
pub use value_object::ValueObject;
