//! Value object trait: equality by value, not identity.
//!
//! Value objects have **no identity**. Two countries with the same name, code,
//! city and place are the same country as far as the domain is concerned.

/// Marker trait for value objects.
///
/// - **Value Object**: no identity (equal when all attributes are equal)
/// - **Entity**: has identity (equal when the ids are equal)
///
/// Example:
/// - `Country { code: "ID", .. }` is a value object
/// - `TicketRecord { ticket_id: TicketId(..), .. }` is an entity
///
/// Value objects are immutable: to "change" one, build a new one.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
