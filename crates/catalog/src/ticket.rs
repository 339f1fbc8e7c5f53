use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use ticketing_core::{CountryCode, Entity, EventId, Tag, TicketId, ValueObject};

/// `ticketType` value reserved for the single online ticket of a country+event.
pub const ONLINE_TICKET_TYPE: &str = "Online";

/// Continent labels, stored flat on the ticket document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Continent {
    #[serde(rename = "continentName")]
    pub name: String,
    #[serde(rename = "continentCode")]
    pub code: String,
}

impl ValueObject for Continent {}

/// Venue location of a ticket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    pub name: String,
    pub code: CountryCode,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub place: String,
}

impl ValueObject for Country {}

/// A ticket type as stored in the `ticket-detail` collection.
///
/// Owned by the store; the query layer only reads it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketRecord {
    pub ticket_id: TicketId,
    pub event_id: EventId,
    pub ticket_type: String,
    #[serde(rename = "ticketPrice")]
    pub price: i64,
    pub total_quota: i64,
    /// Invariant: `0 <= total_remaining <= total_quota`.
    pub total_remaining: i64,
    #[serde(flatten)]
    pub continent: Continent,
    pub country: Country,
    pub tag: Tag,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl TicketRecord {
    pub fn is_sold(&self) -> bool {
        self.total_remaining == 0
    }

    pub fn is_online(&self) -> bool {
        self.ticket_type == ONLINE_TICKET_TYPE
    }
}

impl Entity for TicketRecord {
    type Id = TicketId;

    fn id(&self) -> &Self::Id {
        &self.ticket_id
    }
}
