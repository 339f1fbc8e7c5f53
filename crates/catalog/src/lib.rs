//! Ticket catalog domain module.
//!
//! This crate contains the availability rules for offline and online tickets,
//! implemented purely as deterministic domain logic (no IO, no HTTP, no
//! storage). The query layer in `ticketing-infra` feeds it records fetched
//! from the ticket store.

pub mod notification;
pub mod policy;
pub mod request;
pub mod ticket;
pub mod view;

pub use notification::{SWITCH_TO_ONLINE_TOPIC, SwitchNotification};
pub use policy::{
    AvailabilityPolicy, DISCOUNT_PERCENT, OfflineAssessment, OfflineStatus, OnlineEligibility,
    SOLD_OUT_THRESHOLD,
};
pub use request::AvailabilityRequest;
pub use ticket::{Continent, Country, ONLINE_TICKET_TYPE, TicketRecord};
pub use view::{SuggestionView, TicketListing, TicketView, format_price};
