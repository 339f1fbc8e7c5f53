//! Ticket builders shared by the infra tests.

use ticketing_catalog::{Continent, Country, TicketRecord};
use ticketing_core::{CountryCode, EventId, Tag, TicketId};

pub fn code(s: &str) -> CountryCode {
    CountryCode::parse(s).unwrap()
}

pub fn event(s: &str) -> EventId {
    EventId::parse(s).unwrap()
}

pub fn tag(s: &str) -> Tag {
    Tag::parse(s).unwrap()
}

/// An offline ticket type (`CAT <price>`) for a country+event.
pub fn ticket(country: &str, event_id: &str, price: i64, remaining: i64, tag_value: &str) -> TicketRecord {
    TicketRecord {
        ticket_id: TicketId::parse(format!("{country}-{event_id}-{price}")).unwrap(),
        event_id: event(event_id),
        ticket_type: format!("CAT {price}"),
        price,
        total_quota: remaining.max(10),
        total_remaining: remaining,
        continent: Continent {
            name: "Asia".to_string(),
            code: "AS".to_string(),
        },
        country: Country {
            name: format!("Country {country}"),
            code: code(country),
            city: "City".to_string(),
            place: "Arena".to_string(),
        },
        tag: tag(tag_value),
        created_at: None,
        updated_at: None,
    }
}

/// The online ticket of a country+event.
pub fn online_ticket(country: &str, event_id: &str, price: i64, remaining: i64) -> TicketRecord {
    let mut record = ticket(country, event_id, price, remaining, "online");
    record.ticket_id = TicketId::parse(format!("{country}-{event_id}-online")).unwrap();
    record.ticket_type = ticketing_catalog::ONLINE_TICKET_TYPE.to_string();
    record
}
