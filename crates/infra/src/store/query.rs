//! Ticket store query descriptions.
//!
//! A [`TicketQuery`] is a backend-neutral description of one lookup against
//! the `ticket-detail` collection: which documents match, how they are
//! ordered, and which page is returned. Store adapters translate it (SQL for
//! Postgres, a scan over documents in memory).

use serde_json::Value as JsonValue;

use ticketing_catalog::ONLINE_TICKET_TYPE;
use ticketing_core::{CountryCode, EventId, Tag};

/// The four lookups the query layer issues.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum QueryKind {
    OfflineByCountryEvent,
    OfflineByCountryTag,
    CheapestAvailableByTag,
    OnlineByCountryEvent,
}

impl QueryKind {
    /// Operation name used in logs and error annotations.
    pub fn as_str(&self) -> &'static str {
        match self {
            QueryKind::OfflineByCountryEvent => "find_offline_tickets_by_country_event",
            QueryKind::OfflineByCountryTag => "find_offline_tickets_by_country_tag",
            QueryKind::CheapestAvailableByTag => "find_cheapest_available_by_tag",
            QueryKind::OnlineByCountryEvent => "find_online_ticket_by_country_event",
        }
    }
}

impl core::fmt::Display for QueryKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sale channel of a ticket document.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Channel {
    /// Any `ticketType` other than `"Online"`.
    Offline,
    /// `ticketType == "Online"`.
    Online,
}

/// Pagination for ordered lookups (1-based page number).
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Page {
    pub number: u32,
    pub size: u32,
}

impl Page {
    /// First page holding a single document (a top-1 lookup).
    pub const TOP_ONE: Page = Page { number: 1, size: 1 };

    pub fn offset(&self) -> u64 {
        u64::from(self.number.saturating_sub(1)) * u64::from(self.size)
    }
}

/// Document filter. `None` fields do not constrain the match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketFilter {
    pub channel: Channel,
    pub country_code: Option<CountryCode>,
    pub event_id: Option<EventId>,
    pub tag: Option<Tag>,
    /// Only documents with `totalRemaining > 0`.
    pub available_only: bool,
}

impl TicketFilter {
    fn channel(channel: Channel) -> Self {
        Self {
            channel,
            country_code: None,
            event_id: None,
            tag: None,
            available_only: false,
        }
    }

    /// Evaluate the filter against a raw ticket document.
    pub fn matches(&self, doc: &JsonValue) -> bool {
        let ticket_type = doc.get("ticketType").and_then(JsonValue::as_str);
        let channel_ok = match self.channel {
            Channel::Offline => ticket_type != Some(ONLINE_TICKET_TYPE),
            Channel::Online => ticket_type == Some(ONLINE_TICKET_TYPE),
        };
        if !channel_ok {
            return false;
        }

        if let Some(code) = &self.country_code {
            if doc.pointer("/country/code").and_then(JsonValue::as_str) != Some(code.as_str()) {
                return false;
            }
        }
        if let Some(event_id) = &self.event_id {
            if doc.get("eventId").and_then(JsonValue::as_str) != Some(event_id.as_str()) {
                return false;
            }
        }
        if let Some(tag) = &self.tag {
            if doc.get("tag").and_then(JsonValue::as_str) != Some(tag.as_str()) {
                return false;
            }
        }
        if self.available_only {
            let remaining = doc.get("totalRemaining").and_then(JsonValue::as_i64);
            if !matches!(remaining, Some(r) if r > 0) {
                return false;
            }
        }
        true
    }
}

/// One lookup against the ticket store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketQuery {
    kind: QueryKind,
    filter: TicketFilter,
    /// Ascending by `ticketPrice` when set.
    sort_by_price: bool,
    page: Option<Page>,
}

impl TicketQuery {
    pub fn offline_by_country_event(country_code: &CountryCode, event_id: &EventId) -> Self {
        let mut filter = TicketFilter::channel(Channel::Offline);
        filter.country_code = Some(country_code.clone());
        filter.event_id = Some(event_id.clone());
        Self {
            kind: QueryKind::OfflineByCountryEvent,
            filter,
            sort_by_price: true,
            page: None,
        }
    }

    pub fn offline_by_country_tag(country_code: &CountryCode, tag: &Tag) -> Self {
        let mut filter = TicketFilter::channel(Channel::Offline);
        filter.country_code = Some(country_code.clone());
        filter.tag = Some(tag.clone());
        Self {
            kind: QueryKind::OfflineByCountryTag,
            filter,
            sort_by_price: true,
            page: None,
        }
    }

    /// Cheapest non-online ticket with stock left, across all countries.
    pub fn cheapest_available_by_tag(tag: &Tag) -> Self {
        let mut filter = TicketFilter::channel(Channel::Offline);
        filter.tag = Some(tag.clone());
        filter.available_only = true;
        Self {
            kind: QueryKind::CheapestAvailableByTag,
            filter,
            sort_by_price: true,
            page: Some(Page::TOP_ONE),
        }
    }

    pub fn online_by_country_event(country_code: &CountryCode, event_id: &EventId) -> Self {
        let mut filter = TicketFilter::channel(Channel::Online);
        filter.country_code = Some(country_code.clone());
        filter.event_id = Some(event_id.clone());
        Self {
            kind: QueryKind::OnlineByCountryEvent,
            filter,
            sort_by_price: false,
            page: None,
        }
    }

    pub fn kind(&self) -> QueryKind {
        self.kind
    }

    pub fn operation(&self) -> &'static str {
        self.kind.as_str()
    }

    pub fn filter(&self) -> &TicketFilter {
        &self.filter
    }

    pub fn sort_by_price(&self) -> bool {
        self.sort_by_price
    }

    pub fn page(&self) -> Option<Page> {
        self.page
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn doc(ticket_type: &str, country: &str, event: &str, tag: &str, remaining: i64) -> JsonValue {
        json!({
            "ticketType": ticket_type,
            "country": { "code": country },
            "eventId": event,
            "tag": tag,
            "totalRemaining": remaining,
        })
    }

    fn code(s: &str) -> CountryCode {
        CountryCode::parse(s).unwrap()
    }

    #[test]
    fn offline_filter_excludes_online_tickets() {
        let q = TicketQuery::offline_by_country_event(&code("ID"), &EventId::parse("e-1").unwrap());
        assert!(q.filter().matches(&doc("CAT 1", "ID", "e-1", "t", 1)));
        assert!(!q.filter().matches(&doc("Online", "ID", "e-1", "t", 1)));
        assert!(!q.filter().matches(&doc("CAT 1", "SG", "e-1", "t", 1)));
        assert!(!q.filter().matches(&doc("CAT 1", "ID", "e-2", "t", 1)));
    }

    #[test]
    fn offline_filter_matches_documents_without_ticket_type() {
        let q = TicketQuery::offline_by_country_tag(&code("ID"), &Tag::parse("t").unwrap());
        let doc = json!({ "country": { "code": "ID" }, "tag": "t" });
        assert!(q.filter().matches(&doc));
    }

    #[test]
    fn cheapest_lookup_requires_stock_and_is_top_one() {
        let q = TicketQuery::cheapest_available_by_tag(&Tag::parse("t").unwrap());
        assert!(q.filter().matches(&doc("CAT 1", "SG", "any", "t", 3)));
        assert!(!q.filter().matches(&doc("CAT 1", "SG", "any", "t", 0)));
        assert!(!q.filter().matches(&doc("CAT 1", "SG", "any", "other", 3)));
        assert_eq!(q.page(), Some(Page::TOP_ONE));
        assert!(q.sort_by_price());
    }

    #[test]
    fn online_lookup_only_matches_online_type() {
        let q = TicketQuery::online_by_country_event(&code("ID"), &EventId::parse("e-1").unwrap());
        assert!(q.filter().matches(&doc("Online", "ID", "e-1", "t", 0)));
        assert!(!q.filter().matches(&doc("CAT 1", "ID", "e-1", "t", 0)));
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn offline_and_online_lookups_partition_a_country_event(
                ticket_type in prop_oneof![Just("Online".to_string()), "[A-Z]{3} [0-9]"],
                remaining in 0i64..5,
            ) {
                let event = EventId::parse("e-1").unwrap();
                let d = doc(&ticket_type, "ID", "e-1", "t", remaining);
                let offline = TicketQuery::offline_by_country_event(&code("ID"), &event);
                let online = TicketQuery::online_by_country_event(&code("ID"), &event);
                prop_assert!(offline.filter().matches(&d) != online.filter().matches(&d));
            }
        }
    }

    #[test]
    fn page_offset_is_zero_based() {
        assert_eq!(Page::TOP_ONE.offset(), 0);
        assert_eq!(Page { number: 3, size: 10 }.offset(), 20);
        assert_eq!(Page { number: 0, size: 10 }.offset(), 0);
    }
}
