//! Presentation records built per request from ticket records.

use serde::{Deserialize, Serialize};

use crate::policy::AvailabilityPolicy;
use crate::ticket::TicketRecord;

/// Render an integer price the way buyers see it, e.g. `$150`.
pub fn format_price(price: i64) -> String {
    format!("${price}")
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketView {
    pub ticket_type: String,
    pub ticket_price: String,
    pub continent_name: String,
    pub continent_code: String,
    pub country_name: String,
    pub country_code: String,
    pub is_sold: bool,
}

impl TicketView {
    pub fn from_record(record: &TicketRecord) -> Self {
        Self {
            ticket_type: record.ticket_type.clone(),
            ticket_price: format_price(record.price),
            continent_name: record.continent.name.clone(),
            continent_code: record.continent.code.clone(),
            country_name: record.country.name.clone(),
            country_code: record.country.code.to_string(),
            is_sold: record.is_sold(),
        }
    }
}

/// A discounted alternative from another country.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionView {
    pub ticket_type: String,
    pub normal_ticket_price: String,
    pub discount_ticket_price: String,
    pub discount: String,
    pub continent_name: String,
    pub continent_code: String,
    pub country_name: String,
    pub country_code: String,
    pub is_sold: bool,
}

impl SuggestionView {
    pub fn from_record(record: &TicketRecord, policy: &AvailabilityPolicy) -> Self {
        Self {
            ticket_type: record.ticket_type.clone(),
            normal_ticket_price: format_price(record.price),
            discount_ticket_price: format_price(policy.discounted_price(record.price)),
            discount: policy.discount_label(),
            continent_name: record.continent.name.clone(),
            continent_code: record.continent.code.clone(),
            country_name: record.country.name.clone(),
            country_code: record.country.code.to_string(),
            is_sold: record.is_sold(),
        }
    }
}

/// Response of the listing query: the country's offline tickets (store order)
/// plus suggestions when the country is exhausted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketListing {
    pub tickets: Vec<TicketView>,
    #[serde(rename = "suggestion")]
    pub suggestions: Vec<SuggestionView>,
}
