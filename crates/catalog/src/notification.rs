use serde::{Deserialize, Serialize};

use ticketing_core::{CountryCode, Tag};

/// Topic consumed by the service that opens online sale for a country.
pub const SWITCH_TO_ONLINE_TOPIC: &str = "concert-update-online-bank-ticket";

/// Emitted when a country's offline stock is exhausted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwitchNotification {
    pub tag: Tag,
    pub country_code: CountryCode,
}

impl SwitchNotification {
    pub fn new(tag: Tag, country_code: CountryCode) -> Self {
        Self { tag, country_code }
    }

    /// JSON payload as published to the broker.
    pub fn to_payload(&self) -> serde_json::Result<Vec<u8>> {
        serde_json::to_vec(self)
    }
}
