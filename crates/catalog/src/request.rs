use serde::{Deserialize, Serialize};

use ticketing_core::{CountryCode, EventId, TicketResult};

/// Which country and event a buyer is asking about.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityRequest {
    pub country_code: CountryCode,
    pub event_id: EventId,
}

impl AvailabilityRequest {
    pub fn new(country_code: CountryCode, event_id: EventId) -> Self {
        Self {
            country_code,
            event_id,
        }
    }

    /// Validate raw inbound fields. Both are mandatory and must not be blank.
    pub fn parse(country_code: Option<&str>, event_id: Option<&str>) -> TicketResult<Self> {
        let country_code = CountryCode::parse(country_code.unwrap_or_default())?;
        let event_id = EventId::parse(event_id.unwrap_or_default())?;
        Ok(Self::new(country_code, event_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ticketing_core::TicketError;

    #[test]
    fn parse_accepts_both_fields() {
        let req = AvailabilityRequest::parse(Some("ID"), Some("e-1")).unwrap();
        assert_eq!(req.country_code.as_str(), "ID");
        assert_eq!(req.event_id.as_str(), "e-1");
    }

    #[test]
    fn parse_reports_the_first_missing_field() {
        let err = AvailabilityRequest::parse(None, Some("e-1")).unwrap_err();
        assert_eq!(err, TicketError::validation("countryCode is required"));

        let err = AvailabilityRequest::parse(Some("ID"), Some("  ")).unwrap_err();
        assert_eq!(err, TicketError::validation("eventId is required"));
    }

    #[test]
    fn serializes_with_wire_field_names() {
        let req = AvailabilityRequest::parse(Some("ID"), Some("e-1")).unwrap();
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json, serde_json::json!({ "countryCode": "ID", "eventId": "e-1" }));
    }
}
