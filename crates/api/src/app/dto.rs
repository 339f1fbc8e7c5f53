use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use ticketing_catalog::AvailabilityRequest;
use ticketing_core::TicketResult;

// -------------------------
// Request DTOs
// -------------------------

/// `?countryCode=..&eventId=..`. Both optional here so a missing field
/// becomes a validation error instead of an extractor rejection.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityParams {
    pub country_code: Option<String>,
    pub event_id: Option<String>,
}

impl AvailabilityParams {
    pub fn into_request(self) -> TicketResult<AvailabilityRequest> {
        AvailabilityRequest::parse(self.country_code.as_deref(), self.event_id.as_deref())
    }
}

// -------------------------
// Response DTOs
// -------------------------

#[derive(Debug, Serialize)]
pub struct Envelope<T> {
    pub data: T,
    pub message: &'static str,
}

/// `200 {"data": .., "message": ..}`.
pub fn success<T: Serialize>(data: T, message: &'static str) -> Response {
    (StatusCode::OK, Json(Envelope { data, message })).into_response()
}
