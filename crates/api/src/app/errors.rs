use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use ticketing_core::TicketError;

pub fn ticket_error_to_response(err: TicketError) -> axum::response::Response {
    let status = status_for(&err);
    if status.is_server_error() {
        tracing::error!(error = %err, "ticket request failed");
    }
    json_error(status, err.code(), err.message())
}

pub fn status_for(err: &TicketError) -> StatusCode {
    match err {
        TicketError::Validation(_) => StatusCode::BAD_REQUEST,
        TicketError::NotFound(_) => StatusCode::NOT_FOUND,
        TicketError::Conflict(_) => StatusCode::CONFLICT,
        TicketError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        TicketError::Upstream(_) => StatusCode::BAD_GATEWAY,
    }
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
