use std::sync::Arc;

use axum::{
    Router,
    extract::{Extension, Query},
    response::Response,
    routing::get,
};

use ticketing_infra::RequestContext;

use crate::app::{dto, errors, services::AppServices};

pub fn router() -> Router {
    Router::new()
        .route("/list", get(list_tickets))
        .route("/online", get(online_ticket))
}

/// Offline tickets of a country+event, plus suggestions once sold out.
pub async fn list_tickets(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(ctx): Extension<RequestContext>,
    Query(params): Query<dto::AvailabilityParams>,
) -> Response {
    let request = match params.into_request() {
        Ok(r) => r,
        Err(e) => return errors::ticket_error_to_response(e),
    };

    match services.tickets.resolve(&ctx, &request).await {
        Ok(listing) => dto::success(listing, "Get ticket success"),
        Err(e) => errors::ticket_error_to_response(e),
    }
}

/// The online ticket of a country+event, once offline stock is exhausted.
pub async fn online_ticket(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(ctx): Extension<RequestContext>,
    Query(params): Query<dto::AvailabilityParams>,
) -> Response {
    let request = match params.into_request() {
        Ok(r) => r,
        Err(e) => return errors::ticket_error_to_response(e),
    };

    match services.tickets.decide_online(&ctx, &request).await {
        Ok(view) => dto::success(view, "Get online ticket success"),
        Err(e) => errors::ticket_error_to_response(e),
    }
}
