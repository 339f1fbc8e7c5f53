//! HTTP API application wiring (Axum router + service wiring).
//!
//! - `services.rs`: infrastructure wiring (ticket store, publisher, query service)
//! - `routes/`: HTTP routes + handlers
//! - `dto.rs`: query parameters and the success envelope
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{Extension, Router, routing::get};
use tower::ServiceBuilder;

use crate::middleware;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
pub fn build_app(services: services::AppServices) -> Router {
    let context_state = middleware::ContextState {
        request_timeout: services.request_timeout,
    };
    let services = Arc::new(services);

    let tickets = Router::new()
        .nest("/api/tickets/v1", routes::tickets::router())
        .layer(Extension(services))
        .layer(axum::middleware::from_fn_with_state(
            context_state,
            middleware::request_context_middleware,
        ));

    Router::new()
        .route("/health", get(routes::system::health))
        .merge(tickets)
        .layer(ServiceBuilder::new())
}
