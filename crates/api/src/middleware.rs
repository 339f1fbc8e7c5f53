use std::time::Duration;

use axum::{
    extract::State,
    http::{HeaderMap, HeaderName, HeaderValue},
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use ticketing_infra::RequestContext;

pub const REQUEST_ID_HEADER: HeaderName = HeaderName::from_static("x-request-id");

#[derive(Debug, Clone)]
pub struct ContextState {
    pub request_timeout: Duration,
}

/// Attach a fresh [`RequestContext`] (request id + store deadline) to every
/// request and echo the request id back as `x-request-id`.
///
/// A well-formed inbound `x-request-id` is kept so callers can correlate logs.
pub async fn request_context_middleware(
    State(state): State<ContextState>,
    mut req: axum::http::Request<axum::body::Body>,
    next: Next,
) -> Response {
    let mut ctx = RequestContext::new().with_timeout(state.request_timeout);
    if let Some(id) = inbound_request_id(req.headers()) {
        ctx = ctx.with_request_id(id);
    }
    let request_id = ctx.request_id();
    req.extensions_mut().insert(ctx);

    let mut res = next.run(req).await;
    if let Ok(value) = HeaderValue::from_str(&request_id.to_string()) {
        res.headers_mut().insert(REQUEST_ID_HEADER, value);
    }
    res
}

fn inbound_request_id(headers: &HeaderMap) -> Option<Uuid> {
    let header = headers.get(REQUEST_ID_HEADER)?;
    let header = header.to_str().ok()?;
    Uuid::parse_str(header.trim()).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inbound_request_id_must_be_a_uuid() {
        let id = Uuid::now_v7();
        let mut headers = HeaderMap::new();
        headers.insert(REQUEST_ID_HEADER, HeaderValue::from_str(&id.to_string()).unwrap());
        assert_eq!(inbound_request_id(&headers), Some(id));

        headers.insert(REQUEST_ID_HEADER, HeaderValue::from_static("not-a-uuid"));
        assert_eq!(inbound_request_id(&headers), None);

        assert_eq!(inbound_request_id(&HeaderMap::new()), None);
    }
}
