//! HTTP metrics middleware

use std::time::Instant;

use axum::{
    body::Body, extract::MatchedPath, http::Request, middleware::Next, response::Response,
};

use crate::infrastructure::observability::record_http_request;

/// Label for requests that matched no route
const UNMATCHED_ROUTE: &str = "unmatched";

/// Record count and latency of every request
///
/// Labels use the matched route pattern, never the raw URI, so user IDs
/// and unknown paths do not become label values.
pub async fn metrics_middleware(request: Request<Body>, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let path = route_label(&request);

    let response = next.run(request).await;

    record_http_request(
        method.as_str(),
        &path,
        response.status().as_u16(),
        start.elapsed(),
    );

    response
}

fn route_label(request: &Request<Body>) -> String {
    request
        .extensions()
        .get::<MatchedPath>()
        .map(|mp| mp.as_str().to_string())
        .unwrap_or_else(|| UNMATCHED_ROUTE.to_string())
}
