//! Request logging middleware.
//!
//! Logs every routed HTTP request with method, route, status code, and latency.
//! The route is the matched template (`/api/users/:sessionid`), never the raw
//! path, since protected routes carry the session token in the URL.

use axum::{
    body::Body,
    extract::MatchedPath,
    http::Request,
    middleware::Next,
    response::Response,
};
use std::time::Instant;
use tracing::{info, warn};

/// Middleware that logs HTTP requests with timing information.
///
/// Must be installed with `route_layer` so the matched path is known.
/// Logs at INFO level for successful requests, WARN level for server errors.
pub async fn request_logging(request: Request<Body>, next: Next) -> Response {
    let method = request.method().clone();
    let route = route_label(&request);

    // Skip logging for health checks to reduce noise
    if route == "/health" {
        return next.run(request).await;
    }

    let start = Instant::now();

    let response = next.run(request).await;

    let latency = start.elapsed();
    let status = response.status().as_u16();

    if status >= 500 {
        warn!(
            method = %method,
            route = %route,
            status = status,
            latency_ms = latency.as_millis(),
            "Request failed (5xx)"
        );
    } else {
        info!(
            method = %method,
            route = %route,
            status = status,
            latency_ms = latency.as_millis(),
            "Request completed"
        );
    }

    response
}

fn route_label(request: &Request<Body>) -> String {
    request
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_string())
        .unwrap_or_else(|| "<unmatched>".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_label_without_match() {
        let request = Request::new(Body::empty());
        assert_eq!(route_label(&request), "<unmatched>");
    }
}
