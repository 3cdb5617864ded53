//! Authentication Middleware
//! Mission: Protect API endpoints with JWT validation

use crate::auth::{jwt::JwtHandler, models::Claims};
use crate::models::MessageResponse;
use axum::{
    extract::{MatchedPath, Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use percent_encoding::percent_decode_str;
use std::sync::Arc;
use tracing::warn;

/// Name of the path parameter that carries the session token
pub const SESSION_PARAM: &str = "sessionid";

/// Auth middleware that validates the token in the `sessionid` path segment
pub async fn auth_middleware(
    State(jwt_handler): State<Arc<JwtHandler>>,
    mut req: Request,
    next: Next,
) -> Result<Response, AuthError> {
    let token = session_token(&req).ok_or(AuthError::MissingToken)?;

    let claims = jwt_handler.validate_token(&token).map_err(|e| {
        warn!("Rejected session token: {:#}", e);
        AuthError::InvalidToken
    })?;

    // Add claims to request extensions so handlers can access them
    req.extensions_mut().insert(claims);

    Ok(next.run(req).await)
}

/// Read the `sessionid` segment straight from the URI.
///
/// Only this segment is decoded, so an undecodable sibling segment cannot
/// hide the token. Routes without the segment, and blank segments, yield None.
fn session_token(req: &Request) -> Option<String> {
    let template = req.extensions().get::<MatchedPath>()?.as_str();
    let capture = format!(":{}", SESSION_PARAM);
    let index = template.split('/').position(|segment| segment == capture)?;

    let raw = req.uri().path().split('/').nth(index)?;
    let decoded = percent_decode_str(raw).decode_utf8_lossy();
    let token = decoded.trim();

    (!token.is_empty()).then(|| token.to_string())
}

/// Extract claims from request (use after auth middleware)
pub fn extract_claims(req: &Request) -> Option<&Claims> {
    req.extensions().get::<Claims>()
}

/// Auth error types
#[derive(Debug, PartialEq, Eq)]
pub enum AuthError {
    MissingToken,
    InvalidToken,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AuthError::MissingToken => (StatusCode::UNAUTHORIZED, "token missing"),
            AuthError::InvalidToken => (StatusCode::FORBIDDEN, "token invalid"),
        };

        (status, Json(MessageResponse::new(message))).into_response()
    }
}
