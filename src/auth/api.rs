//! Authentication API Endpoints
//! Mission: Provide login and admin user listing

use crate::auth::{
    jwt::JwtHandler,
    middleware::extract_claims,
    models::{LoginRequest, LoginResponse, UsersResponse},
    user_store::UserStore,
};
use crate::models::MessageResponse;
use axum::{
    extract::{rejection::JsonRejection, Request, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// Shared auth state
#[derive(Clone)]
pub struct AuthState {
    pub user_store: Arc<UserStore>,
    pub jwt_handler: Arc<JwtHandler>,
}

impl AuthState {
    pub fn new(user_store: Arc<UserStore>, jwt_handler: Arc<JwtHandler>) -> Self {
        Self {
            user_store,
            jwt_handler,
        }
    }
}

/// Login endpoint - POST /api/auth/login
pub async fn login(
    State(state): State<AuthState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<LoginResponse>, AuthApiError> {
    // Only unparseable JSON is a client error; any other body reads as empty
    let payload = match body {
        Ok(Json(value)) => LoginRequest::from_json(&value),
        Err(JsonRejection::JsonSyntaxError(rejection)) => {
            warn!("Malformed login body: {}", rejection.body_text());
            return Err(AuthApiError::MalformedBody);
        }
        Err(rejection) => {
            debug!("Unreadable login body: {}", rejection.body_text());
            LoginRequest::default()
        }
    };

    info!("🔐 Login attempt: {}", payload.username);

    let user = state
        .user_store
        .verify_credentials(&payload.username, &payload.password)
        .ok_or_else(|| {
            warn!("❌ Failed login attempt: {}", payload.username);
            AuthApiError::InvalidCredentials
        })?;

    let token = state.jwt_handler.generate_token(user).map_err(|e| {
        error!("Failed to issue token for {}: {:#}", user.username, e);
        AuthApiError::InternalError
    })?;

    info!(
        "✅ Login successful: {} ({})",
        user.username,
        user.role.as_str()
    );

    Ok(Json(LoginResponse { sessionid: token }))
}

/// List all users - GET /api/users/:sessionid (Admin only)
pub async fn list_users(
    State(state): State<AuthState>,
    req: Request,
) -> Result<Json<UsersResponse>, AuthApiError> {
    let claims = extract_claims(&req).ok_or(AuthApiError::Unauthorized)?;

    if !claims.role.is_admin() {
        warn!(
            "User {} ({}) denied user listing",
            claims.user_id,
            claims.role.as_str()
        );
        return Err(AuthApiError::Forbidden);
    }

    Ok(Json(UsersResponse {
        data: state.user_store.list_users().to_vec(),
    }))
}

/// Auth API errors
#[derive(Debug, PartialEq, Eq)]
pub enum AuthApiError {
    InvalidCredentials,
    MalformedBody,
    Unauthorized,
    Forbidden,
    InternalError,
}

impl IntoResponse for AuthApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AuthApiError::InvalidCredentials => (StatusCode::UNAUTHORIZED, "invalid credentials"),
            AuthApiError::MalformedBody => (StatusCode::BAD_REQUEST, "invalid request body"),
            AuthApiError::Unauthorized => (StatusCode::UNAUTHORIZED, "token missing"),
            AuthApiError::Forbidden => (StatusCode::FORBIDDEN, "access denied"),
            AuthApiError::InternalError => {
                (StatusCode::INTERNAL_SERVER_ERROR, "internal server error")
            }
        };

        (status, Json(MessageResponse::new(message))).into_response()
    }
}
