use axum::{
    extract::{rejection::PathRejection, Path, State},
    http::StatusCode,
    middleware,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Extension, Router,
};
use serde::Serialize;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::debug;

use crate::auth::{
    api as auth_api, auth_middleware, models::Claims, AuthState, JwtHandler, UserStore,
};
use crate::contracts::{validate_lookup, ContractStore};
use crate::middleware::request_logging;
use crate::models::{ContractPath, ContractsResponse, MessageResponse};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub auth: AuthState,
    pub contract_store: Arc<ContractStore>,
}

impl AppState {
    pub fn new(
        user_store: Arc<UserStore>,
        contract_store: Arc<ContractStore>,
        jwt_handler: Arc<JwtHandler>,
    ) -> Self {
        Self {
            auth: AuthState::new(user_store, jwt_handler),
            contract_store,
        }
    }

    /// State backed by the built-in users and contracts
    pub fn seeded(jwt_secret: &str) -> anyhow::Result<Self> {
        Ok(Self::new(
            Arc::new(UserStore::seeded()?),
            Arc::new(ContractStore::seeded()?),
            Arc::new(JwtHandler::new(jwt_secret)),
        ))
    }
}

/// Create the API router
pub fn create_router(state: AppState) -> Router {
    let auth_router = Router::new()
        .route("/api/auth/login", post(auth_api::login))
        .with_state(state.auth.clone());

    let user_routes = Router::new()
        .route("/api/users/:sessionid", get(auth_api::list_users))
        // Token-less form, so a missing token is a 401 rather than a 404
        .route("/api/users/", get(auth_api::list_users))
        .with_state(state.auth.clone());

    let contract_routes = Router::new()
        .route(
            "/api/contracts/:empresa/:inicio/:sessionid",
            get(list_contracts),
        )
        .route("/api/contracts/:empresa/:inicio/", get(list_contracts))
        .with_state(state.contract_store.clone());

    let protected_routes = user_routes
        .merge(contract_routes)
        .route_layer(middleware::from_fn_with_state(
            state.auth.jwt_handler.clone(),
            auth_middleware,
        ));

    Router::new()
        .route("/health", get(health_check))
        .merge(protected_routes)
        .merge(auth_router)
        .route_layer(middleware::from_fn(request_logging))
        .layer(CorsLayer::permissive())
}

// ===== Route Handlers =====

/// Health check endpoint
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Contracts for a company and start date - GET /api/contracts/:empresa/:inicio/:sessionid
async fn list_contracts(
    State(store): State<Arc<ContractStore>>,
    params: Result<Path<ContractPath>, PathRejection>,
    Extension(claims): Extension<Claims>,
) -> Result<Json<ContractsResponse>, ApiError> {
    // Segments that do not even decode fail validation like any other
    let Path(params) = params.map_err(|rejection| {
        debug!(
            "User {} sent undecodable lookup parameters: {}",
            claims.user_id,
            rejection.body_text()
        );
        ApiError::InvalidParameters
    })?;

    let lookup = validate_lookup(&params.empresa, &params.inicio).ok_or_else(|| {
        debug!(
            "User {} sent invalid lookup parameters {:?}/{:?}",
            claims.user_id, params.empresa, params.inicio
        );
        ApiError::InvalidParameters
    })?;

    let contracts = store.find(&lookup);
    if contracts.is_empty() {
        return Err(ApiError::NotFound);
    }

    Ok(Json(ContractsResponse { data: contracts }))
}

// ===== Response Types =====

#[derive(Serialize)]
struct HealthResponse {
    status: String,
    version: String,
}

// ===== Error Handling =====

#[derive(Debug, PartialEq, Eq)]
pub enum ApiError {
    InvalidParameters,
    NotFound,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::InvalidParameters => (StatusCode::BAD_REQUEST, "invalid parameters"),
            ApiError::NotFound => (StatusCode::NOT_FOUND, "not found"),
        };

        (status, Json(MessageResponse::new(message))).into_response()
    }
}
