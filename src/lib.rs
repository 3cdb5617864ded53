//! Contracts API Library
//!
//! Exposes the router, stores and configuration for the binary and the
//! integration tests.

pub mod api;
pub mod auth;
pub mod config;
pub mod contracts;
pub mod middleware;
pub mod models;

pub use api::{create_router, AppState};
pub use config::Config;
