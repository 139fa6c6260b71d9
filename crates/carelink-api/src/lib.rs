//! Axum HTTP API server.
//!
//! This crate provides:
//! - CRUD routing for the clients, providers and offers collections
//! - Bearer credential enforcement on the protected collections
//! - Registration and login flows for the client collection

pub mod auth;
pub mod clients;
pub mod config;
pub mod error;
pub mod middleware;
pub mod resource;
pub mod routes;
pub mod state;

pub use config::ApiConfig;
pub use error::{ApiError, ApiResult};
pub use routes::create_router;
pub use state::AppState;
