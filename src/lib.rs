//! Rental quote backend for the booking site.
//!
//! Exposes the pricing engine and the fleet catalog over JSON, and can serve
//! the static marketing pages next to the API.

pub mod config;
pub mod error;
pub mod fleet;
pub mod pricing;
pub mod routes;

use std::path::Path;
use std::sync::Arc;

use axum::{routing::get, routing::post, Router};
use tower_http::services::ServeDir;

use crate::fleet::FleetCatalog;
use crate::pricing::PricingEngine;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<PricingEngine>,
    pub fleet: Arc<FleetCatalog>,
    pub currency: String,
}

impl AppState {
    pub fn new(engine: PricingEngine, currency: impl Into<String>) -> Self {
        Self {
            engine: Arc::new(engine),
            fleet: Arc::new(FleetCatalog),
            currency: currency.into(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(PricingEngine::default(), "EUR")
    }
}

/// API routes without any middleware
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(routes::health))
        .route("/api/search", post(routes::search::search))
        .nest("/api/pricing", pricing::router())
        .nest("/api/fleet", fleet::routes::router())
        .with_state(state)
}

/// API routes plus the static site as fallback
pub fn app_with_static(state: AppState, static_dir: &Path) -> Router {
    app(state).fallback_service(ServeDir::new(static_dir))
}
