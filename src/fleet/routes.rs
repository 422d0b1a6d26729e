//! Fleet route handlers

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use serde::Serialize;

use crate::pricing::Category;
use crate::AppState;

use super::catalog::Vehicle;

#[derive(Debug, Serialize)]
pub struct FleetResponse {
    pub category: Category,
    pub vehicles: Vec<Vehicle>,
}

/// Routes mounted under `/api/fleet`
pub fn router() -> Router<AppState> {
    Router::new().route("/:category", get(list))
}

/// Full catalog for a category. Unknown categories list cars.
pub async fn list(State(state): State<AppState>, Path(category): Path<String>) -> Json<FleetResponse> {
    let category = Category::from_form_value(Some(&category));
    Json(FleetResponse {
        category,
        vehicles: state.fleet.vehicles(category).to_vec(),
    })
}
