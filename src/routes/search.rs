//! Booking search: a quote plus a handful of vehicles to show with it.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::error::Result;
use crate::fleet::catalog::SEARCH_SAMPLE_SIZE;
use crate::fleet::Vehicle;
use crate::pricing::requests::QuoteRequest;
use crate::pricing::responses::QuoteResponse;
use crate::pricing::Category;
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub category: Category,
    pub pickup_location: String,
    /// Only present when a different return location was asked for
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_location: Option<String>,
    pub pricing: QuoteResponse,
    pub vehicles: Vec<Vehicle>,
}

/// Handle the booking form submit
pub async fn search(
    State(state): State<AppState>,
    Json(form): Json<QuoteRequest>,
) -> Result<Json<SearchResponse>> {
    let request = match form.into_rental_request(state.engine.policy().max_rental_days) {
        Ok(request) => request,
        Err(e) => {
            tracing::warn!("Rejected booking form: {}", e);
            return Err(e.into());
        }
    };

    let breakdown = state.engine.quote(&request);
    let vehicles = {
        let mut rng = rand::thread_rng();
        state
            .fleet
            .pick_random(request.category, SEARCH_SAMPLE_SIZE, &mut rng)
    };

    let return_location = (request.different_return_requested
        && !request.return_location.trim().is_empty())
    .then(|| request.return_location.clone());

    tracing::info!(
        category = ?request.category,
        days = breakdown.days_count,
        total = %breakdown.grand_total,
        "Search served"
    );

    Ok(Json(SearchResponse {
        category: request.category,
        pricing: QuoteResponse::from_breakdown(request.category, breakdown, &state.currency),
        pickup_location: request.pickup_location,
        return_location,
        vehicles,
    }))
}
