//! Pricing API route handlers

use axum::{extract::State, routing::post, Json, Router};

use crate::error::Result;
use crate::AppState;

use super::requests::QuoteRequest;
use super::responses::QuoteResponse;

/// Routes mounted under `/api/pricing`
pub fn router() -> Router<AppState> {
    Router::new().route("/quote", post(quote))
}

/// Price a booking form
pub async fn quote(
    State(state): State<AppState>,
    Json(form): Json<QuoteRequest>,
) -> Result<Json<QuoteResponse>> {
    let request = form.into_rental_request(state.engine.policy().max_rental_days)?;
    let breakdown = state.engine.quote(&request);

    tracing::info!(
        category = ?request.category,
        days = breakdown.days_count,
        total = %breakdown.grand_total,
        "Quote issued"
    );

    Ok(Json(QuoteResponse::from_breakdown(
        request.category,
        breakdown,
        &state.currency,
    )))
}
