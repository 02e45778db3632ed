//! Receipt ingestion and points retrieval endpoints.

use axum::{
    body::Bytes,
    extract::{Path, State},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use tracing::{debug, info};

use tally_core::{score, validate, RawReceipt};

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Response body for a successfully ingested receipt.
#[derive(Debug, Serialize)]
pub struct ProcessResponse {
    /// Identifier to retrieve the points with later.
    pub id: String,
}

/// Response body for a points lookup.
#[derive(Debug, Serialize)]
pub struct PointsResponse {
    /// Points awarded to the receipt.
    pub points: u64,
}

/// Builds the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/receipts/process", post(process_receipt))
        .route("/receipts/{id}/points", get(get_points))
        .route("/health", get(health))
        .with_state(state)
}

/// Ingest a receipt: validate, score, store, return the identifier.
///
/// The body is deserialized by hand from raw bytes so that a malformed
/// body produces the same fixed 400 response as a failed validation
/// check, rather than the framework's default rejection.
async fn process_receipt(
    State(state): State<AppState>,
    body: Bytes,
) -> ApiResult<Json<ProcessResponse>> {
    let raw: RawReceipt = serde_json::from_slice(&body).map_err(|e| {
        debug!(error = %e, "rejecting unparseable receipt body");
        ApiError::InvalidReceipt
    })?;

    let receipt = validate(&raw).map_err(|e| {
        debug!(error = %e, "rejecting invalid receipt");
        ApiError::InvalidReceipt
    })?;

    let points = score(&receipt);
    let id = state.store.put(points).await;
    info!(%id, points, retailer = %receipt.retailer, "receipt scored");

    Ok(Json(ProcessResponse { id }))
}

/// Retrieve the points for a previously ingested receipt.
async fn get_points(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<PointsResponse>> {
    let points = state.store.get(&id).await.ok_or(ApiError::NotFound)?;
    Ok(Json(PointsResponse { points }))
}

/// Health check endpoint.
async fn health() -> impl IntoResponse {
    "OK"
}
