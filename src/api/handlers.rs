//! HTTP request handlers for the Tip Pool Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::post,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{allocate, compute_rate};
use crate::config::DenominationSet;
use crate::error::EngineResult;
use crate::models::{DistributionResult, Inventory, PoolSession, Worker, WorkerPayout};

use super::request::DistributionRequest;
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/calculate", post(calculate_handler))
        .with_state(state)
}

/// Handler for POST /calculate endpoint.
///
/// Accepts a distribution request and returns the computed payouts.
/// Every request works on its own inventory snapshot, so concurrent
/// requests can never observe each other's depletion.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<DistributionRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing distribution request");

    // Handle JSON parsing errors
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    // Get the body text which contains the detailed error from serde
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    // Check if it's a missing field error
                    if body_text.contains("missing field") {
                        ApiError::new("VALIDATION_ERROR", body_text)
                    } else {
                        ApiError::malformed_json(body_text)
                    }
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => {
                    ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
                }
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    // Convert request types to domain types
    let total_pool = request.total_pool;
    let inventory = request.inventory();
    let workers: Vec<Worker> = request.workers.into_iter().map(Into::into).collect();

    // Reject inventory entries for denominations the engine cannot pay out
    let denominations = state.config().denominations();
    if let Some(unknown) = inventory
        .iter()
        .map(|(denomination, _)| denomination)
        .find(|d| !denominations.contains(*d))
    {
        warn!(
            correlation_id = %correlation_id,
            denomination = unknown,
            "Unknown denomination in inventory"
        );
        return (
            StatusCode::BAD_REQUEST,
            [(header::CONTENT_TYPE, "application/json")],
            Json(ApiError::unknown_denomination(unknown)),
        )
            .into_response();
    }

    // Reject invalid workers before touching the pool
    for worker in &workers {
        if let Err(err) = worker.validate() {
            warn!(
                correlation_id = %correlation_id,
                worker = %worker.name,
                error = %err,
                "Invalid worker"
            );
            let api_error: ApiErrorResponse = err.into();
            return (
                api_error.status,
                [(header::CONTENT_TYPE, "application/json")],
                Json(api_error.error),
            )
                .into_response();
        }
    }

    // Perform the distribution
    let start_time = Instant::now();
    match perform_distribution(total_pool, workers, inventory, denominations) {
        Ok(result) => {
            let duration = start_time.elapsed();
            info!(
                correlation_id = %correlation_id,
                session_id = %result.session.id,
                workers_count = result.payouts.len(),
                rate = %result.rate,
                rounding_drift = %result.rounding_drift,
                duration_us = duration.as_micros(),
                "Distribution completed successfully"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(result),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Distribution failed"
            );
            let api_error: ApiErrorResponse = err.into();
            (
                api_error.status,
                [(header::CONTENT_TYPE, "application/json")],
                Json(api_error.error),
            )
                .into_response()
        }
    }
}

/// Runs the two-stage pipeline: compute shares, then allocate bills.
///
/// Captures the inputs as a [`PoolSession`] record first so the result
/// always carries the snapshot it was computed from.
fn perform_distribution(
    total_pool: rust_decimal::Decimal,
    workers: Vec<Worker>,
    inventory: Inventory,
    denominations: &DenominationSet,
) -> EngineResult<DistributionResult> {
    let session = PoolSession::new(total_pool, workers, inventory);

    let rate_result = compute_rate(session.total_pool, &session.workers)?;
    let outcome = allocate(&rate_result.results, &session.inventory, denominations)?;

    let payouts = rate_result
        .results
        .into_iter()
        .zip(outcome.allocations)
        .map(|(share, allocation)| WorkerPayout::from_parts(share, allocation))
        .collect();

    Ok(DistributionResult {
        session,
        rate: rate_result.rate,
        rounding_drift: rate_result.rounding_drift,
        payouts,
        final_inventory: outcome.final_inventory,
    })
}
