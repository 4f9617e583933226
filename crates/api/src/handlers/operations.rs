//! Handlers for the lifecycle operations: check-out and check-in.
//!
//! Required-id validation runs before any database access. The status
//! write and ledger append happen atomically inside the repository; a
//! successful transition publishes a view-invalidation event for the
//! asset-list and operations-list projections.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use assetbase_core::validation;
use assetbase_db::models::transaction::{CheckIn, CheckOut};
use assetbase_db::repositories::LedgerRepo;
use assetbase_events::DomainEvent;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/operations/check-out
///
/// Assign an AVAILABLE asset to an employee. Fails with 409 if the asset
/// is missing or not AVAILABLE; nothing is written in that case.
pub async fn check_out_asset(
    State(state): State<AppState>,
    Json(input): Json<CheckOut>,
) -> AppResult<impl IntoResponse> {
    validation::require_id("Asset", input.asset_id)?;
    validation::require_id("Employee", input.employee_id)?;

    let entry = LedgerRepo::check_out(&state.pool, &input).await?;

    state.event_bus.publish(
        DomainEvent::new("asset.checked_out")
            .with_entity("asset", entry.asset_id)
            .with_payload(serde_json::json!({
                "employee_id": entry.employee_id,
                "transaction_id": entry.id,
            })),
    );
    tracing::info!(
        asset_id = entry.asset_id,
        employee_id = entry.employee_id,
        transaction_id = entry.id,
        "Asset checked out",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: entry })))
}

/// POST /api/v1/operations/check-in
///
/// Return an IN_USE asset, transitioning it to the supplied status
/// (AVAILABLE, MAINTENANCE, or RETIRED). Fails with 409 if the asset is
/// missing, not IN_USE, or the target status is IN_USE.
pub async fn check_in_asset(
    State(state): State<AppState>,
    Json(input): Json<CheckIn>,
) -> AppResult<impl IntoResponse> {
    validation::require_id("Asset", input.asset_id)?;
    validation::require_id("Employee", input.employee_id)?;

    let entry = LedgerRepo::check_in(&state.pool, &input).await?;

    state.event_bus.publish(
        DomainEvent::new("asset.checked_in")
            .with_entity("asset", entry.asset_id)
            .with_payload(serde_json::json!({
                "employee_id": entry.employee_id,
                "transaction_id": entry.id,
                "new_status": input.new_status,
            })),
    );
    tracing::info!(
        asset_id = entry.asset_id,
        employee_id = entry.employee_id,
        new_status = %input.new_status,
        transaction_id = entry.id,
        "Asset checked in",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: entry })))
}
