//! Handlers for asset CRUD and the operational read views.
//!
//! Asset status never changes through these endpoints; lifecycle
//! transitions live in the operations handlers.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use assetbase_core::error::CoreError;
use assetbase_core::types::DbId;
use assetbase_core::validation;
use assetbase_db::models::asset::{AssetFilter, CreateAsset, UpdateAsset};
use assetbase_db::repositories::{AssetRepo, AssetTypeRepo};
use assetbase_events::DomainEvent;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/assets
///
/// List assets, newest first, with optional `q`/`status`/`type_id`
/// filters. Each row carries its type name and most recent ledger entry.
pub async fn list_assets(
    State(state): State<AppState>,
    Query(filter): Query<AssetFilter>,
) -> AppResult<impl IntoResponse> {
    // A blank search box arrives as `q=`; treat it as no filter.
    let filter = AssetFilter {
        q: validation::optional_text(filter.q.as_deref()),
        ..filter
    };

    let assets = AssetRepo::list(&state.pool, &filter).await?;

    Ok(Json(DataResponse { data: assets }))
}

/// GET /api/v1/assets/available
///
/// AVAILABLE assets for the check-out picker, ordered by code.
pub async fn list_available(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let assets = AssetRepo::list_available(&state.pool).await?;

    Ok(Json(DataResponse { data: assets }))
}

/// GET /api/v1/assets/in-use
///
/// IN_USE assets with their current holder (derived from the most recent
/// CHECK_OUT entry), ordered by code.
pub async fn list_in_use(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let assets = AssetRepo::list_in_use(&state.pool).await?;

    Ok(Json(DataResponse { data: assets }))
}

/// POST /api/v1/assets
///
/// Register a new asset. Code, name, and type are required; the asset
/// starts AVAILABLE.
pub async fn create_asset(
    State(state): State<AppState>,
    Json(input): Json<CreateAsset>,
) -> AppResult<impl IntoResponse> {
    let input = CreateAsset {
        code: validation::require_text("Code", &input.code)?,
        name: validation::require_text("Name", &input.name)?,
        type_id: validation::require_id("Type", input.type_id)?,
        serial_number: validation::optional_text(input.serial_number.as_deref()),
        ..input
    };

    let created = AssetRepo::create(&state.pool, &input).await?;

    state
        .event_bus
        .publish(DomainEvent::new("asset.created").with_entity("asset", created.id));
    tracing::info!(asset_id = created.id, code = %created.code, "Asset created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: created })))
}

/// GET /api/v1/assets/{id}
///
/// Get full asset detail: the row, its type, and its complete ledger
/// history (most recent first).
pub async fn get_asset(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let asset = AssetRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Asset", id }))?;

    let asset_type = AssetTypeRepo::find_by_id(&state.pool, asset.type_id).await?;
    let transactions = AssetRepo::history(&state.pool, id).await?;

    let detail = serde_json::json!({
        "asset": asset,
        "type": asset_type,
        "transactions": transactions,
    });

    Ok(Json(DataResponse { data: detail }))
}

/// PUT /api/v1/assets/{id}
///
/// Update an asset's descriptive fields. Status is never touched here.
pub async fn update_asset(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateAsset>,
) -> AppResult<impl IntoResponse> {
    let input = UpdateAsset {
        code: input
            .code
            .as_deref()
            .map(|v| validation::require_text("Code", v))
            .transpose()?,
        name: input
            .name
            .as_deref()
            .map(|v| validation::require_text("Name", v))
            .transpose()?,
        serial_number: validation::optional_text(input.serial_number.as_deref()),
        ..input
    };

    let updated = AssetRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Asset", id }))?;

    state
        .event_bus
        .publish(DomainEvent::new("asset.updated").with_entity("asset", id));
    tracing::info!(asset_id = id, "Asset updated");

    Ok(Json(DataResponse { data: updated }))
}

/// DELETE /api/v1/assets/{id}
///
/// Delete an asset. Its ledger history is removed by the cascade.
pub async fn delete_asset(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = AssetRepo::delete(&state.pool, id).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound { entity: "Asset", id }));
    }

    state
        .event_bus
        .publish(DomainEvent::new("asset.deleted").with_entity("asset", id));
    tracing::info!(asset_id = id, "Asset deleted");

    Ok(StatusCode::NO_CONTENT)
}
