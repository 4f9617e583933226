//! Handlers for asset type CRUD.
//!
//! Deletion is guarded: an asset type referenced by any asset cannot be
//! removed.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use assetbase_core::deletion::DeleteOutcome;
use assetbase_core::error::CoreError;
use assetbase_core::types::DbId;
use assetbase_core::validation;
use assetbase_db::models::asset_type::{CreateAssetType, UpdateAssetType};
use assetbase_db::repositories::AssetTypeRepo;
use assetbase_events::DomainEvent;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/asset-types
///
/// List all asset types with their asset counts, ordered by name.
pub async fn list_asset_types(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let types = AssetTypeRepo::list(&state.pool).await?;

    Ok(Json(DataResponse { data: types }))
}

/// POST /api/v1/asset-types
///
/// Create a new asset type. Name is required and unique.
pub async fn create_asset_type(
    State(state): State<AppState>,
    Json(input): Json<CreateAssetType>,
) -> AppResult<impl IntoResponse> {
    let input = CreateAssetType {
        name: validation::require_text("Name", &input.name)?,
        description: validation::optional_text(input.description.as_deref()),
    };

    let created = AssetTypeRepo::create(&state.pool, &input).await?;

    state.event_bus.publish(
        DomainEvent::new("asset_type.created").with_entity("asset_type", created.id),
    );
    tracing::info!(asset_type_id = created.id, name = %created.name, "Asset type created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: created })))
}

/// GET /api/v1/asset-types/{id}
pub async fn get_asset_type(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let asset_type = AssetTypeRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "AssetType",
            id,
        }))?;

    Ok(Json(DataResponse { data: asset_type }))
}

/// PUT /api/v1/asset-types/{id}
///
/// Update an asset type. A provided name must be non-blank.
pub async fn update_asset_type(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateAssetType>,
) -> AppResult<impl IntoResponse> {
    let input = UpdateAssetType {
        name: input
            .name
            .as_deref()
            .map(|name| validation::require_text("Name", name))
            .transpose()?,
        description: validation::optional_text(input.description.as_deref()),
    };

    let updated = AssetTypeRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "AssetType",
            id,
        }))?;

    state
        .event_bus
        .publish(DomainEvent::new("asset_type.updated").with_entity("asset_type", id));
    tracing::info!(asset_type_id = id, "Asset type updated");

    Ok(Json(DataResponse { data: updated }))
}

/// GET /api/v1/asset-types/{id}/deletion-check
///
/// Report whether the asset type can be deleted, without mutating
/// anything. The delete itself re-checks inside its own transaction.
pub async fn check_asset_type_deletion(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    if AssetTypeRepo::find_by_id(&state.pool, id).await?.is_none() {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "AssetType",
            id,
        }));
    }

    let count = AssetTypeRepo::count_assets(&state.pool, id).await?;
    let check = assetbase_core::deletion::check_asset_type_deletable(count);

    Ok(Json(DataResponse { data: check }))
}

/// DELETE /api/v1/asset-types/{id}
///
/// Delete an asset type unless assets still reference it.
pub async fn delete_asset_type(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    match AssetTypeRepo::delete_guarded(&state.pool, id).await? {
        DeleteOutcome::Deleted => {
            state
                .event_bus
                .publish(DomainEvent::new("asset_type.deleted").with_entity("asset_type", id));
            tracing::info!(asset_type_id = id, "Asset type deleted");
            Ok(StatusCode::NO_CONTENT)
        }
        DeleteOutcome::Blocked(check) => {
            Err(AppError::Core(CoreError::ReferencedEntity(check.message)))
        }
        DeleteOutcome::NotFound => Err(AppError::Core(CoreError::NotFound {
            entity: "AssetType",
            id,
        })),
    }
}
