//! Route definitions for asset types.

use axum::routing::get;
use axum::Router;

use crate::handlers::asset_types;
use crate::state::AppState;

/// Routes mounted at `/asset-types`.
///
/// ```text
/// GET    /          -> list_asset_types
/// POST   /          -> create_asset_type
/// GET    /{id}                 -> get_asset_type
/// PUT    /{id}                 -> update_asset_type
/// DELETE /{id}                 -> delete_asset_type (guarded)
/// GET    /{id}/deletion-check  -> check_asset_type_deletion
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(asset_types::list_asset_types).post(asset_types::create_asset_type),
        )
        .route(
            "/{id}",
            get(asset_types::get_asset_type)
                .put(asset_types::update_asset_type)
                .delete(asset_types::delete_asset_type),
        )
        .route(
            "/{id}/deletion-check",
            get(asset_types::check_asset_type_deletion),
        )
}
