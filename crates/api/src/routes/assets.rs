//! Route definitions for assets.

use axum::routing::get;
use axum::Router;

use crate::handlers::assets;
use crate::state::AppState;

/// Routes mounted at `/assets`.
///
/// ```text
/// GET    /              -> list_assets (q/status/type_id filters)
/// POST   /              -> create_asset
/// GET    /available     -> list_available
/// GET    /in-use        -> list_in_use
/// GET    /{id}          -> get_asset (detail with history)
/// PUT    /{id}          -> update_asset
/// DELETE /{id}          -> delete_asset
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(assets::list_assets).post(assets::create_asset))
        .route("/available", get(assets::list_available))
        .route("/in-use", get(assets::list_in_use))
        .route(
            "/{id}",
            get(assets::get_asset)
                .put(assets::update_asset)
                .delete(assets::delete_asset),
        )
}
