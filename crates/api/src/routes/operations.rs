//! Route definitions for lifecycle operations.

use axum::routing::post;
use axum::Router;

use crate::handlers::operations;
use crate::state::AppState;

/// Routes mounted at `/operations`.
///
/// ```text
/// POST /check-out    -> check_out_asset
/// POST /check-in     -> check_in_asset
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/check-out", post(operations::check_out_asset))
        .route("/check-in", post(operations::check_in_asset))
}
