//! Route definitions for the dashboard.

use axum::routing::get;
use axum::Router;

use crate::handlers::dashboard;
use crate::state::AppState;

/// Routes mounted at `/dashboard`.
///
/// ```text
/// GET /stats                   -> get_stats
/// GET /recent-transactions     -> recent_transactions (?limit=N, default 10)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/stats", get(dashboard::get_stats))
        .route("/recent-transactions", get(dashboard::recent_transactions))
}
