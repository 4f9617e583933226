//! Handlers for the dashboard: stat cards and the recent-activity feed.

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use assetbase_db::repositories::{DashboardRepo, LedgerRepo};

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// Default number of entries in the recent-activity feed.
const DEFAULT_RECENT_LIMIT: i64 = 10;

/// Maximum number of entries the feed will return.
const MAX_RECENT_LIMIT: i64 = 100;

/// Query params for `GET /dashboard/recent-transactions`.
#[derive(Debug, Deserialize)]
pub struct RecentQuery {
    pub limit: Option<i64>,
}

/// GET /api/v1/dashboard/stats
///
/// Asset counts by status. The counts are read independently and may
/// reflect slightly different instants under concurrent writes.
pub async fn get_stats(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let stats = DashboardRepo::stats(&state.pool).await?;

    Ok(Json(DataResponse { data: stats }))
}

/// GET /api/v1/dashboard/recent-transactions
///
/// The most recent ledger entries with asset, type, and employee context.
pub async fn recent_transactions(
    State(state): State<AppState>,
    Query(params): Query<RecentQuery>,
) -> AppResult<impl IntoResponse> {
    let limit = params
        .limit
        .unwrap_or(DEFAULT_RECENT_LIMIT)
        .clamp(1, MAX_RECENT_LIMIT);

    let transactions = LedgerRepo::recent(&state.pool, limit).await?;

    Ok(Json(DataResponse { data: transactions }))
}
