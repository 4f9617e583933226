pub mod asset_types;
pub mod assets;
pub mod dashboard;
pub mod employees;
pub mod health;
pub mod operations;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /asset-types                        list, create
/// /asset-types/{id}                   get, update, delete (guarded)
/// /asset-types/{id}/deletion-check    non-mutating guard check
///
/// /assets                             list (filtered), create
/// /assets/available                   AVAILABLE assets for check-out
/// /assets/in-use                      IN_USE assets with current holder
/// /assets/{id}                        get (detail + history), update, delete
///
/// /employees                          list, create
/// /employees/{id}                     get (detail + history), update, delete (guarded)
/// /employees/{id}/deletion-check      non-mutating guard check
///
/// /operations/check-out               check an asset out (POST)
/// /operations/check-in                check an asset back in (POST)
///
/// /dashboard/stats                    asset counts by status
/// /dashboard/recent-transactions      most recent ledger entries
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/asset-types", asset_types::router())
        .nest("/assets", assets::router())
        .nest("/employees", employees::router())
        .nest("/operations", operations::router())
        .nest("/dashboard", dashboard::router())
}
