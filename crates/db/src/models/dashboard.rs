//! Dashboard aggregation models.

use serde::Serialize;

/// Asset counts by status for the dashboard stat cards.
///
/// The four counts are read independently and may reflect slightly
/// different instants under concurrent writes.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardStats {
    pub total_assets: i64,
    pub available: i64,
    pub in_use: i64,
    pub maintenance: i64,
}
