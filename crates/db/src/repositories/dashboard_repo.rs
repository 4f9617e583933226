//! Dashboard aggregation queries.

use sqlx::PgPool;

use assetbase_core::lifecycle::AssetStatus;

use crate::models::dashboard::DashboardStats;

/// Provides the dashboard stat-card counts.
pub struct DashboardRepo;

impl DashboardRepo {
    /// Asset counts by status.
    ///
    /// The four counts run as independent queries without a wrapping
    /// transaction; under concurrent writes they may reflect slightly
    /// different instants. The dashboard tolerates that.
    pub async fn stats(pool: &PgPool) -> Result<DashboardStats, sqlx::Error> {
        let (total_assets, available, in_use, maintenance) = tokio::try_join!(
            Self::count_all(pool),
            Self::count_by_status(pool, AssetStatus::Available),
            Self::count_by_status(pool, AssetStatus::InUse),
            Self::count_by_status(pool, AssetStatus::Maintenance),
        )?;

        Ok(DashboardStats {
            total_assets,
            available,
            in_use,
            maintenance,
        })
    }

    async fn count_all(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM assets")
            .fetch_one(pool)
            .await?;
        Ok(count)
    }

    async fn count_by_status(pool: &PgPool, status: AssetStatus) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM assets WHERE status = $1")
            .bind(status)
            .fetch_one(pool)
            .await?;
        Ok(count)
    }
}
