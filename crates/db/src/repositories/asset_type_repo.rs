//! Repository for the `asset_types` table.

use sqlx::PgPool;

use assetbase_core::deletion::{check_asset_type_deletable, DeleteOutcome};
use assetbase_core::types::DbId;

use crate::models::asset_type::{AssetType, AssetTypeWithCount, CreateAssetType, UpdateAssetType};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, description, created_at, updated_at";

/// Provides CRUD operations for asset types.
pub struct AssetTypeRepo;

impl AssetTypeRepo {
    /// Insert a new asset type, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateAssetType) -> Result<AssetType, sqlx::Error> {
        let query = format!(
            "INSERT INTO asset_types (name, description)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, AssetType>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .fetch_one(pool)
            .await
    }

    /// Find an asset type by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<AssetType>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM asset_types WHERE id = $1");
        sqlx::query_as::<_, AssetType>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all asset types with their asset counts, ordered by name.
    pub async fn list(pool: &PgPool) -> Result<Vec<AssetTypeWithCount>, sqlx::Error> {
        sqlx::query_as::<_, AssetTypeWithCount>(
            "SELECT t.id, t.name, t.description, t.created_at, t.updated_at, \
                COUNT(a.id) AS asset_count \
             FROM asset_types t \
             LEFT JOIN assets a ON a.type_id = t.id \
             GROUP BY t.id \
             ORDER BY t.name ASC",
        )
        .fetch_all(pool)
        .await
    }

    /// Update an asset type. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateAssetType,
    ) -> Result<Option<AssetType>, sqlx::Error> {
        let query = format!(
            "UPDATE asset_types SET
                name = COALESCE($2, name),
                description = COALESCE($3, description),
                updated_at = now()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, AssetType>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.description)
            .fetch_optional(pool)
            .await
    }

    /// Count assets referencing the given type.
    pub async fn count_assets(pool: &PgPool, id: DbId) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM assets WHERE type_id = $1")
            .bind(id)
            .fetch_one(pool)
            .await?;
        Ok(count)
    }

    /// Delete an asset type unless assets still reference it.
    ///
    /// The dependent count and the delete share one transaction. A
    /// reference created concurrently still trips the RESTRICT foreign
    /// key, so the guard cannot be raced into orphaning data.
    pub async fn delete_guarded(pool: &PgPool, id: DbId) -> Result<DeleteOutcome, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM assets WHERE type_id = $1")
            .bind(id)
            .fetch_one(&mut *tx)
            .await?;

        let check = check_asset_type_deletable(count);
        if !check.deletable {
            return Ok(DeleteOutcome::Blocked(check));
        }

        let result = sqlx::query("DELETE FROM asset_types WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        if result.rows_affected() == 0 {
            Ok(DeleteOutcome::NotFound)
        } else {
            Ok(DeleteOutcome::Deleted)
        }
    }
}
