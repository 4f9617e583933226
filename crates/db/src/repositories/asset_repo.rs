//! Repository for the `assets` table and its read projections.

use sqlx::PgPool;

use assetbase_core::types::DbId;

use crate::models::asset::{
    Asset, AssetFilter, AssetInUse, AssetListItem, AvailableAsset, CreateAsset, UpdateAsset,
};
use crate::models::transaction::AssetHistoryEntry;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, code, name, serial_number, type_id, price, purchase_date, status, created_at, updated_at";

/// Provides CRUD operations and read projections for assets.
pub struct AssetRepo;

impl AssetRepo {
    /// Insert a new asset. Status starts at AVAILABLE (column default).
    pub async fn create(pool: &PgPool, input: &CreateAsset) -> Result<Asset, sqlx::Error> {
        let query = format!(
            "INSERT INTO assets (code, name, serial_number, type_id, price, purchase_date)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Asset>(&query)
            .bind(&input.code)
            .bind(&input.name)
            .bind(&input.serial_number)
            .bind(input.type_id)
            .bind(input.price)
            .bind(input.purchase_date)
            .fetch_one(pool)
            .await
    }

    /// Find an asset by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Asset>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM assets WHERE id = $1");
        sqlx::query_as::<_, Asset>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List assets with optional filters, newest first.
    ///
    /// The text filter matches case-insensitively against name, code, or
    /// serial number. Each row carries its type name and the most recent
    /// ledger entry (any action).
    pub async fn list(
        pool: &PgPool,
        filter: &AssetFilter,
    ) -> Result<Vec<AssetListItem>, sqlx::Error> {
        // Build dynamic WHERE clauses.
        let mut conditions = Vec::new();
        let mut bind_idx = 1u32;

        if filter.q.is_some() {
            conditions.push(format!(
                "(a.name ILIKE ${bind_idx} OR a.code ILIKE ${bind_idx} \
                 OR a.serial_number ILIKE ${bind_idx})"
            ));
            bind_idx += 1;
        }
        if filter.status.is_some() {
            conditions.push(format!("a.status = ${bind_idx}"));
            bind_idx += 1;
        }
        if filter.type_id.is_some() {
            conditions.push(format!("a.type_id = ${bind_idx}"));
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        let query = format!(
            "SELECT \
                a.id, a.code, a.name, a.serial_number, a.type_id, \
                a.price::float8 AS price, a.purchase_date, a.status, \
                a.created_at, a.updated_at, \
                ty.name AS type_name, \
                lt.action AS last_action, \
                lt.date AS last_transaction_date, \
                lt.employee_name AS last_employee_name \
             FROM assets a \
             JOIN asset_types ty ON ty.id = a.type_id \
             LEFT JOIN LATERAL ( \
                SELECT t.action, t.date, \
                    e.first_name || ' ' || e.last_name AS employee_name \
                FROM transactions t \
                JOIN employees e ON e.id = t.employee_id \
                WHERE t.asset_id = a.id \
                ORDER BY t.date DESC \
                LIMIT 1 \
             ) lt ON true \
             {where_clause} \
             ORDER BY a.created_at DESC"
        );

        let mut q = sqlx::query_as::<_, AssetListItem>(&query);
        if let Some(text) = &filter.q {
            q = q.bind(format!("%{text}%"));
        }
        if let Some(status) = filter.status {
            q = q.bind(status);
        }
        if let Some(type_id) = filter.type_id {
            q = q.bind(type_id);
        }

        q.fetch_all(pool).await
    }

    /// List AVAILABLE assets for the check-out picker, ordered by code.
    pub async fn list_available(pool: &PgPool) -> Result<Vec<AvailableAsset>, sqlx::Error> {
        sqlx::query_as::<_, AvailableAsset>(
            "SELECT a.id, a.code, a.name, a.serial_number, a.type_id, \
                ty.name AS type_name, a.price::float8 AS price, a.purchase_date \
             FROM assets a \
             JOIN asset_types ty ON ty.id = a.type_id \
             WHERE a.status = 'AVAILABLE' \
             ORDER BY a.code ASC",
        )
        .fetch_all(pool)
        .await
    }

    /// List IN_USE assets with their current holder, ordered by code.
    ///
    /// The holder is derived from the most recent CHECK_OUT entry rather
    /// than stored on the asset row.
    pub async fn list_in_use(pool: &PgPool) -> Result<Vec<AssetInUse>, sqlx::Error> {
        sqlx::query_as::<_, AssetInUse>(
            "SELECT a.id, a.code, a.name, a.serial_number, a.type_id, \
                ty.name AS type_name, a.price::float8 AS price, \
                co.date AS checked_out_at, \
                co.employee_id AS holder_id, \
                co.holder_name, co.holder_email \
             FROM assets a \
             JOIN asset_types ty ON ty.id = a.type_id \
             LEFT JOIN LATERAL ( \
                SELECT t.date, t.employee_id, \
                    e.first_name || ' ' || e.last_name AS holder_name, \
                    e.email AS holder_email \
                FROM transactions t \
                JOIN employees e ON e.id = t.employee_id \
                WHERE t.asset_id = a.id AND t.action = 'CHECK_OUT' \
                ORDER BY t.date DESC \
                LIMIT 1 \
             ) co ON true \
             WHERE a.status = 'IN_USE' \
             ORDER BY a.code ASC",
        )
        .fetch_all(pool)
        .await
    }

    /// An asset's full ledger history with each employee, most recent
    /// first.
    pub async fn history(pool: &PgPool, id: DbId) -> Result<Vec<AssetHistoryEntry>, sqlx::Error> {
        sqlx::query_as::<_, AssetHistoryEntry>(
            "SELECT t.id, t.action, t.date, t.notes, \
                e.id AS employee_id, \
                e.first_name || ' ' || e.last_name AS employee_name, \
                e.email AS employee_email \
             FROM transactions t \
             JOIN employees e ON e.id = t.employee_id \
             WHERE t.asset_id = $1 \
             ORDER BY t.date DESC",
        )
        .bind(id)
        .fetch_all(pool)
        .await
    }

    /// Update an asset's descriptive fields. Only non-`None` fields in
    /// `input` are applied. Status is never touched here.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateAsset,
    ) -> Result<Option<Asset>, sqlx::Error> {
        let query = format!(
            "UPDATE assets SET
                code = COALESCE($2, code),
                name = COALESCE($3, name),
                serial_number = COALESCE($4, serial_number),
                type_id = COALESCE($5, type_id),
                price = COALESCE($6, price),
                purchase_date = COALESCE($7, purchase_date),
                updated_at = now()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Asset>(&query)
            .bind(id)
            .bind(&input.code)
            .bind(&input.name)
            .bind(&input.serial_number)
            .bind(input.type_id)
            .bind(input.price)
            .bind(input.purchase_date)
            .fetch_optional(pool)
            .await
    }

    /// Delete an asset. Ledger rows referencing it are removed by the
    /// cascade. Returns `false` if no row existed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM assets WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
