//! The asset lifecycle manager's persistence unit.
//!
//! `check_out` and `check_in` run the read-check-write-append sequence as
//! one database transaction: the asset row is locked with
//! `SELECT ... FOR UPDATE`, the transition is validated against the
//! locked status, and the status write plus ledger append commit
//! together. Two concurrent check-outs of the same asset serialize on
//! the row lock, so the second observes IN_USE and fails.

use sqlx::PgPool;

use assetbase_core::error::CoreError;
use assetbase_core::lifecycle::{self, AssetStatus};
use assetbase_core::types::DbId;

use crate::models::transaction::{CheckIn, CheckOut, Transaction, TransactionWithContext};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, asset_id, employee_id, action, date, notes, created_at";

/// Error from a lifecycle operation: either a domain-rule violation or a
/// database failure.
#[derive(Debug, thiserror::Error)]
pub enum LedgerError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Db(#[from] sqlx::Error),
}

/// Provides the lifecycle transitions and ledger reads.
pub struct LedgerRepo;

impl LedgerRepo {
    /// Check an AVAILABLE asset out to an employee.
    ///
    /// Atomically sets the asset's status to IN_USE and appends a
    /// CHECK_OUT entry. Fails with [`CoreError::InvalidTransition`] if
    /// the asset is missing or not AVAILABLE; in that case nothing is
    /// written.
    pub async fn check_out(pool: &PgPool, input: &CheckOut) -> Result<Transaction, LedgerError> {
        let mut tx = pool.begin().await?;

        let status = Self::lock_status(&mut tx, input.asset_id).await?;
        lifecycle::validate_check_out(status)?;

        sqlx::query("UPDATE assets SET status = 'IN_USE', updated_at = now() WHERE id = $1")
            .bind(input.asset_id)
            .execute(&mut *tx)
            .await?;

        let query = format!(
            "INSERT INTO transactions (asset_id, employee_id, action, date, notes)
             VALUES ($1, $2, 'CHECK_OUT', COALESCE($3, now()), $4)
             RETURNING {COLUMNS}"
        );
        let created = sqlx::query_as::<_, Transaction>(&query)
            .bind(input.asset_id)
            .bind(input.employee_id)
            .bind(input.date)
            .bind(&input.notes)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(created)
    }

    /// Check an IN_USE asset back in, returning it to the caller-supplied
    /// status (AVAILABLE, MAINTENANCE, or RETIRED).
    ///
    /// Atomically sets the new status and appends a CHECK_IN entry.
    pub async fn check_in(pool: &PgPool, input: &CheckIn) -> Result<Transaction, LedgerError> {
        let mut tx = pool.begin().await?;

        let status = Self::lock_status(&mut tx, input.asset_id).await?;
        lifecycle::validate_check_in(status, input.new_status)?;

        sqlx::query("UPDATE assets SET status = $2, updated_at = now() WHERE id = $1")
            .bind(input.asset_id)
            .bind(input.new_status)
            .execute(&mut *tx)
            .await?;

        let query = format!(
            "INSERT INTO transactions (asset_id, employee_id, action, date, notes)
             VALUES ($1, $2, 'CHECK_IN', COALESCE($3, now()), $4)
             RETURNING {COLUMNS}"
        );
        let created = sqlx::query_as::<_, Transaction>(&query)
            .bind(input.asset_id)
            .bind(input.employee_id)
            .bind(input.date)
            .bind(&input.notes)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(created)
    }

    /// Lock the asset row and read its status inside the transaction.
    async fn lock_status(
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        asset_id: DbId,
    ) -> Result<AssetStatus, LedgerError> {
        let row: Option<(AssetStatus,)> =
            sqlx::query_as("SELECT status FROM assets WHERE id = $1 FOR UPDATE")
                .bind(asset_id)
                .fetch_optional(&mut **tx)
                .await?;

        match row {
            Some((status,)) => Ok(status),
            None => Err(CoreError::NotFound {
                entity: "Asset",
                id: asset_id,
            }
            .into()),
        }
    }

    /// The most recent `limit` ledger entries with asset, type, and
    /// employee context, most recent first.
    pub async fn recent(
        pool: &PgPool,
        limit: i64,
    ) -> Result<Vec<TransactionWithContext>, sqlx::Error> {
        sqlx::query_as::<_, TransactionWithContext>(
            "SELECT t.id, t.asset_id, t.employee_id, t.action, t.date, t.notes, \
                a.code AS asset_code, a.name AS asset_name, \
                ty.name AS asset_type_name, \
                e.first_name || ' ' || e.last_name AS employee_name, \
                e.email AS employee_email \
             FROM transactions t \
             JOIN assets a ON a.id = t.asset_id \
             JOIN asset_types ty ON ty.id = a.type_id \
             JOIN employees e ON e.id = t.employee_id \
             ORDER BY t.date DESC \
             LIMIT $1",
        )
        .bind(limit)
        .fetch_all(pool)
        .await
    }
}
