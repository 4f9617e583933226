//! Repository for the `employees` table.

use sqlx::PgPool;

use assetbase_core::deletion::{check_employee_deletable, DeleteOutcome};
use assetbase_core::types::DbId;

use crate::models::employee::{CreateEmployee, Employee, EmployeeWithCount, UpdateEmployee};
use crate::models::transaction::EmployeeHistoryEntry;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, first_name, last_name, email, department, created_at, updated_at";

/// Provides CRUD operations for employees.
pub struct EmployeeRepo;

impl EmployeeRepo {
    /// Insert a new employee, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateEmployee) -> Result<Employee, sqlx::Error> {
        let query = format!(
            "INSERT INTO employees (first_name, last_name, email, department)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Employee>(&query)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(&input.email)
            .bind(&input.department)
            .fetch_one(pool)
            .await
    }

    /// Find an employee by their internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Employee>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM employees WHERE id = $1");
        sqlx::query_as::<_, Employee>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all employees with their transaction counts, ordered by last
    /// name.
    pub async fn list(pool: &PgPool) -> Result<Vec<EmployeeWithCount>, sqlx::Error> {
        sqlx::query_as::<_, EmployeeWithCount>(
            "SELECT e.id, e.first_name, e.last_name, e.email, e.department, \
                e.created_at, e.updated_at, \
                COUNT(t.id) AS transaction_count \
             FROM employees e \
             LEFT JOIN transactions t ON t.employee_id = e.id \
             GROUP BY e.id \
             ORDER BY e.last_name ASC, e.first_name ASC",
        )
        .fetch_all(pool)
        .await
    }

    /// An employee's ledger history with each asset and its type, most
    /// recent first.
    pub async fn history(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Vec<EmployeeHistoryEntry>, sqlx::Error> {
        sqlx::query_as::<_, EmployeeHistoryEntry>(
            "SELECT t.id, t.action, t.date, t.notes, \
                a.id AS asset_id, a.code AS asset_code, a.name AS asset_name, \
                ty.name AS asset_type_name \
             FROM transactions t \
             JOIN assets a ON a.id = t.asset_id \
             JOIN asset_types ty ON ty.id = a.type_id \
             WHERE t.employee_id = $1 \
             ORDER BY t.date DESC",
        )
        .bind(id)
        .fetch_all(pool)
        .await
    }

    /// Update an employee. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateEmployee,
    ) -> Result<Option<Employee>, sqlx::Error> {
        let query = format!(
            "UPDATE employees SET
                first_name = COALESCE($2, first_name),
                last_name = COALESCE($3, last_name),
                email = COALESCE($4, email),
                department = COALESCE($5, department),
                updated_at = now()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Employee>(&query)
            .bind(id)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(&input.email)
            .bind(&input.department)
            .fetch_optional(pool)
            .await
    }

    /// Count transactions referencing the given employee.
    pub async fn count_transactions(pool: &PgPool, id: DbId) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM transactions WHERE employee_id = $1")
                .bind(id)
                .fetch_one(pool)
                .await?;
        Ok(count)
    }

    /// Delete an employee unless transactions still reference them.
    ///
    /// The dependent count and the delete share one transaction; a ledger
    /// entry created concurrently still trips the RESTRICT foreign key.
    pub async fn delete_guarded(pool: &PgPool, id: DbId) -> Result<DeleteOutcome, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let (count,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM transactions WHERE employee_id = $1")
                .bind(id)
                .fetch_one(&mut *tx)
                .await?;

        let check = check_employee_deletable(count);
        if !check.deletable {
            return Ok(DeleteOutcome::Blocked(check));
        }

        let result = sqlx::query("DELETE FROM employees WHERE id = $1")
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
