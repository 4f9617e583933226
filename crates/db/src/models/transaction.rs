//! Transaction ledger model and DTOs.
//!
//! Ledger rows are append-only: no repository method updates or deletes
//! them.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use assetbase_core::lifecycle::{AssetStatus, TransactionAction};
use assetbase_core::types::{DbId, Timestamp};

/// A row from the `transactions` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Transaction {
    pub id: DbId,
    pub asset_id: DbId,
    pub employee_id: DbId,
    pub action: TransactionAction,
    pub date: Timestamp,
    pub notes: Option<String>,
    pub created_at: Timestamp,
}

/// Transaction joined with its asset (and the asset's type) and employee,
/// for the recent-activity feed.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct TransactionWithContext {
    pub id: DbId,
    pub asset_id: DbId,
    pub employee_id: DbId,
    pub action: TransactionAction,
    pub date: Timestamp,
    pub notes: Option<String>,
    pub asset_code: String,
    pub asset_name: String,
    pub asset_type_name: String,
    pub employee_name: String,
    pub employee_email: String,
}

/// A ledger entry in an asset's history, with the employee it names.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AssetHistoryEntry {
    pub id: DbId,
    pub action: TransactionAction,
    pub date: Timestamp,
    pub notes: Option<String>,
    pub employee_id: DbId,
    pub employee_name: String,
    pub employee_email: String,
}

/// A ledger entry in an employee's history, with the asset it names.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct EmployeeHistoryEntry {
    pub id: DbId,
    pub action: TransactionAction,
    pub date: Timestamp,
    pub notes: Option<String>,
    pub asset_id: DbId,
    pub asset_code: String,
    pub asset_name: String,
    pub asset_type_name: String,
}

/// DTO for checking an asset out to an employee.
#[derive(Debug, Clone, Deserialize)]
pub struct CheckOut {
    pub asset_id: DbId,
    pub employee_id: DbId,
    /// Defaults to now when omitted.
    pub date: Option<Timestamp>,
    pub notes: Option<String>,
}

/// DTO for checking an asset back in.
#[derive(Debug, Clone, Deserialize)]
pub struct CheckIn {
    pub asset_id: DbId,
    pub employee_id: DbId,
    /// Status the asset returns to: AVAILABLE, MAINTENANCE, or RETIRED.
    pub new_status: AssetStatus,
    /// Defaults to now when omitted.
    pub date: Option<Timestamp>,
    pub notes: Option<String>,
}
