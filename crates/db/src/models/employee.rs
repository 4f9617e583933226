//! Employee entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use assetbase_core::types::{DbId, Timestamp};

/// A row from the `employees` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Employee {
    pub id: DbId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub department: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Employee with the number of ledger entries naming them, for list views.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct EmployeeWithCount {
    pub id: DbId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub department: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    /// Number of transactions referencing this employee.
    pub transaction_count: i64,
}

/// DTO for creating a new employee.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateEmployee {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub department: Option<String>,
}

/// DTO for updating an existing employee. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateEmployee {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub department: Option<String>,
}
