//! Asset entity model, DTOs, and read projections.
//!
//! The `assets.price` column is NUMERIC(12,2) and rides through this
//! layer as [`rust_decimal::Decimal`]. Read projections cast it to
//! `float8` in SQL so list results leave the service as plain numbers;
//! the cast is lossy in representation but not in displayed precision
//! for currency-scale values.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use assetbase_core::lifecycle::{AssetStatus, TransactionAction};
use assetbase_core::types::{DbId, Timestamp};

/// A row from the `assets` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Asset {
    pub id: DbId,
    pub code: String,
    pub name: String,
    pub serial_number: Option<String>,
    pub type_id: DbId,
    #[serde(with = "rust_decimal::serde::float_option")]
    pub price: Option<Decimal>,
    pub purchase_date: Option<Timestamp>,
    pub status: AssetStatus,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Asset joined with its type and most recent ledger entry, for the
/// filtered list view. Ordered newest first.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AssetListItem {
    pub id: DbId,
    pub code: String,
    pub name: String,
    pub serial_number: Option<String>,
    pub type_id: DbId,
    pub price: Option<f64>,
    pub purchase_date: Option<Timestamp>,
    pub status: AssetStatus,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    /// Resolved asset type name (from JOIN).
    pub type_name: String,
    /// Action of the most recent transaction, if any.
    pub last_action: Option<TransactionAction>,
    /// Date of the most recent transaction, if any.
    pub last_transaction_date: Option<Timestamp>,
    /// Employee named by the most recent transaction, if any.
    pub last_employee_name: Option<String>,
}

/// Available asset projection for the check-out picker. Ordered by code.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AvailableAsset {
    pub id: DbId,
    pub code: String,
    pub name: String,
    pub serial_number: Option<String>,
    pub type_id: DbId,
    pub type_name: String,
    pub price: Option<f64>,
    pub purchase_date: Option<Timestamp>,
}

/// In-use asset with its current holder, derived from the most recent
/// CHECK_OUT transaction. Ordered by code.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AssetInUse {
    pub id: DbId,
    pub code: String,
    pub name: String,
    pub serial_number: Option<String>,
    pub type_id: DbId,
    pub type_name: String,
    pub price: Option<f64>,
    /// When the current holder checked the asset out.
    pub checked_out_at: Option<Timestamp>,
    pub holder_id: Option<DbId>,
    pub holder_name: Option<String>,
    pub holder_email: Option<String>,
}

/// DTO for creating a new asset. Status is always AVAILABLE at creation.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAsset {
    pub code: String,
    pub name: String,
    pub type_id: DbId,
    pub serial_number: Option<String>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub price: Option<Decimal>,
    pub purchase_date: Option<Timestamp>,
}

/// DTO for updating an existing asset. All fields are optional.
///
/// Deliberately has no `status` field: status only changes through the
/// lifecycle operations.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateAsset {
    pub code: Option<String>,
    pub name: Option<String>,
    pub type_id: Option<DbId>,
    pub serial_number: Option<String>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub price: Option<Decimal>,
    pub purchase_date: Option<Timestamp>,
}

/// Query parameters for the filtered asset list.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AssetFilter {
    /// Case-insensitive match against name, code, or serial number.
    pub q: Option<String>,
    pub status: Option<AssetStatus>,
    pub type_id: Option<DbId>,
}
