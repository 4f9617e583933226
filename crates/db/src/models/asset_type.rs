//! Asset type entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use assetbase_core::types::{DbId, Timestamp};

/// A row from the `asset_types` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AssetType {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Asset type with the number of assets referencing it, for list views.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AssetTypeWithCount {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    /// Number of assets referencing this type.
    pub asset_count: i64,
}

/// DTO for creating a new asset type.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAssetType {
    pub name: String,
    pub description: Option<String>,
}

/// DTO for updating an existing asset type. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateAssetType {
    pub name: Option<String>,
    pub description: Option<String>,
}
