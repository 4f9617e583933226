//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for patches
//! - Read projections joining related rows for list views

pub mod asset;
pub mod asset_type;
pub mod dashboard;
pub mod employee;
pub mod transaction;
