//! Asset lifecycle state machine.
//!
//! An asset's status only changes through the check-out/check-in
//! operations defined here plus the fixed `AVAILABLE` initial state at
//! creation. The validation functions are pure; the db layer calls them
//! inside the transaction that performs the status write and ledger
//! append, so the check and the write observe the same row version.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Lifecycle status of an asset.
///
/// Stored in PostgreSQL as the `asset_status` enum; serialized on the
/// wire in SCREAMING_SNAKE_CASE to match the stored values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "asset_status", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AssetStatus {
    Available,
    InUse,
    Maintenance,
    Retired,
}

impl AssetStatus {
    /// The stored/wire form of the status.
    pub fn as_str(self) -> &'static str {
        match self {
            AssetStatus::Available => "AVAILABLE",
            AssetStatus::InUse => "IN_USE",
            AssetStatus::Maintenance => "MAINTENANCE",
            AssetStatus::Retired => "RETIRED",
        }
    }
}

impl std::fmt::Display for AssetStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ledger entry kind.
///
/// Stored in PostgreSQL as the `transaction_action` enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "transaction_action", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionAction {
    CheckOut,
    CheckIn,
}

/// Validate that an asset in `current` status may be checked out.
///
/// Only `AVAILABLE` assets can be assigned to an employee.
pub fn validate_check_out(current: AssetStatus) -> Result<(), CoreError> {
    if current == AssetStatus::Available {
        Ok(())
    } else {
        Err(CoreError::InvalidTransition(
            "Asset is not available for checkout".to_string(),
        ))
    }
}

/// Validate a check-in of an asset in `current` status, returning it to
/// `new_status`.
///
/// Only `IN_USE` assets can be checked in, and the target must be one of
/// `AVAILABLE`, `MAINTENANCE`, or `RETIRED`. There is no transition that
/// leaves the status unchanged.
pub fn validate_check_in(current: AssetStatus, new_status: AssetStatus) -> Result<(), CoreError> {
    if current != AssetStatus::InUse {
        return Err(CoreError::InvalidTransition(
            "Asset is not currently in use".to_string(),
        ));
    }
    if new_status == AssetStatus::InUse {
        return Err(CoreError::InvalidTransition(
            "Check-in status must be AVAILABLE, MAINTENANCE, or RETIRED".to_string(),
        ));
    }
    Ok(())
}
