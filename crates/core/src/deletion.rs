//! Referential-guard evaluation for entity deletion.
//!
//! Pure logic for deciding whether an asset type or employee can be
//! deleted given its dependent-row count. The counting itself happens in
//! the repository layer, inside the same transaction as the delete.

use serde::Serialize;

/// Outcome of a guarded delete performed by the repository layer.
#[derive(Debug)]
pub enum DeleteOutcome {
    /// The row existed, had no dependents, and was deleted.
    Deleted,
    /// Dependent rows exist; nothing was mutated.
    Blocked(DeletionCheck),
    /// No row with the given id exists.
    NotFound,
}

/// Result of checking whether an entity can safely be deleted.
#[derive(Debug, Clone, Serialize)]
pub struct DeletionCheck {
    /// Whether the entity has zero dependents and can be deleted.
    pub deletable: bool,
    /// Number of rows that reference this entity.
    pub dependent_count: i64,
    /// Human-readable summary of the check.
    pub message: String,
}

/// Evaluate whether an asset type with `asset_count` referencing assets
/// can be deleted.
pub fn check_asset_type_deletable(asset_count: i64) -> DeletionCheck {
    if asset_count == 0 {
        DeletionCheck {
            deletable: true,
            dependent_count: 0,
            message: "No assets reference this type. Safe to delete.".to_string(),
        }
    } else {
        DeletionCheck {
            deletable: false,
            dependent_count: asset_count,
            message: "Cannot delete asset type heavily used by assets.".to_string(),
        }
    }
}

/// Evaluate whether an employee with `transaction_count` ledger entries
/// can be deleted.
pub fn check_employee_deletable(transaction_count: i64) -> DeletionCheck {
    if transaction_count == 0 {
        DeletionCheck {
            deletable: true,
            dependent_count: 0,
            message: "No transactions reference this employee. Safe to delete.".to_string(),
        }
    } else {
        DeletionCheck {
            deletable: false,
            dependent_count: transaction_count,
            message: "Cannot delete employee with transaction history.".to_string(),
        }
    }
}
