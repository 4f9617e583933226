//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod asset_repo;
pub mod asset_type_repo;
pub mod dashboard_repo;
pub mod employee_repo;
pub mod ledger_repo;

pub use asset_repo::AssetRepo;
pub use asset_type_repo::AssetTypeRepo;
pub use dashboard_repo::DashboardRepo;
pub use employee_repo::EmployeeRepo;
pub use ledger_repo::{LedgerError, LedgerRepo};
