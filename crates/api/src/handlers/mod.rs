//! HTTP handlers for the `/api/v1` route tree.

pub mod asset_types;
pub mod assets;
pub mod dashboard;
pub mod employees;
pub mod operations;
