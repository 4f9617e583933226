//! Route definitions for employees.

use axum::routing::get;
use axum::Router;

use crate::handlers::employees;
use crate::state::AppState;

/// Routes mounted at `/employees`.
///
/// ```text
/// GET    /          -> list_employees
/// POST   /          -> create_employee
/// GET    /{id}                 -> get_employee (detail with history)
/// PUT    /{id}                 -> update_employee
/// DELETE /{id}                 -> delete_employee (guarded)
/// GET    /{id}/deletion-check  -> check_employee_deletion
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(employees::list_employees).post(employees::create_employee),
        )
        .route(
            "/{id}",
            get(employees::get_employee)
                .put(employees::update_employee)
                .delete(employees::delete_employee),
        )
        .route(
            "/{id}/deletion-check",
            get(employees::check_employee_deletion),
        )
}
