//! Handlers for employee CRUD.
//!
//! Deletion is guarded: an employee named by any ledger entry cannot be
//! removed.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use assetbase_core::deletion::DeleteOutcome;
use assetbase_core::error::CoreError;
use assetbase_core::types::DbId;
use assetbase_core::validation;
use assetbase_db::models::employee::{CreateEmployee, UpdateEmployee};
use assetbase_db::repositories::EmployeeRepo;
use assetbase_events::DomainEvent;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/employees
///
/// List all employees with their transaction counts, ordered by last name.
pub async fn list_employees(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let employees = EmployeeRepo::list(&state.pool).await?;

    Ok(Json(DataResponse { data: employees }))
}

/// POST /api/v1/employees
///
/// Create a new employee. First name, last name, and email are required;
/// email is unique.
pub async fn create_employee(
    State(state): State<AppState>,
    Json(input): Json<CreateEmployee>,
) -> AppResult<impl IntoResponse> {
    let input = CreateEmployee {
        first_name: validation::require_text("First name", &input.first_name)?,
        last_name: validation::require_text("Last name", &input.last_name)?,
        email: validation::require_text("Email", &input.email)?,
        department: validation::optional_text(input.department.as_deref()),
    };

    let created = EmployeeRepo::create(&state.pool, &input).await?;

    state
        .event_bus
        .publish(DomainEvent::new("employee.created").with_entity("employee", created.id));
    tracing::info!(employee_id = created.id, email = %created.email, "Employee created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: created })))
}

/// GET /api/v1/employees/{id}
///
/// Get an employee with their full ledger history (most recent first).
pub async fn get_employee(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let employee = EmployeeRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Employee",
            id,
        }))?;

    let transactions = EmployeeRepo::history(&state.pool, id).await?;

    let detail = serde_json::json!({
        "employee": employee,
        "transactions": transactions,
    });

    Ok(Json(DataResponse { data: detail }))
}

/// PUT /api/v1/employees/{id}
///
/// Update an employee. Provided name/email fields must be non-blank.
pub async fn update_employee(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateEmployee>,
) -> AppResult<impl IntoResponse> {
    let input = UpdateEmployee {
        first_name: input
            .first_name
            .as_deref()
            .map(|v| validation::require_text("First name", v))
            .transpose()?,
        last_name: input
            .last_name
            .as_deref()
            .map(|v| validation::require_text("Last name", v))
            .transpose()?,
        email: input
            .email
            .as_deref()
            .map(|v| validation::require_text("Email", v))
            .transpose()?,
        department: validation::optional_text(input.department.as_deref()),
    };

    let updated = EmployeeRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Employee",
            id,
        }))?;

    state
        .event_bus
        .publish(DomainEvent::new("employee.updated").with_entity("employee", id));
    tracing::info!(employee_id = id, "Employee updated");

    Ok(Json(DataResponse { data: updated }))
}

/// GET /api/v1/employees/{id}/deletion-check
///
/// Report whether the employee can be deleted, without mutating
/// anything. The delete itself re-checks inside its own transaction.
pub async fn check_employee_deletion(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    if EmployeeRepo::find_by_id(&state.pool, id).await?.is_none() {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Employee",
            id,
        }));
    }

    let count = EmployeeRepo::count_transactions(&state.pool, id).await?;
    let check = assetbase_core::deletion::check_employee_deletable(count);

    Ok(Json(DataResponse { data: check }))
}

/// DELETE /api/v1/employees/{id}
///
/// Delete an employee unless ledger entries still reference them.
pub async fn delete_employee(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    match EmployeeRepo::delete_guarded(&state.pool, id).await? {
        DeleteOutcome::Deleted => {
            state
                .event_bus
                .publish(DomainEvent::new("employee.deleted").with_entity("employee", id));
            tracing::info!(employee_id = id, "Employee deleted");
            Ok(StatusCode::NO_CONTENT)
        }
        DeleteOutcome::Blocked(check) => {
            Err(AppError::Core(CoreError::ReferencedEntity(check.message)))
        }
        DeleteOutcome::NotFound => Err(AppError::Core(CoreError::NotFound {
            entity: "Employee",
            id,
        })),
    }
}
