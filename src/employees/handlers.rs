use axum::{
    extract::{Path, State},
    response::{Html, Redirect},
    routing::{get, post},
    Form, Router,
};
use tracing::{info, instrument};

use super::dto::{CreateEmployeeForm, UpdateStatusForm};
use super::repo_types::NewEmployee;
use crate::{error::AppError, state::AppState};

// --- public routers ---

pub fn read_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_employees))
        .route("/add", get(add_form))
        .route("/employee/:id", get(show_employee))
}

pub fn write_routes() -> Router<AppState> {
    Router::new()
        .route("/add", post(create_employee))
        .route("/employee/:id/status", post(update_status))
        .route("/employee/:id/delete", post(delete_employee))
}

// --- handlers ---

/// Path ids beyond the `SERIAL` range can never match a row.
fn row_id(id: i64) -> Option<i32> {
    i32::try_from(id).ok()
}

#[instrument(skip(state))]
pub async fn list_employees(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let employees = state
        .store
        .list()
        .await
        .map_err(AppError::store("Database error"))?;
    Ok(Html(state.views.render_list(&employees)?))
}

#[instrument(skip(state))]
pub async fn add_form(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    Ok(Html(state.views.render_form()?))
}

/// POST /add. Status always starts as `pending`.
#[instrument(skip(state))]
pub async fn create_employee(
    State(state): State<AppState>,
    Form(form): Form<CreateEmployeeForm>,
) -> Result<Redirect, AppError> {
    let new = NewEmployee::from(form);
    let employee = state
        .store
        .create(&new)
        .await
        .map_err(AppError::store("Error adding employee"))?;
    info!(id = employee.id, name = %employee.name, email = %employee.email, "new employee added");
    Ok(Redirect::to("/"))
}

/// GET /employee/:id. Zero rows is a 404; a failing store is a 500.
#[instrument(skip(state))]
pub async fn show_employee(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Html<String>, AppError> {
    let id = row_id(id).ok_or(AppError::NotFound)?;
    let employee = state
        .store
        .find(id)
        .await
        .map_err(AppError::store("Error fetching employee"))?
        .ok_or(AppError::NotFound)?;
    Ok(Html(state.views.render_detail(&employee)?))
}

/// Any status may follow any other; only the column check applies.
#[instrument(skip(state))]
pub async fn update_status(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Form(form): Form<UpdateStatusForm>,
) -> Result<Redirect, AppError> {
    let Some(id) = row_id(id) else {
        info!(id, "status update for unknown employee ignored");
        return Ok(Redirect::to("/"));
    };
    let affected = state
        .store
        .update_status(id, &form.status)
        .await
        .map_err(AppError::store("Error updating status"))?;
    info!(id, status = %form.status, affected, "employee status updated");
    Ok(Redirect::to("/"))
}

#[instrument(skip(state))]
pub async fn delete_employee(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Redirect, AppError> {
    let Some(id) = row_id(id) else {
        info!(id, "delete for unknown employee ignored");
        return Ok(Redirect::to("/"));
    };
    let affected = state
        .store
        .delete(id)
        .await
        .map_err(AppError::store("Error deleting employee"))?;
    info!(id, affected, "employee deleted");
    Ok(Redirect::to("/"))
}
