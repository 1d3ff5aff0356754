mod dto;
pub mod handlers;
#[cfg(test)]
pub(crate) mod memory;
mod repo;
mod repo_types;
mod store;

use crate::state::AppState;
use axum::Router;

pub use repo::PgEmployeeStore;
pub use repo_types::{Employee, EmployeeStatus, NewEmployee};
pub use store::{EmployeeStore, StoreError};

pub fn router() -> Router<AppState> {
    Router::new()
        .merge(handlers::read_routes())
        .merge(handlers::write_routes())
}
