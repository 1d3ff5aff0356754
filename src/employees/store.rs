use async_trait::async_trait;

use super::repo_types::{Employee, EmployeeStatus, NewEmployee};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(sqlx::Error),
    /// A unique or check constraint rejected the write.
    #[error("constraint violation: {0}")]
    Constraint(String),
    #[error("invalid row: {0}")]
    InvalidRow(String),
}

impl From<sqlx::Error> for StoreError {
    fn from(e: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db) = &e {
            if db.is_unique_violation() || db.is_check_violation() {
                return Self::Constraint(db.message().to_string());
            }
        }
        Self::Database(e)
    }
}

/// Data store gateway for the `employees` table.
///
/// Each method issues exactly one statement. Errors come back as the store
/// reported them; nothing is retried.
#[async_trait]
pub trait EmployeeStore: Send + Sync {
    /// All employees, newest first.
    async fn list(&self) -> Result<Vec<Employee>, StoreError>;

    /// Employees in one status, oldest first.
    async fn list_by_status(&self, status: EmployeeStatus) -> Result<Vec<Employee>, StoreError>;

    async fn create(&self, new: &NewEmployee) -> Result<Employee, StoreError>;

    async fn find(&self, id: i32) -> Result<Option<Employee>, StoreError>;

    /// Writes `status` as given; the store's check constraint is the only guard.
    /// Returns the number of rows touched.
    async fn update_status(&self, id: i32, status: &str) -> Result<u64, StoreError>;

    async fn delete(&self, id: i32) -> Result<u64, StoreError>;
}
