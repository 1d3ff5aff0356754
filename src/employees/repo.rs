use async_trait::async_trait;
use sqlx::PgPool;

use super::repo_types::{Employee, EmployeeRow, EmployeeStatus, NewEmployee};
use super::store::{EmployeeStore, StoreError};

/// Postgres-backed [`EmployeeStore`].
#[derive(Clone)]
pub struct PgEmployeeStore {
    db: PgPool,
}

impl PgEmployeeStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

fn into_employees(rows: Vec<EmployeeRow>) -> Result<Vec<Employee>, StoreError> {
    rows.into_iter().map(Employee::try_from).collect()
}

#[async_trait]
impl EmployeeStore for PgEmployeeStore {
    async fn list(&self) -> Result<Vec<Employee>, StoreError> {
        let rows = sqlx::query_as::<_, EmployeeRow>(
            r#"
            SELECT id, name, email, department, role, status, created_at, updated_at
            FROM employees
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .fetch_all(&self.db)
        .await?;
        into_employees(rows)
    }

    async fn list_by_status(&self, status: EmployeeStatus) -> Result<Vec<Employee>, StoreError> {
        let rows = sqlx::query_as::<_, EmployeeRow>(
            r#"
            SELECT id, name, email, department, role, status, created_at, updated_at
            FROM employees
            WHERE status = $1
            ORDER BY created_at ASC, id ASC
            "#,
        )
        .bind(status.as_str())
        .fetch_all(&self.db)
        .await?;
        into_employees(rows)
    }

    async fn create(&self, new: &NewEmployee) -> Result<Employee, StoreError> {
        let row = sqlx::query_as::<_, EmployeeRow>(
            r#"
            INSERT INTO employees (name, email, department, role, status)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, name, email, department, role, status, created_at, updated_at
            "#,
        )
        .bind(&new.name)
        .bind(&new.email)
        .bind(&new.department)
        .bind(&new.role)
        .bind(EmployeeStatus::Pending.as_str())
        .fetch_one(&self.db)
        .await?;
        Employee::try_from(row)
    }

    async fn find(&self, id: i32) -> Result<Option<Employee>, StoreError> {
        let row = sqlx::query_as::<_, EmployeeRow>(
            r#"
            SELECT id, name, email, department, role, status, created_at, updated_at
            FROM employees
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await?;
        row.map(Employee::try_from).transpose()
    }

    async fn update_status(&self, id: i32, status: &str) -> Result<u64, StoreError> {
        let res = sqlx::query(r#"UPDATE employees SET status = $1 WHERE id = $2"#)
            .bind(status)
            .bind(id)
            .execute(&self.db)
            .await?;
        Ok(res.rows_affected())
    }

    async fn delete(&self, id: i32) -> Result<u64, StoreError> {
        let res = sqlx::query(r#"DELETE FROM employees WHERE id = $1"#)
            .bind(id)
            .execute(&self.db)
            .await?;
        Ok(res.rows_affected())
    }
}
