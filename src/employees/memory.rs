//! In-process stores used by the router and poller tests.

use std::sync::{
    atomic::{AtomicBool, Ordering},
    Mutex,
};

use async_trait::async_trait;
use time::{Duration, OffsetDateTime};

use super::repo_types::{Employee, EmployeeStatus, NewEmployee};
use super::store::{EmployeeStore, StoreError};

#[derive(Default)]
struct Inner {
    rows: Vec<Employee>,
    next_id: i32,
    clock: Option<OffsetDateTime>,
}

impl Inner {
    // Strictly increasing timestamps so creation order is observable.
    fn tick(&mut self) -> OffsetDateTime {
        let now = match self.clock {
            Some(last) => last + Duration::milliseconds(1),
            None => OffsetDateTime::now_utc(),
        };
        self.clock = Some(now);
        now
    }
}

/// Mirrors the table constraints: unique email and the status check.
#[derive(Default)]
pub struct MemoryEmployeeStore {
    inner: Mutex<Inner>,
}

impl MemoryEmployeeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> Vec<Employee> {
        self.inner.lock().unwrap().rows.clone()
    }
}

#[async_trait]
impl EmployeeStore for MemoryEmployeeStore {
    async fn list(&self) -> Result<Vec<Employee>, StoreError> {
        let mut rows = self.snapshot();
        rows.sort_by(|a, b| (b.created_at, b.id).cmp(&(a.created_at, a.id)));
        Ok(rows)
    }

    async fn list_by_status(&self, status: EmployeeStatus) -> Result<Vec<Employee>, StoreError> {
        let mut rows: Vec<_> = self
            .snapshot()
            .into_iter()
            .filter(|e| e.status == status)
            .collect();
        rows.sort_by_key(|e| (e.created_at, e.id));
        Ok(rows)
    }

    async fn create(&self, new: &NewEmployee) -> Result<Employee, StoreError> {
        let mut inner = self.inner.lock().unwrap();
        if inner.rows.iter().any(|e| e.email == new.email) {
            return Err(StoreError::Constraint(format!(
                "duplicate key value violates unique constraint: email {}",
                new.email
            )));
        }
        inner.next_id += 1;
        let now = inner.tick();
        let employee = Employee {
            id: inner.next_id,
            name: new.name.clone(),
            email: new.email.clone(),
            department: new.department.clone(),
            role: new.role.clone(),
            status: EmployeeStatus::Pending,
            created_at: now,
            updated_at: now,
        };
        inner.rows.push(employee.clone());
        Ok(employee)
    }

    async fn find(&self, id: i32) -> Result<Option<Employee>, StoreError> {
        Ok(self.snapshot().into_iter().find(|e| e.id == id))
    }

    async fn update_status(&self, id: i32, status: &str) -> Result<u64, StoreError> {
        let status = status
            .parse::<EmployeeStatus>()
            .map_err(|e| StoreError::Constraint(e.to_string()))?;
        let mut inner = self.inner.lock().unwrap();
        let now = inner.tick();
        match inner.rows.iter_mut().find(|e| e.id == id) {
            Some(employee) => {
                employee.status = status;
                employee.updated_at = now;
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete(&self, id: i32) -> Result<u64, StoreError> {
        let mut inner = self.inner.lock().unwrap();
        let before = inner.rows.len();
        inner.rows.retain(|e| e.id != id);
        Ok((before - inner.rows.len()) as u64)
    }
}

/// Wraps a [`MemoryEmployeeStore`] and fails every call while `down` is set.
#[derive(Default)]
pub struct FlakyEmployeeStore {
    pub inner: MemoryEmployeeStore,
    down: AtomicBool,
}

impl FlakyEmployeeStore {
    pub fn set_down(&self, down: bool) {
        self.down.store(down, Ordering::SeqCst);
    }

    fn check(&self) -> Result<(), StoreError> {
        if self.down.load(Ordering::SeqCst) {
            Err(StoreError::Database(sqlx::Error::PoolTimedOut))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl EmployeeStore for FlakyEmployeeStore {
    async fn list(&self) -> Result<Vec<Employee>, StoreError> {
        self.check()?;
        self.inner.list().await
    }

    async fn list_by_status(&self, status: EmployeeStatus) -> Result<Vec<Employee>, StoreError> {
        self.check()?;
        self.inner.list_by_status(status).await
    }

    async fn create(&self, new: &NewEmployee) -> Result<Employee, StoreError> {
        self.check()?;
        self.inner.create(new).await
    }

    async fn find(&self, id: i32) -> Result<Option<Employee>, StoreError> {
        self.check()?;
        self.inner.find(id).await
    }

    async fn update_status(&self, id: i32, status: &str) -> Result<u64, StoreError> {
        self.check()?;
        self.inner.update_status(id, status).await
    }

    async fn delete(&self, id: i32) -> Result<u64, StoreError> {
        self.check()?;
        self.inner.delete(id).await
    }
}
