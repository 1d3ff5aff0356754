use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::OffsetDateTime;

use super::store::StoreError;

/// Lifecycle state of an employee record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmployeeStatus {
    Pending,
    Active,
    Inactive,
}

impl EmployeeStatus {
    pub const ALL: [EmployeeStatus; 3] = [Self::Pending, Self::Active, Self::Inactive];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Active => "active",
            Self::Inactive => "inactive",
        }
    }
}

impl fmt::Display for EmployeeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown employee status `{0}`")]
pub struct UnknownStatus(pub String);

impl FromStr for EmployeeStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "active" => Ok(Self::Active),
            "inactive" => Ok(Self::Inactive),
            other => Err(UnknownStatus(other.to_string())),
        }
    }
}

/// Raw `employees` row as Postgres returns it.
#[derive(Debug, Clone, FromRow)]
pub struct EmployeeRow {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub department: Option<String>,
    pub role: Option<String>,
    pub status: String,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

/// Employee record handed to handlers and views.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Employee {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub department: Option<String>,
    pub role: Option<String>,
    pub status: EmployeeStatus,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

impl TryFrom<EmployeeRow> for Employee {
    type Error = StoreError;

    fn try_from(r: EmployeeRow) -> Result<Self, Self::Error> {
        let status = r
            .status
            .parse::<EmployeeStatus>()
            .map_err(|e| StoreError::InvalidRow(format!("employee {}: {}", r.id, e)))?;
        Ok(Self {
            id: r.id,
            name: r.name,
            email: r.email,
            department: r.department,
            role: r.role,
            status,
            created_at: r.created_at,
            updated_at: r.updated_at,
        })
    }
}

/// Insert payload; status is not part of it, new rows always start `pending`.
#[derive(Debug, Clone)]
pub struct NewEmployee {
    pub name: String,
    pub email: String,
    pub department: Option<String>,
    pub role: Option<String>,
}
