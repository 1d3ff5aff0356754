use serde::Deserialize;

use super::repo_types::NewEmployee;

/// `POST /add` form body. Unknown fields (such as `status`) are ignored.
#[derive(Debug, Deserialize)]
pub struct CreateEmployeeForm {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
}

impl From<CreateEmployeeForm> for NewEmployee {
    fn from(f: CreateEmployeeForm) -> Self {
        Self {
            name: f.name,
            email: f.email,
            department: f.department,
            role: f.role,
        }
    }
}

/// `POST /employee/:id/status` form body. Kept as a raw string: the store decides.
#[derive(Debug, Deserialize)]
pub struct UpdateStatusForm {
    pub status: String,
}
