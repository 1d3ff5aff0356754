use crate::config::AppConfig;
use crate::db;
use crate::employees::{EmployeeStore, PgEmployeeStore};
use crate::views::{TeraViews, ViewRenderer};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn EmployeeStore>,
    pub views: Arc<dyn ViewRenderer>,
}

impl AppState {
    /// Connects the pool and prepares the schema. Database trouble is logged,
    /// not returned: the server still starts and requests fail one by one.
    pub async fn init(config: &AppConfig) -> anyhow::Result<Self> {
        let pool = db::connect(&config.database)?;
        db::ensure_schema(&pool).await;

        let store = Arc::new(PgEmployeeStore::new(pool)) as Arc<dyn EmployeeStore>;
        let views = Arc::new(TeraViews::new()?) as Arc<dyn ViewRenderer>;
        Ok(Self::from_parts(store, views))
    }

    pub fn from_parts(store: Arc<dyn EmployeeStore>, views: Arc<dyn ViewRenderer>) -> Self {
        Self { store, views }
    }
}
