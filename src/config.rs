use std::time::Duration;

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: Option<String>,
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub name: String,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone)]
pub struct ProvisioningConfig {
    /// `None` keeps the pending-employee poller switched off.
    pub interval: Option<Duration>,
    pub company_name: String,
    /// Used in the welcome subject line and sign-off.
    pub company_short_name: String,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database: DatabaseConfig,
    pub server: ServerConfig,
    pub provisioning: ProvisioningConfig,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup; every value has a default.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let string = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.into());
        let parsed = |key: &str| lookup(key).and_then(|v| v.trim().parse::<u64>().ok());

        let database = DatabaseConfig {
            url: lookup("DATABASE_URL").filter(|v| !v.is_empty()),
            host: string("DB_HOST", "localhost"),
            port: lookup("DB_PORT")
                .and_then(|v| v.trim().parse::<u16>().ok())
                .unwrap_or(5432),
            user: string("DB_USER", "admin"),
            password: string("DB_PASSWORD", "password"),
            name: string("DB_NAME", "employee_db"),
            max_connections: lookup("DB_MAX_CONNECTIONS")
                .and_then(|v| v.trim().parse::<u32>().ok())
                .filter(|n| *n > 0)
                .unwrap_or(10),
            acquire_timeout: Duration::from_secs(parsed("DB_ACQUIRE_TIMEOUT_SECS").unwrap_or(5)),
        };

        let server = ServerConfig {
            host: string("APP_HOST", "0.0.0.0"),
            port: lookup("APP_PORT")
                .and_then(|v| v.trim().parse::<u16>().ok())
                .unwrap_or(3000),
        };

        let provisioning = ProvisioningConfig {
            interval: parsed("PROVISIONING_INTERVAL_SECS")
                .filter(|secs| *secs > 0)
                .map(Duration::from_secs),
            company_name: string("COMPANY_NAME", "Innovatech Solutions"),
            company_short_name: string("COMPANY_SHORT_NAME", "Innovatech"),
        };

        Self {
            database,
            server,
            provisioning,
        }
    }
}
