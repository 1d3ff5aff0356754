use std::time::Duration;

use anyhow::Context;
use sqlx::{
    migrate::Migrator,
    postgres::{PgConnectOptions, PgPoolOptions},
    Connection, PgConnection, PgPool,
};
use tracing::{debug, error, info};

use crate::config::DatabaseConfig;

pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

const STARTUP_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Builds the pool without opening a connection; connections are made on demand.
///
/// Callers queue while all connections are busy. A server that cannot be
/// reached fails each acquire after `acquire_timeout`.
pub fn connect(cfg: &DatabaseConfig) -> anyhow::Result<PgPool> {
    let options = match &cfg.url {
        Some(url) => url
            .parse::<PgConnectOptions>()
            .context("parse DATABASE_URL")?,
        None => PgConnectOptions::new()
            .host(&cfg.host)
            .port(cfg.port)
            .username(&cfg.user)
            .password(&cfg.password)
            .database(&cfg.name),
    };

    Ok(PgPoolOptions::new()
        .max_connections(cfg.max_connections)
        .acquire_timeout(cfg.acquire_timeout)
        .connect_lazy_with(options))
}

/// Checks connectivity, then applies the embedded migrations. Neither a failed
/// connection nor a failed migration stops the process.
///
/// The check opens one connection outside the pool so the driver's own error
/// is logged rather than a pool timeout.
pub async fn ensure_schema(pool: &PgPool) {
    let options = pool.connect_options();
    let attempt = PgConnection::connect_with(&options);
    match tokio::time::timeout(STARTUP_CONNECT_TIMEOUT, attempt).await {
        Ok(Ok(conn)) => {
            info!("database connected");
            if let Err(e) = conn.close().await {
                debug!(error = %e, "closing startup connection failed");
            }
        }
        Ok(Err(e)) => {
            error!(error = %e, "database connection failed");
            return;
        }
        Err(_) => {
            error!(timeout = ?STARTUP_CONNECT_TIMEOUT, "database connection timed out");
            return;
        }
    }

    match MIGRATOR.run(pool).await {
        Ok(()) => info!("employees table ready"),
        Err(e) => error!(error = %e, "creating employees table failed"),
    }
}
