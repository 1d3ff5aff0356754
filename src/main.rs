use std::sync::Arc;

mod app;
mod config;
mod db;
mod employees;
mod error;
mod provisioning;
mod state;
mod views;

use crate::config::AppConfig;
use crate::provisioning::{Company, LogNotifier, Provisioner};
use crate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "hr_portal=debug,axum=info,tower_http=info".to_string());
    let json_logs = std::env::var("LOG_FORMAT")
        .map(|v| v == "json")
        .unwrap_or(false);

    if json_logs {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    }

    let config = AppConfig::from_env();
    tracing::info!(
        db_host = %config.database.host,
        db_name = %config.database.name,
        "starting HR portal"
    );

    let app_state = AppState::init(&config).await?;

    let (stop_tx, mut stop_rx) = tokio::sync::watch::channel(false);
    let poller = config.provisioning.interval.map(|interval| {
        let provisioner = Provisioner::new(
            app_state.store.clone(),
            Arc::new(LogNotifier),
            Company {
                name: config.provisioning.company_name.clone(),
                short_name: config.provisioning.company_short_name.clone(),
            },
        );
        tokio::spawn(provisioner.run(interval, async move {
            let _ = stop_rx.changed().await;
        }))
    });

    let app = app::build_app(app_state);
    let served = app::serve(app, &config.server, app::shutdown_signal()).await;

    let _ = stop_tx.send(true);
    if let Some(handle) = poller {
        if let Err(e) = handle.await {
            tracing::error!(error = %e, "provisioning poller panicked");
        }
    }

    served
}
