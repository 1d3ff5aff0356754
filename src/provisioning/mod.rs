//! Background activation of pending employees.
//!
//! Each tick selects every employee still in `pending`, marks it `active`
//! and sends a welcome message. The two steps are independent: a failed
//! notification does not undo the activation and vice versa.

mod notifier;

use std::{future::Future, sync::Arc, time::Duration};

use tokio::time::MissedTickBehavior;
use tracing::{debug, error, info, instrument};

use crate::employees::{EmployeeStatus, EmployeeStore, StoreError};

pub use notifier::{Company, LogNotifier, Notifier, WelcomeMessage};

pub struct Provisioner {
    store: Arc<dyn EmployeeStore>,
    notifier: Arc<dyn Notifier>,
    company: Company,
}

impl Provisioner {
    pub fn new(
        store: Arc<dyn EmployeeStore>,
        notifier: Arc<dyn Notifier>,
        company: Company,
    ) -> Self {
        Self {
            store,
            notifier,
            company,
        }
    }

    /// One poll. Returns how many pending employees were processed.
    #[instrument(skip(self))]
    pub async fn run_once(&self) -> Result<usize, StoreError> {
        let pending = self.store.list_by_status(EmployeeStatus::Pending).await?;
        debug!(count = pending.len(), "pending employees");

        for employee in &pending {
            match self
                .store
                .update_status(employee.id, EmployeeStatus::Active.as_str())
                .await
            {
                Ok(_) => info!(id = employee.id, name = %employee.name, "employee activated"),
                Err(e) => error!(error = %e, id = employee.id, "activating employee failed"),
            }

            let message = WelcomeMessage::compose(&self.company, employee);
            if let Err(e) = self.notifier.send_welcome(&message).await {
                error!(error = %e, id = employee.id, "sending welcome message failed");
            }
        }

        Ok(pending.len())
    }

    /// Polls every `interval` until `shutdown` resolves.
    pub async fn run<F>(self, interval: Duration, shutdown: F)
    where
        F: Future<Output = ()>,
    {
        let mut ticker = tokio::time::interval(interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        tokio::pin!(shutdown);

        info!(?interval, "provisioning poller started");
        loop {
            tokio::select! {
                _ = &mut shutdown => break,
                _ = ticker.tick() => {
                    if let Err(e) = self.run_once().await {
                        error!(error = %e, "provisioning poll failed");
                    }
                }
            }
        }
        info!("provisioning poller stopped");
    }
}
