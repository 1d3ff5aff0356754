use async_trait::async_trait;
use tracing::info;

use crate::employees::Employee;

/// Sender identity for welcome messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Company {
    /// Used in the greeting, e.g. "Innovatech Solutions".
    pub name: String,
    /// Used in the subject and sign-off, e.g. "Innovatech".
    pub short_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WelcomeMessage {
    pub to: String,
    pub subject: String,
    pub body: String,
}

impl WelcomeMessage {
    pub fn compose(company: &Company, employee: &Employee) -> Self {
        let dash = |v: &Option<String>| v.clone().unwrap_or_else(|| "-".into());
        let body = format!(
            "Hello {name},\n\
             \n\
             Welcome to {company}!\n\
             \n\
             Your account has been successfully created with the following details:\n\
             \n\
             Name: {name}\n\
             Email: {email}\n\
             Department: {department}\n\
             Role: {role}\n\
             \n\
             Your IT access has been provisioned and you should now be able to access:\n\
             - Email system\n\
             - Company intranet\n\
             - Department-specific applications\n\
             \n\
             If you have any questions, please contact IT support.\n\
             \n\
             Best regards,\n\
             {team} IT Team\n",
            company = company.name,
            team = company.short_name,
            name = employee.name,
            email = employee.email,
            department = dash(&employee.department),
            role = dash(&employee.role),
        );
        Self {
            to: employee.email.clone(),
            subject: format!("Welcome to {}, {}!", company.short_name, employee.name),
            body,
        }
    }
}

/// Delivers welcome messages to newly provisioned employees.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn send_welcome(&self, message: &WelcomeMessage) -> anyhow::Result<()>;
}

/// Writes the message to the log instead of a mail transport.
pub struct LogNotifier;

#[async_trait]
impl Notifier for LogNotifier {
    async fn send_welcome(&self, message: &WelcomeMessage) -> anyhow::Result<()> {
        info!(to = %message.to, subject = %message.subject, body = %message.body, "welcome message");
        Ok(())
    }
}
