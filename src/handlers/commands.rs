//! Console command handlers
//!
//! Commands accepted by the `school-admin` binary. Each one performs a
//! single service call and yields the decoded response as JSON.

use serde_json::{json, Value};

use super::login::{LoginFlow, LoginForm, LoginOutcome};
use crate::models::{InquiryFilter, Pagination, ResourceFilter};
use crate::services::ServiceFactory;
use crate::utils::errors::{SchoolAdminError, Result};

/// All available console commands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Login { email: String, password: String },
    Logout,
    Dashboard,
    Inquiries,
    Resources,
    Messages,
    Unread,
    Help,
}

impl Command {
    /// Parse command-line arguments (without the program name)
    pub fn parse<S: AsRef<str>>(args: &[S]) -> Result<Self> {
        let args: Vec<&str> = args.iter().map(AsRef::as_ref).collect();
        match args.as_slice() {
            ["login", email, password] => Ok(Command::Login {
                email: email.to_string(),
                password: password.to_string(),
            }),
            ["login", ..] => Err(SchoolAdminError::InvalidInput("usage: login <email> <password>".to_string())),
            ["logout"] => Ok(Command::Logout),
            ["dashboard"] => Ok(Command::Dashboard),
            ["inquiries"] => Ok(Command::Inquiries),
            ["resources"] => Ok(Command::Resources),
            ["messages"] => Ok(Command::Messages),
            ["unread"] => Ok(Command::Unread),
            [] | ["help"] | ["--help"] | ["-h"] => Ok(Command::Help),
            [other, ..] => Err(SchoolAdminError::InvalidInput(format!("unknown command: {}", other))),
        }
    }
}

/// Usage text printed by `help`
pub fn help_text() -> &'static str {
    "school-admin commands:\n\
     \x20 login <email> <password>  log in and store the access token\n\
     \x20 logout                    forget the stored access token\n\
     \x20 dashboard                 accounting dashboard\n\
     \x20 inquiries                 list inquiries\n\
     \x20 resources                 list learning resources\n\
     \x20 messages                  list your messages\n\
     \x20 unread                    count unread messages\n"
}

/// Main command dispatcher
pub async fn handle_command(command: Command, services: &ServiceFactory) -> Result<Value> {
    let flow = LoginFlow::new(services.auth_service.clone(), services.credentials());

    match command {
        Command::Login { email, password } => match flow.submit(&LoginForm::new(email, password)).await? {
            LoginOutcome::LoggedIn { route, auth } => Ok(json!({
                "route": route,
                "user": auth.user,
                "token_type": auth.token_type,
            })),
            LoginOutcome::Rejected { status, alert } => Err(SchoolAdminError::Api { status, detail: alert }),
            LoginOutcome::Invalid(errors) => Err(SchoolAdminError::InvalidInput(
                [errors.email, errors.password]
                    .into_iter()
                    .flatten()
                    .collect::<Vec<_>>()
                    .join("; "),
            )),
        },
        Command::Logout => {
            flow.logout()?;
            Ok(json!({"message": "Logged out"}))
        }
        Command::Dashboard => to_json(services.accounting_service.dashboard().await?),
        Command::Inquiries => to_json(services.inquiry_service.list_inquiries(&InquiryFilter::default()).await?),
        Command::Resources => to_json(services.resource_service.list_resources(&ResourceFilter::default()).await?),
        Command::Messages => to_json(services.messaging_service.list_messages(&Pagination::default()).await?),
        Command::Unread => Ok(json!({"unread_count": services.messaging_service.unread_count().await?})),
        Command::Help => Ok(Value::String(help_text().to_string())),
    }
}

fn to_json<T: serde::Serialize>(value: T) -> Result<Value> {
    Ok(serde_json::to_value(value)?)
}
