//! School Admin console
//!
//! Main application entry point

use std::sync::Arc;
use tracing::{error, info};

use school_admin::{
    config::Settings,
    handlers::{handle_command, Command},
    services::ServiceFactory,
    state::FileCredentialStore,
    utils::logging,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    // Load configuration
    let settings = Settings::new()?;
    settings.validate()?;

    // Initialize logging; the guard flushes file output on exit
    let _log_guard = logging::init_logging(&settings.logging)?;

    let args: Vec<String> = std::env::args().skip(1).collect();
    let command = Command::parse(&args)?;

    info!(version = school_admin::VERSION, base_url = %settings.api.base_url, "Starting {}", school_admin::info());

    let credentials = Arc::new(FileCredentialStore::new(&settings.credentials.store_path));
    let services = ServiceFactory::new(&settings, credentials)?;

    match handle_command(command, &services).await {
        Ok(serde_json::Value::String(text)) => {
            print!("{}", text);
            Ok(())
        }
        Ok(output) => {
            println!("{}", serde_json::to_string_pretty(&output)?);
            Ok(())
        }
        Err(e) => {
            error!(error = %e, severity = %e.severity(), "Command failed");
            Err(e.into())
        }
    }
}
