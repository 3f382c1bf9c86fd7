//! Contact Form Demo - Main entry point
//!
//! Runs the mock submission endpoint that the contact form posts to.

use anyhow::Result;
use contact_form_demo::Config;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging (stderr only, leaving stdout for tooling)
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    // Load configuration
    let config = match Config::from_env() {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    info!("Starting mock submission endpoint on {}", config.bind_addr);

    // Run the server (this will block until the process exits)
    contact_form_demo::server::serve(&config.bind_addr).await?;

    Ok(())
}
