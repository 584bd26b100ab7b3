//! EPC lookup
//!
//! Terminal front end for the EPC viewer. Looks up the addresses registered
//! under a postcode and shows the energy rating of the one you pick.
//!
//! Configuration comes from the environment (or `.env`):
//! - EPC_PAGE_HOST: host the backend runs on (default: localhost)
//! - EPC_API_URL: full backend base URL, overrides EPC_PAGE_HOST
//! - RUST_LOG: log filter, logs go to stderr

mod commands;
mod session;

use std::sync::Arc;

use anyhow::Result;
use epc_viewer::{Config, HttpEpcBackend, ViewController};
use session::Session;
use tokio::io::BufReader;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging to stderr (stdout is the screen)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env();
    tracing::info!(
        page_host = %config.page_host,
        base_url = %config.api_base_url,
        "Starting EPC lookup"
    );

    let backend = HttpEpcBackend::new(&config.api_base_url);
    let controller = ViewController::new(Arc::new(backend), config.api_base_url.clone());

    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = std::io::stdout();
    Session::new(controller).run(stdin, &mut stdout).await?;

    tracing::info!("Session ended");
    Ok(())
}
