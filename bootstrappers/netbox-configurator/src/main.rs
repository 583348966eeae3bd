//! NetBox Configurator
//!
//! One-shot bootstrapper that prepares a freshly deployed NetBox for EDA:
//! - Tags labelling the allocation pools
//! - A webhook pointing at the EDA NetBox receiver
//! - An event rule firing the webhook on IP address and prefix changes
//! - Example allocation pool prefixes
//!
//! Safe to re-run: objects that already exist are left untouched.

mod bootstrap;
mod config;
mod configurator;
mod credentials;
mod error;
mod readiness;
mod report;
mod resources;
#[cfg(test)]
mod test_utils;

use crate::bootstrap::bootstrap;
use crate::config::BootstrapConfig;
use crate::error::BootstrapError;
use netbox_client::NetBoxClient;
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // kube and reqwest both link rustls; pin the process-wide crypto provider
    let _ = rustls::crypto::ring::default_provider().install_default();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), BootstrapError> {
    let config = BootstrapConfig::from_env()?;
    bootstrap(&config, cluster_client::connect(config.cluster_backend), NetBoxClient::new).await?;
    Ok(())
}
