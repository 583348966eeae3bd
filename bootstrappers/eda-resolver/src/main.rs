//! EDA Resolver
//!
//! Prints the externally reachable EDA API endpoint as `ip:port` on stdout.
//! The domain name and HTTPS port come from the EngineConfig resource; the
//! domain is resolved to IPv4 unless it already is an IPv4 literal.
//!
//! Logs go to stderr so callers can capture stdout directly.

mod config;
mod endpoint;
mod engine_config;
mod error;
mod resolve;
#[cfg(test)]
mod test_utils;

use crate::config::ResolverConfig;
use crate::endpoint::resolve_endpoint;
use crate::error::ResolverError;
use crate::resolve::SystemResolver;
use std::process::ExitCode;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    // kube and reqwest both link rustls; pin the process-wide crypto provider
    let _ = rustls::crypto::ring::default_provider().install_default();

    match run().await {
        Ok(endpoint) => {
            println!("{}", endpoint);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<String, ResolverError> {
    let config = ResolverConfig::from_env()?;
    debug!(
        "Reading {}/{} via {}",
        config.namespace,
        config.engine_config.kubectl_target(),
        config.cluster_backend
    );

    let cluster = cluster_client::connect(config.cluster_backend).await;
    Ok(resolve_endpoint(&config, cluster, &SystemResolver).await)
}
