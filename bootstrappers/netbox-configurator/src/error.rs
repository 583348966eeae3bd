//! Configurator-specific error types.
//!
//! Every variant here is fatal: `main` logs it and exits non-zero. Per-resource
//! API failures are not errors at this level, they are recorded in the
//! `ConfigurationReport`.

use cluster_client::ClusterError;
use netbox_client::NetBoxError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a configurator run.
#[derive(Debug, Error)]
pub enum BootstrapError {
    /// A required local configuration file does not exist
    #[error("Configuration file not found: {}. Run init.sh first.", path.display())]
    ConfigurationMissing { path: PathBuf },

    /// A configuration file exists but could not be read
    #[error("Failed to read {}: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// The API token could not be read from the cluster
    #[error("Error getting API token: {0}")]
    CredentialRetrieval(#[source] ClusterError),

    /// NetBox never answered 200 within the polling budget
    #[error("NetBox is not ready after {attempts} attempts. Please check the deployment.")]
    ReadinessTimeout { attempts: u32 },

    /// NetBox client could not be constructed
    #[error("NetBox error: {0}")]
    NetBox(#[from] NetBoxError),
}
