//! Cluster client errors

use thiserror::Error;

/// Errors that can occur when querying the cluster
#[derive(Debug, Error)]
pub enum ClusterError {
    /// Kubernetes API error
    #[error("Kubernetes error: {0}")]
    Kube(#[from] kube::Error),

    /// The command-line interface could not be started
    #[error("Failed to run {command}: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// The command-line interface exited non-zero
    #[error("{command} failed: {stderr}")]
    CommandFailed { command: String, stderr: String },

    /// The object exists but the requested field is absent
    #[error("Field {field} not found on {object}")]
    FieldMissing { object: String, field: String },

    /// A field value could not be decoded (base64, UTF-8)
    #[error("Failed to decode {field}: {message}")]
    Decode { field: String, message: String },

    /// Unknown backend name or malformed resource reference
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
