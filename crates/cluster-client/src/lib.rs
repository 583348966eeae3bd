//! Cluster query client
//!
//! Typed access to the two kinds of cluster reads the bootstrappers need:
//! a single key of a Secret, and a single scalar field of an arbitrary
//! (custom) resource.
//!
//! Two backends implement [`ClusterClientTrait`]:
//! - [`KubeClusterClient`] talks to the API server through `kube`
//! - [`KubectlClusterClient`] runs `kubectl ... -o jsonpath=...`
//!
//! # Example
//!
//! ```no_run
//! use cluster_client::{connect, ClusterBackend};
//!
//! # async fn example() -> Result<(), cluster_client::ClusterError> {
//! let cluster = connect(ClusterBackend::Kube).await?;
//! let token = cluster
//!     .secret_value("netbox", "netbox-server-superuser", "api_token")
//!     .await?;
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod field;
pub mod kube_backend;
pub mod kubectl_backend;
#[path = "trait.rs"]
pub mod cluster_trait;

pub use cluster_trait::{ClusterClientTrait, ResourceRef};
pub use error::ClusterError;
pub use kube_backend::KubeClusterClient;
pub use kubectl_backend::KubectlClusterClient;

use std::fmt;
use std::str::FromStr;

/// Which implementation serves cluster queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClusterBackend {
    /// Kubernetes API via the default kubeconfig / service account
    #[default]
    Kube,
    /// The kubectl command-line interface on PATH
    Kubectl,
}

impl FromStr for ClusterBackend {
    type Err = ClusterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "kube" | "api" => Ok(ClusterBackend::Kube),
            "kubectl" => Ok(ClusterBackend::Kubectl),
            other => Err(ClusterError::InvalidConfig(format!(
                "unknown cluster backend '{}' (expected 'kube' or 'kubectl')",
                other
            ))),
        }
    }
}

impl fmt::Display for ClusterBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClusterBackend::Kube => write!(f, "kube"),
            ClusterBackend::Kubectl => write!(f, "kubectl"),
        }
    }
}

/// Build the client for `backend`
pub async fn connect(backend: ClusterBackend) -> Result<Box<dyn ClusterClientTrait>, ClusterError> {
    match backend {
        ClusterBackend::Kube => Ok(Box::new(KubeClusterClient::try_default().await?)),
        ClusterBackend::Kubectl => Ok(Box::new(KubectlClusterClient::default())),
    }
}
