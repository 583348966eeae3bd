//! Resolver configuration from environment variables.

use crate::error::ResolverError;
use cluster_client::{ClusterBackend, ResourceRef};

/// Where the EngineConfig lives and how to reach the cluster
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolverConfig {
    pub namespace: String,
    pub engine_config: ResourceRef,
    pub cluster_backend: ClusterBackend,
}

impl ResolverConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ResolverError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through `lookup`, falling back to defaults for unset keys
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ResolverError> {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let cluster_backend = var("CLUSTER_BACKEND", "kube")
            .parse::<ClusterBackend>()
            .map_err(|e| ResolverError::InvalidConfig(e.to_string()))?;

        let api_version = var("EDA_ENGINE_CONFIG_API_VERSION", "core.eda.nokia.com/v1");
        if !api_version.contains('/') {
            return Err(ResolverError::InvalidConfig(format!(
                "EDA_ENGINE_CONFIG_API_VERSION must be <group>/<version>, got '{}'",
                api_version
            )));
        }

        Ok(Self {
            namespace: var("EDA_NAMESPACE", "eda-system"),
            engine_config: ResourceRef {
                api_version,
                kind: "EngineConfig".to_string(),
                plural: "engineconfigs".to_string(),
                name: var("EDA_ENGINE_CONFIG", "engine-config"),
            },
            cluster_backend,
        })
    }
}
