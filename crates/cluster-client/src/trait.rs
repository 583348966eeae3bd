//! ClusterClient trait for mocking
//!
//! Both backends implement this trait; consumers take `&dyn ClusterClientTrait`
//! so unit tests can substitute an in-memory fake.

use crate::error::ClusterError;

/// A namespaced object addressed by API version, kind and name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceRef {
    /// e.g. "core.eda.nokia.com/v1"
    pub api_version: String,
    /// e.g. "EngineConfig"
    pub kind: String,
    /// e.g. "engineconfigs"
    pub plural: String,
    /// e.g. "engine-config"
    pub name: String,
}

impl ResourceRef {
    /// Split `api_version` into (group, version); the core group is ""
    pub fn group_version(&self) -> (&str, &str) {
        match self.api_version.split_once('/') {
            Some((group, version)) => (group, version),
            None => ("", self.api_version.as_str()),
        }
    }

    /// kubectl's `<plural>/<name>` form
    pub fn kubectl_target(&self) -> String {
        format!("{}/{}", self.plural, self.name)
    }
}

/// Trait for cluster query operations
#[async_trait::async_trait]
pub trait ClusterClientTrait: Send + Sync {
    /// Read one key of a Secret and return it as plaintext
    async fn secret_value(&self, namespace: &str, name: &str, key: &str) -> Result<String, ClusterError>;

    /// Read one scalar field (dotted path, e.g. `spec.cluster.external.httpsPort`) of a resource
    async fn resource_field(&self, namespace: &str, resource: &ResourceRef, field_path: &str) -> Result<String, ClusterError>;
}
