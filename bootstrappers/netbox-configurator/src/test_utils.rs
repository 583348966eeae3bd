//! Test doubles shared by the configurator's unit tests

use cluster_client::{ClusterClientTrait, ClusterError, ResourceRef};
use std::collections::HashMap;
use std::path::PathBuf;
use tempfile::TempDir;

/// In-memory cluster holding plaintext secret values keyed by (namespace, name, key)
#[derive(Default)]
pub struct FakeCluster {
    secrets: HashMap<(String, String, String), String>,
}

impl FakeCluster {
    pub fn with_secret(namespace: &str, name: &str, key: &str, value: &str) -> Self {
        Self {
            secrets: HashMap::from([(
                (namespace.to_string(), name.to_string(), key.to_string()),
                value.to_string(),
            )]),
        }
    }

    /// The default NetBox superuser token secret holding `token`
    pub fn with_token(token: &str) -> Self {
        Self::with_secret("netbox", "netbox-server-superuser", "api_token", token)
    }
}

#[async_trait::async_trait]
impl ClusterClientTrait for FakeCluster {
    async fn secret_value(&self, namespace: &str, name: &str, key: &str) -> Result<String, ClusterError> {
        self.secrets
            .get(&(namespace.to_string(), name.to_string(), key.to_string()))
            .cloned()
            .ok_or_else(|| ClusterError::CommandFailed {
                command: "kubectl get secret".to_string(),
                stderr: format!("Error from server (NotFound): secrets \"{}\" not found", name),
            })
    }

    async fn resource_field(&self, _namespace: &str, _resource: &ResourceRef, field_path: &str) -> Result<String, ClusterError> {
        Err(ClusterError::InvalidConfig(format!("unexpected query for {}", field_path)))
    }
}

/// Write `contents` to `name` inside `dir`
pub fn write_file(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, contents).unwrap();
    path
}
