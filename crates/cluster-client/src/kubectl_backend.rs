//! `kubectl` backend
//!
//! Shells out to `kubectl ... -o jsonpath=...` for environments where only a
//! working kubectl context is available.

use crate::error::ClusterError;
use crate::field::{decode_base64_text, jsonpath_arg};
use crate::cluster_trait::{ClusterClientTrait, ResourceRef};
use tokio::process::Command;
use tracing::debug;

/// Cluster client driving the kubectl command-line interface
#[derive(Debug, Clone)]
pub struct KubectlClusterClient {
    binary: String,
}

impl Default for KubectlClusterClient {
    fn default() -> Self {
        Self::new("kubectl")
    }
}

impl KubectlClusterClient {
    /// Use the given kubectl binary (name on PATH or absolute path)
    pub fn new(binary: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
        }
    }

    /// Run `kubectl -n <namespace> get <target...> -o <jsonpath>` and return stdout
    ///
    /// Non-zero exit is an error carrying kubectl's stderr.
    async fn get(&self, namespace: &str, target: &[&str], field_path: &str) -> Result<String, ClusterError> {
        let jsonpath = jsonpath_arg(field_path);
        let mut args = vec!["-n", namespace, "get"];
        args.extend_from_slice(target);
        args.push("-o");
        args.push(&jsonpath);

        let command = format!("{} {}", self.binary, args.join(" "));
        debug!("Running {}", command);

        let output = Command::new(&self.binary)
            .args(&args)
            .output()
            .await
            .map_err(|source| ClusterError::Spawn {
                command: command.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(ClusterError::CommandFailed {
                command,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).to_string())
    }
}

#[async_trait::async_trait]
impl ClusterClientTrait for KubectlClusterClient {
    async fn secret_value(&self, namespace: &str, name: &str, key: &str) -> Result<String, ClusterError> {
        let field_path = format!("data.{}", key);
        let encoded = self.get(namespace, &["secret", name], &field_path).await?;
        decode_base64_text(key, &encoded)
    }

    async fn resource_field(&self, namespace: &str, resource: &ResourceRef, field_path: &str) -> Result<String, ClusterError> {
        let target = resource.kubectl_target();
        let value = self.get(namespace, &[target.as_str()], field_path).await?;
        Ok(value.trim().to_string())
    }
}
