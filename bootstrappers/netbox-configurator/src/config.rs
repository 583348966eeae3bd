//! Run configuration.
//!
//! `BootstrapConfig` is built once in `main` from environment variables and
//! passed down by reference. The NetBox URL and EDA address themselves come
//! from the two files written by the installer (`ConfigPair`).

use crate::error::BootstrapError;
use crate::readiness::ReadinessPolicy;
use cluster_client::ClusterBackend;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Where the NetBox API token lives in the cluster
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecretRef {
    pub namespace: String,
    pub name: String,
    pub key: String,
}

/// Settings for one configurator run
#[derive(Debug, Clone)]
pub struct BootstrapConfig {
    pub netbox_url_file: PathBuf,
    pub eda_api_address_file: PathBuf,
    pub token_secret: SecretRef,
    pub cluster_backend: ClusterBackend,
    pub readiness: ReadinessPolicy,
}

impl BootstrapConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, BootstrapError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through `lookup`, falling back to defaults for unset keys
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, BootstrapError> {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let cluster_backend = var("CLUSTER_BACKEND", "kube")
            .parse::<ClusterBackend>()
            .map_err(|e| BootstrapError::InvalidConfig(e.to_string()))?;

        let max_attempts = parse_number("NETBOX_READY_ATTEMPTS", &var("NETBOX_READY_ATTEMPTS", "30"))?;
        let interval_secs = parse_number("NETBOX_READY_INTERVAL_SECS", &var("NETBOX_READY_INTERVAL_SECS", "10"))?;
        if max_attempts == 0 {
            return Err(BootstrapError::InvalidConfig(
                "NETBOX_READY_ATTEMPTS must be at least 1".to_string(),
            ));
        }

        Ok(Self {
            netbox_url_file: PathBuf::from(var("NETBOX_URL_FILE", ".netbox_url")),
            eda_api_address_file: PathBuf::from(var("EDA_API_ADDRESS_FILE", ".eda_api_address")),
            token_secret: SecretRef {
                namespace: var("NETBOX_NAMESPACE", "netbox"),
                name: var("NETBOX_TOKEN_SECRET", "netbox-server-superuser"),
                key: var("NETBOX_TOKEN_FIELD", "api_token"),
            },
            cluster_backend,
            readiness: ReadinessPolicy {
                max_attempts,
                interval: Duration::from_secs(u64::from(interval_secs)),
            },
        })
    }
}

fn parse_number(key: &str, value: &str) -> Result<u32, BootstrapError> {
    value
        .trim()
        .parse()
        .map_err(|_| BootstrapError::InvalidConfig(format!("{} must be a non-negative integer, got '{}'", key, value)))
}

/// NetBox base URL and EDA API address as written by the installer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigPair {
    pub netbox_url: String,
    pub eda_api_address: String,
}

/// Read and trim the two configuration files
///
/// A missing file is `ConfigurationMissing`; an empty NetBox URL is rejected
/// since nothing after this point could succeed without it.
pub fn read_config_files(netbox_url_file: &Path, eda_api_address_file: &Path) -> Result<ConfigPair, BootstrapError> {
    let netbox_url = read_trimmed(netbox_url_file)?;
    let eda_api_address = read_trimmed(eda_api_address_file)?;

    if netbox_url.is_empty() {
        return Err(BootstrapError::InvalidConfig(format!(
            "{} is empty",
            netbox_url_file.display()
        )));
    }

    Ok(ConfigPair {
        netbox_url,
        eda_api_address,
    })
}

fn read_trimmed(path: &Path) -> Result<String, BootstrapError> {
    match std::fs::read_to_string(path) {
        Ok(contents) => Ok(contents.trim().to_string()),
        Err(e) if e.kind() == ErrorKind::NotFound => Err(BootstrapError::ConfigurationMissing {
            path: path.to_path_buf(),
        }),
        Err(source) => Err(BootstrapError::ConfigRead {
            path: path.to_path_buf(),
            source,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use crate::test_utils::write_file as write;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = BootstrapConfig::from_lookup(|_| None).unwrap();

        assert_eq!(config.netbox_url_file, PathBuf::from(".netbox_url"));
        assert_eq!(config.eda_api_address_file, PathBuf::from(".eda_api_address"));
        assert_eq!(
            config.token_secret,
            SecretRef {
                namespace: "netbox".to_string(),
                name: "netbox-server-superuser".to_string(),
                key: "api_token".to_string(),
            }
        );
        assert_eq!(config.cluster_backend, ClusterBackend::Kube);
        assert_eq!(config.readiness.max_attempts, 30);
        assert_eq!(config.readiness.interval, Duration::from_secs(10));
    }

    #[test]
    fn test_overrides() {
        let env: HashMap<&str, &str> = [
            ("CLUSTER_BACKEND", "kubectl"),
            ("NETBOX_READY_ATTEMPTS", "5"),
            ("NETBOX_READY_INTERVAL_SECS", "1"),
            ("NETBOX_NAMESPACE", "nb"),
        ]
        .into_iter()
        .collect();
        let config = BootstrapConfig::from_lookup(|k| env.get(k).map(|v| v.to_string())).unwrap();

        assert_eq!(config.cluster_backend, ClusterBackend::Kubectl);
        assert_eq!(config.readiness.max_attempts, 5);
        assert_eq!(config.readiness.interval, Duration::from_secs(1));
        assert_eq!(config.token_secret.namespace, "nb");
    }

    #[test]
    fn test_invalid_values_rejected() {
        let bad_backend = BootstrapConfig::from_lookup(|k| (k == "CLUSTER_BACKEND").then(|| "helm".to_string()));
        assert!(matches!(bad_backend, Err(BootstrapError::InvalidConfig(_))));

        let bad_attempts = BootstrapConfig::from_lookup(|k| (k == "NETBOX_READY_ATTEMPTS").then(|| "many".to_string()));
        assert!(matches!(bad_attempts, Err(BootstrapError::InvalidConfig(_))));

        let zero_attempts = BootstrapConfig::from_lookup(|k| (k == "NETBOX_READY_ATTEMPTS").then(|| "0".to_string()));
        assert!(matches!(zero_attempts, Err(BootstrapError::InvalidConfig(_))));
    }

    #[test]
    fn test_read_config_files_trims() {
        let dir = TempDir::new().unwrap();
        let url = write(&dir, ".netbox_url", "https://nb.example.com/\n");
        let eda = write(&dir, ".eda_api_address", "  eda.example.com\n");

        let pair = read_config_files(&url, &eda).unwrap();
        assert_eq!(pair.netbox_url, "https://nb.example.com/");
        assert_eq!(pair.eda_api_address, "eda.example.com");
    }

    #[test]
    fn test_missing_file_is_configuration_missing() {
        let dir = TempDir::new().unwrap();
        let url = write(&dir, ".netbox_url", "https://nb.example.com/");
        let eda = dir.path().join(".eda_api_address");

        match read_config_files(&url, &eda) {
            Err(BootstrapError::ConfigurationMissing { path }) => assert_eq!(path, eda),
            other => panic!("expected ConfigurationMissing, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_message_mentions_init() {
        let err = BootstrapError::ConfigurationMissing {
            path: PathBuf::from(".netbox_url"),
        };
        assert_eq!(
            err.to_string(),
            "Configuration file not found: .netbox_url. Run init.sh first."
        );
    }

    #[test]
    fn test_empty_netbox_url_rejected() {
        let dir = TempDir::new().unwrap();
        let url = write(&dir, ".netbox_url", "\n");
        let eda = write(&dir, ".eda_api_address", "eda.example.com");

        assert!(matches!(
            read_config_files(&url, &eda),
            Err(BootstrapError::InvalidConfig(_))
        ));
    }
}
