//! API token retrieval from the cluster secret.

use crate::config::SecretRef;
use crate::error::BootstrapError;
use cluster_client::ClusterClientTrait;
use tracing::debug;

/// Fetch the NetBox API token
///
/// No retry: a failed lookup is a fatal `CredentialRetrieval` carrying the
/// cluster's diagnostic text. The token is only ever held in memory.
pub async fn get_api_token(cluster: &dyn ClusterClientTrait, secret: &SecretRef) -> Result<String, BootstrapError> {
    debug!(
        "Fetching NetBox API token from secret {}/{} key {}",
        secret.namespace, secret.name, secret.key
    );

    let token = cluster
        .secret_value(&secret.namespace, &secret.name, &secret.key)
        .await
        .map_err(BootstrapError::CredentialRetrieval)?;

    // A trailing newline in the secret would make an invalid Authorization header
    Ok(token.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::FakeCluster;

    fn secret_ref() -> SecretRef {
        SecretRef {
            namespace: "netbox".to_string(),
            name: "netbox-server-superuser".to_string(),
            key: "api_token".to_string(),
        }
    }

    #[tokio::test]
    async fn test_token_is_returned_trimmed() {
        let cluster = FakeCluster::with_token("0123456789abcdef\n");

        let token = get_api_token(&cluster, &secret_ref()).await.unwrap();
        assert_eq!(token, "0123456789abcdef");
    }

    #[tokio::test]
    async fn test_lookup_failure_surfaces_diagnostic() {
        let cluster = FakeCluster::default();

        let err = get_api_token(&cluster, &secret_ref()).await.unwrap_err();
        assert!(matches!(err, BootstrapError::CredentialRetrieval(_)));
        assert!(err.to_string().contains("NotFound"));
    }
}
