//! EngineConfig field queries.

use cluster_client::{ClusterClientTrait, ResourceRef};
use tracing::warn;

/// External domain name the EDA API is published under
pub const DOMAIN_NAME_FIELD: &str = "spec.cluster.external.domainName";

/// External HTTPS port of the EDA API
pub const HTTPS_PORT_FIELD: &str = "spec.cluster.external.httpsPort";

/// Read the external domain name; `""` when the query fails
pub async fn get_eda_ext_domain(cluster: &dyn ClusterClientTrait, namespace: &str, engine_config: &ResourceRef) -> String {
    query_field(cluster, namespace, engine_config, DOMAIN_NAME_FIELD).await
}

/// Read the external HTTPS port; `""` when the query fails
pub async fn get_eda_https_port(cluster: &dyn ClusterClientTrait, namespace: &str, engine_config: &ResourceRef) -> String {
    query_field(cluster, namespace, engine_config, HTTPS_PORT_FIELD).await
}

async fn query_field(cluster: &dyn ClusterClientTrait, namespace: &str, engine_config: &ResourceRef, field_path: &str) -> String {
    match cluster.resource_field(namespace, engine_config, field_path).await {
        Ok(value) => value.trim().to_string(),
        Err(e) => {
            warn!(
                "Failed to read {} from {}/{}: {}",
                field_path,
                namespace,
                engine_config.kubectl_target(),
                e
            );
            String::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{engine_config, FakeCluster};

    #[tokio::test]
    async fn test_reads_both_fields() {
        let cluster = FakeCluster::new([(DOMAIN_NAME_FIELD, "eda.example.com"), (HTTPS_PORT_FIELD, "9443")]);

        assert_eq!(get_eda_ext_domain(&cluster, "eda-system", &engine_config()).await, "eda.example.com");
        assert_eq!(get_eda_https_port(&cluster, "eda-system", &engine_config()).await, "9443");

        let queries = cluster.queries.lock().unwrap();
        assert_eq!(
            queries[0],
            (
                "eda-system".to_string(),
                "engineconfigs/engine-config".to_string(),
                "spec.cluster.external.domainName".to_string()
            )
        );
        assert_eq!(queries.len(), 2);
    }

    #[tokio::test]
    async fn test_failed_query_yields_empty_string() {
        let cluster = FakeCluster::new([(HTTPS_PORT_FIELD, "9443")]);

        assert_eq!(get_eda_ext_domain(&cluster, "eda-system", &engine_config()).await, "");
        assert_eq!(get_eda_https_port(&cluster, "eda-system", &engine_config()).await, "9443");
    }
}
