//! EngineConfig lookup plus DNS, down to the printed endpoint.

use crate::config::ResolverConfig;
use crate::engine_config::{get_eda_ext_domain, get_eda_https_port};
use crate::resolve::{format_endpoint, resolve_domain, HostResolver};
use cluster_client::{ClusterClientTrait, ClusterError};
use tracing::warn;

/// Resolve the EDA endpoint line
///
/// An unreachable cluster counts as two failed queries: both fields become
/// `""` and the endpoint degrades to `None:`.
pub async fn resolve_endpoint<R: HostResolver + ?Sized>(
    config: &ResolverConfig,
    cluster: Result<Box<dyn ClusterClientTrait>, ClusterError>,
    resolver: &R,
) -> String {
    let (domain, port) = match cluster {
        Ok(cluster) => (
            get_eda_ext_domain(cluster.as_ref(), &config.namespace, &config.engine_config).await,
            get_eda_https_port(cluster.as_ref(), &config.namespace, &config.engine_config).await,
        ),
        Err(e) => {
            warn!("Cluster connection failed ({} backend): {}", config.cluster_backend, e);
            (String::new(), String::new())
        }
    };

    let address = resolve_domain(resolver, &domain).await;
    format_endpoint(address, &port)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine_config::{DOMAIN_NAME_FIELD, HTTPS_PORT_FIELD};
    use crate::test_utils::{FakeCluster, FakeResolver};
    use std::net::{IpAddr, Ipv4Addr};

    fn config() -> ResolverConfig {
        ResolverConfig::from_lookup(|_| None).unwrap()
    }

    fn cluster(fields: Vec<(&'static str, &'static str)>) -> Result<Box<dyn ClusterClientTrait>, ClusterError> {
        Ok(Box::new(FakeCluster::new(fields)))
    }

    #[tokio::test]
    async fn test_domain_is_resolved_and_joined_with_port() {
        let resolver = FakeResolver::with("eda.example.com", vec![IpAddr::V4(Ipv4Addr::new(203, 0, 113, 7))]);

        let endpoint = resolve_endpoint(
            &config(),
            cluster(vec![(DOMAIN_NAME_FIELD, "eda.example.com"), (HTTPS_PORT_FIELD, "9443")]),
            &resolver,
        )
        .await;

        assert_eq!(endpoint, "203.0.113.7:9443");
    }

    #[tokio::test]
    async fn test_literal_domain_passes_through() {
        let resolver = FakeResolver::default();

        let endpoint = resolve_endpoint(
            &config(),
            cluster(vec![(DOMAIN_NAME_FIELD, "10.1.2.3"), (HTTPS_PORT_FIELD, "443")]),
            &resolver,
        )
        .await;

        assert_eq!(endpoint, "10.1.2.3:443");
        assert_eq!(resolver.lookups(), 0);
    }

    #[tokio::test]
    async fn test_unresolvable_domain_keeps_port() {
        let resolver = FakeResolver::default();

        let endpoint = resolve_endpoint(
            &config(),
            cluster(vec![(DOMAIN_NAME_FIELD, "eda.invalid"), (HTTPS_PORT_FIELD, "9443")]),
            &resolver,
        )
        .await;

        assert_eq!(endpoint, "None:9443");
    }

    #[tokio::test]
    async fn test_unreachable_cluster_degrades_to_none() {
        let resolver = FakeResolver::default();
        let unreachable = Err(ClusterError::InvalidConfig(
            "Failed to infer configuration: no kubeconfig".to_string(),
        ));

        let endpoint = resolve_endpoint(&config(), unreachable, &resolver).await;

        assert_eq!(endpoint, "None:");
        assert_eq!(resolver.lookups(), 0);
    }
}
