//! Native Kubernetes API backend
//!
//! Uses the ambient kubeconfig or in-cluster service account via `kube::Client::try_default`.

use crate::error::ClusterError;
use crate::field::{extract_scalar, utf8_text};
use crate::cluster_trait::{ClusterClientTrait, ResourceRef};
use k8s_openapi::api::core::v1::Secret;
use kube::api::{Api, DynamicObject};
use kube::discovery::ApiResource;
use kube::Client;
use std::fmt;
use tracing::debug;

/// Cluster client talking to the API server directly
#[derive(Clone)]
pub struct KubeClusterClient {
    client: Client,
}

impl fmt::Debug for KubeClusterClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KubeClusterClient").finish_non_exhaustive()
    }
}

impl KubeClusterClient {
    /// Wrap an existing Kubernetes client
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Create a client from the default kubeconfig / in-cluster environment
    pub async fn try_default() -> Result<Self, ClusterError> {
        let client = Client::try_default().await?;
        Ok(Self::new(client))
    }

    fn api_resource(resource: &ResourceRef) -> ApiResource {
        let (group, version) = resource.group_version();
        ApiResource {
            group: group.to_string(),
            version: version.to_string(),
            api_version: resource.api_version.clone(),
            kind: resource.kind.clone(),
            plural: resource.plural.clone(),
        }
    }
}

#[async_trait::async_trait]
impl ClusterClientTrait for KubeClusterClient {
    async fn secret_value(&self, namespace: &str, name: &str, key: &str) -> Result<String, ClusterError> {
        debug!("Reading secret {}/{} key {}", namespace, name, key);
        let api: Api<Secret> = Api::namespaced(self.client.clone(), namespace);
        let secret = api.get(name).await?;

        // ByteString holds the already base64-decoded bytes
        let value = secret
            .data
            .and_then(|mut data| data.remove(key))
            .ok_or_else(|| ClusterError::FieldMissing {
                object: format!("secret {}/{}", namespace, name),
                field: format!("data.{}", key),
            })?;

        utf8_text(key, value.0)
    }

    async fn resource_field(&self, namespace: &str, resource: &ResourceRef, field_path: &str) -> Result<String, ClusterError> {
        debug!("Reading {} of {}/{}", field_path, namespace, resource.kubectl_target());
        let ar = Self::api_resource(resource);
        let api: Api<DynamicObject> = Api::namespaced_with(self.client.clone(), namespace, &ar);
        let object = api.get(&resource.name).await?;

        // DynamicObject flattens everything but metadata/types into `data`
        extract_scalar(&object.data, &resource.kubectl_target(), field_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn client_for(server: &MockServer) -> KubeClusterClient {
        let _ = rustls::crypto::ring::default_provider().install_default();
        let config = kube::Config::new(server.uri().parse().unwrap());
        KubeClusterClient::new(Client::try_from(config).unwrap())
    }

    fn engine_config() -> ResourceRef {
        ResourceRef {
            api_version: "core.eda.nokia.com/v1".to_string(),
            kind: "EngineConfig".to_string(),
            plural: "engineconfigs".to_string(),
            name: "engine-config".to_string(),
        }
    }

    async fn serve_secret(server: &MockServer, data: serde_json::Value) {
        Mock::given(method("GET"))
            .and(path("/api/v1/namespaces/netbox/secrets/netbox-server-superuser"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "apiVersion": "v1",
                "kind": "Secret",
                "metadata": {"name": "netbox-server-superuser", "namespace": "netbox"},
                "type": "Opaque",
                "data": data
            })))
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn test_secret_value_reads_decoded_data() {
        let server = MockServer::start().await;
        // base64 of "nb-api-token"
        serve_secret(&server, json!({"api_token": "bmItYXBpLXRva2Vu"})).await;
        let client = client_for(&server).await;

        let token = client
            .secret_value("netbox", "netbox-server-superuser", "api_token")
            .await
            .unwrap();
        assert_eq!(token, "nb-api-token");
    }

    #[tokio::test]
    async fn test_secret_without_key_is_field_missing() {
        let server = MockServer::start().await;
        serve_secret(&server, json!({"password": "bmV0Ym94"})).await;
        let client = client_for(&server).await;

        let err = client
            .secret_value("netbox", "netbox-server-superuser", "api_token")
            .await
            .unwrap_err();
        match err {
            ClusterError::FieldMissing { object, field } => {
                assert_eq!(object, "secret netbox/netbox-server-superuser");
                assert_eq!(field, "data.api_token");
            }
            other => panic!("expected FieldMissing, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_missing_secret_is_kube_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/namespaces/netbox/secrets/netbox-server-superuser"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({
                "kind": "Status",
                "apiVersion": "v1",
                "metadata": {},
                "status": "Failure",
                "message": "secrets \"netbox-server-superuser\" not found",
                "reason": "NotFound",
                "code": 404
            })))
            .mount(&server)
            .await;
        let client = client_for(&server).await;

        let err = client
            .secret_value("netbox", "netbox-server-superuser", "api_token")
            .await
            .unwrap_err();
        assert!(matches!(err, ClusterError::Kube(_)));
    }

    #[tokio::test]
    async fn test_resource_field_reads_custom_resource() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/apis/core.eda.nokia.com/v1/namespaces/eda-system/engineconfigs/engine-config"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "apiVersion": "core.eda.nokia.com/v1",
                "kind": "EngineConfig",
                "metadata": {"name": "engine-config", "namespace": "eda-system"},
                "spec": {"cluster": {"external": {"domainName": "eda.example.com", "httpsPort": 9443}}}
            })))
            .mount(&server)
            .await;
        let client = client_for(&server).await;

        let domain = client
            .resource_field("eda-system", &engine_config(), "spec.cluster.external.domainName")
            .await
            .unwrap();
        let port = client
            .resource_field("eda-system", &engine_config(), "spec.cluster.external.httpsPort")
            .await
            .unwrap();
        assert_eq!(domain, "eda.example.com");
        assert_eq!(port, "9443");

        let missing = client
            .resource_field("eda-system", &engine_config(), "spec.cluster.external.httpPort")
            .await
            .unwrap_err();
        assert!(matches!(missing, ClusterError::FieldMissing { .. }));
    }

    #[test]
    fn test_api_resource_from_ref() {
        let ar = KubeClusterClient::api_resource(&engine_config());
        assert_eq!(ar.group, "core.eda.nokia.com");
        assert_eq!(ar.version, "v1");
        assert_eq!(ar.plural, "engineconfigs");
        assert_eq!(ar.kind, "EngineConfig");
    }

    #[tokio::test]
    async fn test_debug_hides_client_internals() {
        let server = MockServer::start().await;
        let client = client_for(&server).await;

        assert_eq!(format!("{client:?}"), "KubeClusterClient { .. }");
    }
}
