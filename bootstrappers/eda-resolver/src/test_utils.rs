//! Test doubles for the cluster and the DNS resolver

use crate::resolve::HostResolver;
use cluster_client::{ClusterClientTrait, ClusterError, ResourceRef};
use std::collections::HashMap;
use std::io;
use std::net::IpAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// In-memory EngineConfig fields keyed by dotted path
pub struct FakeCluster {
    fields: HashMap<&'static str, &'static str>,
    pub queries: Mutex<Vec<(String, String, String)>>,
}

impl FakeCluster {
    pub fn new(fields: impl IntoIterator<Item = (&'static str, &'static str)>) -> Self {
        Self {
            fields: fields.into_iter().collect(),
            queries: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl ClusterClientTrait for FakeCluster {
    async fn secret_value(&self, _namespace: &str, name: &str, _key: &str) -> Result<String, ClusterError> {
        Err(ClusterError::InvalidConfig(format!("unexpected secret query for {}", name)))
    }

    async fn resource_field(&self, namespace: &str, resource: &ResourceRef, field_path: &str) -> Result<String, ClusterError> {
        self.queries.lock().unwrap().push((
            namespace.to_string(),
            resource.kubectl_target(),
            field_path.to_string(),
        ));
        self.fields
            .get(field_path)
            .map(|v| (*v).to_string())
            .ok_or_else(|| ClusterError::FieldMissing {
                object: resource.kubectl_target(),
                field: field_path.to_string(),
            })
    }
}

/// Fixed answers; unknown hosts fail like NXDOMAIN
#[derive(Default)]
pub struct FakeResolver {
    answers: HashMap<&'static str, Vec<IpAddr>>,
    lookups: AtomicUsize,
}

impl FakeResolver {
    pub fn with(host: &'static str, addrs: Vec<IpAddr>) -> Self {
        Self {
            answers: HashMap::from([(host, addrs)]),
            lookups: AtomicUsize::new(0),
        }
    }

    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl HostResolver for FakeResolver {
    async fn lookup(&self, host: &str) -> io::Result<Vec<IpAddr>> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        self.answers
            .get(host)
            .cloned()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "failed to lookup address information"))
    }
}

pub fn engine_config() -> ResourceRef {
    ResourceRef {
        api_version: "core.eda.nokia.com/v1".to_string(),
        kind: "EngineConfig".to_string(),
        plural: "engineconfigs".to_string(),
        name: "engine-config".to_string(),
    }
}
