//! NetBox readiness polling.
//!
//! Polls the API root at a fixed interval until it answers 200 or the attempt
//! budget runs out. Connection failures count as "not ready yet".

use netbox_client::NetBoxClientTrait;
use std::time::Duration;
use tracing::{debug, info};

/// How long to wait for NetBox
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadinessPolicy {
    /// Maximum number of checks
    pub max_attempts: u32,
    /// Sleep after every unsuccessful check
    pub interval: Duration,
}

impl Default for ReadinessPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 30,
            interval: Duration::from_secs(10),
        }
    }
}

/// Result of polling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Readiness {
    /// The API answered 200 on attempt `attempts`
    Ready { attempts: u32 },
    /// All `attempts` checks failed
    NotReady { attempts: u32 },
}

/// Wait for NetBox to be ready
pub async fn wait_for_netbox<C: NetBoxClientTrait + ?Sized>(client: &C, policy: &ReadinessPolicy) -> Readiness {
    info!("Waiting for NetBox to be ready...");

    for attempt in 1..=policy.max_attempts {
        match client.check_api().await {
            Ok(200) => {
                info!("NetBox is ready!");
                return Readiness::Ready { attempts: attempt };
            }
            Ok(status) => debug!("NetBox answered {}", status),
            Err(e) => debug!("NetBox not reachable yet: {}", e),
        }

        info!("Waiting... ({}/{})", attempt, policy.max_attempts);
        tokio::time::sleep(policy.interval).await;
    }

    Readiness::NotReady {
        attempts: policy.max_attempts,
    }
}
