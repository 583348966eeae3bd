//! Idempotent NetBox configuration.
//!
//! Every resource goes through the same check-then-create protocol: query the
//! collection by natural key, skip when `count > 0`, otherwise POST. A failed
//! create is recorded and the run moves on. The event rule needs the webhook's
//! ID and is skipped when none could be obtained.

use crate::report::{ConfigurationReport, OutcomeStatus, ResourceKind, ResourceOutcome};
use crate::resources::{self, EDA_OBJECT_NAME};
use netbox_client::{EventRule, NetBoxClientTrait, NetBoxError, PaginatedResponse, Prefix, Tag, Webhook};
use std::fmt;
use std::future::Future;
use tracing::{error, info, warn};

/// NetBox resources that carry an ID
pub trait NetBoxResource {
    fn id(&self) -> u64;
}

impl NetBoxResource for Tag {
    fn id(&self) -> u64 { self.id }
}
impl NetBoxResource for Webhook {
    fn id(&self) -> u64 { self.id }
}
impl NetBoxResource for EventRule {
    fn id(&self) -> u64 { self.id }
}
impl NetBoxResource for Prefix {
    fn id(&self) -> u64 { self.id }
}

/// Check for `key` with `query`, and run `create` only if nothing matched
async fn upsert<T, Q, F, Fut>(kind: ResourceKind, key: &str, query: Q, create: F) -> ResourceOutcome
where
    T: NetBoxResource,
    Q: Future<Output = Result<PaginatedResponse<T>, NetBoxError>>,
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<T, NetBoxError>>,
{
    match query.await {
        Ok(page) if page.count > 0 => {
            info!("{} '{}' already exists", kind, key);
            let id = page.results.first().map(NetBoxResource::id);
            return ResourceOutcome::new(kind, key, OutcomeStatus::AlreadyExists { id });
        }
        Ok(_) => {}
        Err(e) => {
            error!("Error checking {} '{}': {}", kind.to_string().to_lowercase(), key, e);
            return ResourceOutcome::new(kind, key, OutcomeStatus::Failed { reason: e.to_string() });
        }
    }

    match create().await {
        Ok(created) => {
            info!("{} '{}' created successfully", kind, key);
            ResourceOutcome::new(kind, key, OutcomeStatus::Created { id: created.id() })
        }
        Err(e) => {
            let reason = e.response_body().map_or_else(|| e.to_string(), str::to_string);
            error!("Error creating {} '{}': {}", kind.to_string().to_lowercase(), key, reason);
            ResourceOutcome::new(kind, key, OutcomeStatus::Failed { reason })
        }
    }
}

/// Applies the EDA integration objects to one NetBox instance
pub struct NetBoxConfigurator<'a, C: NetBoxClientTrait + ?Sized> {
    client: &'a C,
}

impl<C: NetBoxClientTrait + ?Sized> fmt::Debug for NetBoxConfigurator<'_, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NetBoxConfigurator")
            .field("base_url", &self.client.base_url())
            .finish()
    }
}

impl<'a, C: NetBoxClientTrait + ?Sized> NetBoxConfigurator<'a, C> {
    pub fn new(client: &'a C) -> Self {
        Self { client }
    }

    /// Run every step in order: tags, webhook, event rule, prefixes
    pub async fn configure(&self, eda_api_address: &str) -> ConfigurationReport {
        let mut report = ConfigurationReport::default();

        report.extend(self.create_tags().await);

        let webhook = self.create_webhook(eda_api_address).await;
        let webhook_id = webhook.id();
        report.push(webhook);

        match webhook_id {
            Some(id) => report.push(self.create_event_rule(id).await),
            None => {
                warn!("Skipping event rule: no webhook ID available");
                report.push(ResourceOutcome::new(
                    ResourceKind::EventRule,
                    EDA_OBJECT_NAME,
                    OutcomeStatus::Skipped {
                        reason: "webhook 'eda' is not available".to_string(),
                    },
                ));
            }
        }

        report.extend(self.create_prefixes().await);
        report
    }

    /// Create the EDA tags
    pub async fn create_tags(&self) -> Vec<ResourceOutcome> {
        info!("Creating tags...");
        let mut outcomes = Vec::new();
        for tag in resources::tags() {
            let outcome = upsert(
                ResourceKind::Tag,
                &tag.name,
                self.client.query_tags(&[("name", tag.name.as_str())]),
                || self.client.create_tag(&tag),
            )
            .await;
            outcomes.push(outcome);
        }
        outcomes
    }

    /// Create the webhook for EDA; the outcome carries the webhook ID when one exists
    pub async fn create_webhook(&self, eda_api_address: &str) -> ResourceOutcome {
        info!("Creating webhook...");
        let webhook = resources::webhook(eda_api_address);
        upsert(
            ResourceKind::Webhook,
            EDA_OBJECT_NAME,
            self.client.query_webhooks(&[("name", EDA_OBJECT_NAME)]),
            || self.client.create_webhook(&webhook),
        )
        .await
    }

    /// Create the event rule firing webhook `webhook_id`
    pub async fn create_event_rule(&self, webhook_id: u64) -> ResourceOutcome {
        info!("Creating event rule...");
        let rule = resources::event_rule(webhook_id);
        upsert(
            ResourceKind::EventRule,
            EDA_OBJECT_NAME,
            self.client.query_event_rules(&[("name", EDA_OBJECT_NAME)]),
            || self.client.create_event_rule(&rule),
        )
        .await
    }

    /// Create the example allocation pool prefixes
    pub async fn create_prefixes(&self) -> Vec<ResourceOutcome> {
        info!("Creating prefixes...");
        let mut outcomes = Vec::new();
        for prefix in resources::prefixes() {
            let outcome = upsert(
                ResourceKind::Prefix,
                &prefix.prefix,
                self.client.query_prefixes(&[("prefix", prefix.prefix.as_str())]),
                || self.client.create_prefix(&prefix),
            )
            .await;
            outcomes.push(outcome);
        }
        outcomes
    }
}
