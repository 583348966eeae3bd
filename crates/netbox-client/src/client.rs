//! NetBox API client
//!
//! Implements the NetBox REST API client for the extras and IPAM endpoints.
//! Based on NetBox API structure: /api/extras/{tags,webhooks,event-rules}/ and /api/ipam/prefixes/

use crate::common::query::{collection_path, query_resources};
use crate::common::{default_headers, HttpClient, PaginatedResponse};
use crate::error::NetBoxError;
use crate::models::*;
use crate::netbox_trait::NetBoxClientTrait;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

const TAGS: &str = "extras/tags";
const WEBHOOKS: &str = "extras/webhooks";
const EVENT_RULES: &str = "extras/event-rules";
const PREFIXES: &str = "ipam/prefixes";

/// NetBox API client
#[derive(Debug, Clone)]
pub struct NetBoxClient {
    http: HttpClient,
}

impl NetBoxClient {
    /// Create a new NetBox client
    ///
    /// # Arguments
    /// * `base_url` - NetBox base URL (e.g., "http://netbox:80"); a trailing slash is stripped
    /// * `token` - API token for authentication
    pub fn new(base_url: &str, token: &str) -> Result<Self, NetBoxError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .default_headers(default_headers(token)?)
            .build()?;

        Ok(Self::with_client(client, base_url))
    }

    /// Create a client from a preconfigured `reqwest::Client`
    ///
    /// The client must already carry the authentication headers.
    pub fn with_client(client: Client, base_url: &str) -> Self {
        Self {
            http: HttpClient::new(client, base_url),
        }
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        self.http.base_url()
    }

    /// GET `/api/` and return the status code
    ///
    /// # Returns
    /// * `Ok(u16)` - Any HTTP answer, 200 meaning NetBox is up
    /// * `Err(NetBoxError::Http)` - NetBox is not reachable (not listening yet, DNS, timeout)
    pub async fn check_api(&self) -> Result<u16, NetBoxError> {
        let status = self.http.get_status("/api/").await?;
        debug!("NetBox API root answered {}", status);
        Ok(status.as_u16())
    }

    /// Query tags by filters (e.g. `[("name", "eda-isl-v4")]`)
    pub async fn query_tags(&self, filters: &[(&str, &str)]) -> Result<PaginatedResponse<Tag>, NetBoxError> {
        debug!("Querying tags with filters: {:?}", filters);
        query_resources(&self.http, TAGS, filters).await
    }

    /// Create a tag
    pub async fn create_tag(&self, request: &CreateTagRequest) -> Result<Tag, NetBoxError> {
        debug!("Creating tag {} in NetBox", request.name);
        self.http.post_created(&collection_path(TAGS), request).await
    }

    /// Query webhooks by filters (e.g. `[("name", "eda")]`)
    pub async fn query_webhooks(&self, filters: &[(&str, &str)]) -> Result<PaginatedResponse<Webhook>, NetBoxError> {
        debug!("Querying webhooks with filters: {:?}", filters);
        query_resources(&self.http, WEBHOOKS, filters).await
    }

    /// Create a webhook
    pub async fn create_webhook(&self, request: &CreateWebhookRequest) -> Result<Webhook, NetBoxError> {
        debug!("Creating webhook {} -> {}", request.name, request.payload_url);
        self.http.post_created(&collection_path(WEBHOOKS), request).await
    }

    /// Query event rules by filters
    pub async fn query_event_rules(&self, filters: &[(&str, &str)]) -> Result<PaginatedResponse<EventRule>, NetBoxError> {
        debug!("Querying event rules with filters: {:?}", filters);
        query_resources(&self.http, EVENT_RULES, filters).await
    }

    /// Create an event rule
    pub async fn create_event_rule(&self, request: &CreateEventRuleRequest) -> Result<EventRule, NetBoxError> {
        debug!(
            "Creating event rule {} for {} {}",
            request.name, request.action_object_type, request.action_object_id
        );
        self.http.post_created(&collection_path(EVENT_RULES), request).await
    }

    /// Query prefixes by filters (e.g. `[("prefix", "10.0.0.0/16")]`)
    pub async fn query_prefixes(&self, filters: &[(&str, &str)]) -> Result<PaginatedResponse<Prefix>, NetBoxError> {
        debug!("Querying prefixes with filters: {:?}", filters);
        query_resources(&self.http, PREFIXES, filters).await
    }

    /// Create a prefix
    pub async fn create_prefix(&self, request: &CreatePrefixRequest) -> Result<Prefix, NetBoxError> {
        debug!("Creating prefix {} in NetBox", request.prefix);
        self.http.post_created(&collection_path(PREFIXES), request).await
    }
}

#[async_trait::async_trait]
impl NetBoxClientTrait for NetBoxClient {
    fn base_url(&self) -> &str {
        self.base_url()
    }

    async fn check_api(&self) -> Result<u16, NetBoxError> {
        self.check_api().await
    }

    async fn query_tags(&self, filters: &[(&str, &str)]) -> Result<PaginatedResponse<Tag>, NetBoxError> {
        self.query_tags(filters).await
    }

    async fn create_tag(&self, request: &CreateTagRequest) -> Result<Tag, NetBoxError> {
        self.create_tag(request).await
    }

    async fn query_webhooks(&self, filters: &[(&str, &str)]) -> Result<PaginatedResponse<Webhook>, NetBoxError> {
        self.query_webhooks(filters).await
    }

    async fn create_webhook(&self, request: &CreateWebhookRequest) -> Result<Webhook, NetBoxError> {
        self.create_webhook(request).await
    }

    async fn query_event_rules(&self, filters: &[(&str, &str)]) -> Result<PaginatedResponse<EventRule>, NetBoxError> {
        self.query_event_rules(filters).await
    }

    async fn create_event_rule(&self, request: &CreateEventRuleRequest) -> Result<EventRule, NetBoxError> {
        self.create_event_rule(request).await
    }

    async fn query_prefixes(&self, filters: &[(&str, &str)]) -> Result<PaginatedResponse<Prefix>, NetBoxError> {
        self.query_prefixes(filters).await
    }

    async fn create_prefix(&self, request: &CreatePrefixRequest) -> Result<Prefix, NetBoxError> {
        self.create_prefix(request).await
    }
}
