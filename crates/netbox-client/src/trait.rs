//! NetBoxClient trait for mocking
//!
//! This trait abstracts the NetBoxClient to enable mocking in unit tests.
//! The concrete NetBoxClient implements this trait, and tests can use mock implementations.

use crate::common::PaginatedResponse;
use crate::error::NetBoxError;
use crate::models::*;

/// Trait for NetBox API client operations
///
/// Query methods return the first page including NetBox's total `count`, so an
/// existence check is `page.count > 0`. Create methods succeed only on `201 Created`.
/// All async methods must be `Send` to work with Tokio's work-stealing runtime.
#[async_trait::async_trait]
pub trait NetBoxClientTrait: Send + Sync {
    /// Get the base URL
    fn base_url(&self) -> &str;

    /// GET the API root and return the HTTP status code
    async fn check_api(&self) -> Result<u16, NetBoxError>;

    // Extras Operations
    async fn query_tags(&self, filters: &[(&str, &str)]) -> Result<PaginatedResponse<Tag>, NetBoxError>;
    async fn create_tag(&self, request: &CreateTagRequest) -> Result<Tag, NetBoxError>;
    async fn query_webhooks(&self, filters: &[(&str, &str)]) -> Result<PaginatedResponse<Webhook>, NetBoxError>;
    async fn create_webhook(&self, request: &CreateWebhookRequest) -> Result<Webhook, NetBoxError>;
    async fn query_event_rules(&self, filters: &[(&str, &str)]) -> Result<PaginatedResponse<EventRule>, NetBoxError>;
    async fn create_event_rule(&self, request: &CreateEventRuleRequest) -> Result<EventRule, NetBoxError>;

    // IPAM Operations
    async fn query_prefixes(&self, filters: &[(&str, &str)]) -> Result<PaginatedResponse<Prefix>, NetBoxError>;
    async fn create_prefix(&self, request: &CreatePrefixRequest) -> Result<Prefix, NetBoxError>;
}
