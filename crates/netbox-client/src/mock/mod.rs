//! Mock NetBoxClient for unit testing
//!
//! This module provides a mock implementation of NetBoxClientTrait that can be used
//! in unit tests without requiring a running NetBox instance.
//!
//! The mock is organized into domain-specific modules:
//! - `extras.rs` - Extras operations (tags, webhooks, event rules)
//! - `ipam.rs` - IPAM operations (prefixes)
//! - `helpers.rs` - Helper functions for creating nested types
//!
//! Every call is appended to a call log so tests can assert on the exact
//! sequence of existence checks and creates.

mod extras;
mod helpers;
mod ipam;

use crate::common::PaginatedResponse;
use crate::error::NetBoxError;
use crate::models::*;
use crate::netbox_trait::NetBoxClientTrait;
use std::collections::{BTreeMap, HashSet, VecDeque};
use std::sync::{Arc, Mutex};

/// A single API call recorded by the mock
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockCall {
    /// "GET" or "POST"
    pub method: &'static str,
    /// Collection endpoint, e.g. "extras/tags"
    pub endpoint: &'static str,
    /// Natural key the call was about (filter value for GET, name/prefix for POST)
    pub key: String,
}

impl MockCall {
    pub(crate) fn new(method: &'static str, endpoint: &'static str, key: impl Into<String>) -> Self {
        Self {
            method,
            endpoint,
            key: key.into(),
        }
    }
}

/// Mock NetBoxClient for testing
///
/// This mock stores resources in memory and can be configured to return
/// specific responses for testing different scenarios.
#[derive(Debug, Clone)]
pub struct MockNetBoxClient {
    pub(crate) base_url: String,
    // In-memory storage for resources
    pub(crate) tags: Arc<Mutex<BTreeMap<u64, Tag>>>,
    pub(crate) webhooks: Arc<Mutex<BTreeMap<u64, Webhook>>>,
    pub(crate) event_rules: Arc<Mutex<BTreeMap<u64, EventRule>>>,
    pub(crate) prefixes: Arc<Mutex<BTreeMap<u64, Prefix>>>,
    // Scripted check answers; `None` simulates a refused connection. Empty means 200.
    pub(crate) status_script: Arc<Mutex<VecDeque<Option<u16>>>>,
    // Endpoints whose creates are rejected with 400
    pub(crate) failing_creates: Arc<Mutex<HashSet<&'static str>>>,
    pub(crate) calls: Arc<Mutex<Vec<MockCall>>>,
    // Counter for generating IDs
    pub(crate) next_id: Arc<Mutex<u64>>,
}

impl MockNetBoxClient {
    /// Create a new mock client
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            tags: Arc::new(Mutex::new(BTreeMap::new())),
            webhooks: Arc::new(Mutex::new(BTreeMap::new())),
            event_rules: Arc::new(Mutex::new(BTreeMap::new())),
            prefixes: Arc::new(Mutex::new(BTreeMap::new())),
            status_script: Arc::new(Mutex::new(VecDeque::new())),
            failing_creates: Arc::new(Mutex::new(HashSet::new())),
            calls: Arc::new(Mutex::new(Vec::new())),
            next_id: Arc::new(Mutex::new(1)),
        }
    }

    /// Add a tag to the mock store (for test setup)
    pub fn add_tag(&self, tag: Tag) {
        self.tags.lock().unwrap().insert(tag.id, tag);
    }

    /// Add a webhook to the mock store (for test setup)
    pub fn add_webhook(&self, webhook: Webhook) {
        self.webhooks.lock().unwrap().insert(webhook.id, webhook);
    }

    /// Add an event rule to the mock store (for test setup)
    pub fn add_event_rule(&self, rule: EventRule) {
        self.event_rules.lock().unwrap().insert(rule.id, rule);
    }

    /// Add a prefix to the mock store (for test setup)
    pub fn add_prefix(&self, prefix: Prefix) {
        self.prefixes.lock().unwrap().insert(prefix.id, prefix);
    }

    /// Script the answers of successive `check_api` calls
    ///
    /// `None` entries behave like a connection failure. Once the script is
    /// exhausted the check answers 200.
    pub fn script_status(&self, answers: impl IntoIterator<Item = Option<u16>>) {
        self.status_script.lock().unwrap().extend(answers);
    }

    /// Make every create against `endpoint` (e.g. "extras/webhooks") fail with a 400
    pub fn fail_creates(&self, endpoint: &'static str) {
        self.failing_creates.lock().unwrap().insert(endpoint);
    }

    /// All calls made so far, in order
    pub fn calls(&self) -> Vec<MockCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Number of recorded calls matching method and endpoint
    pub fn count_calls(&self, method: &str, endpoint: &str) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.method == method && c.endpoint == endpoint)
            .count()
    }

    /// Snapshot of stored tags
    pub fn tags(&self) -> Vec<Tag> {
        self.tags.lock().unwrap().values().cloned().collect()
    }

    /// Snapshot of stored webhooks
    pub fn webhooks(&self) -> Vec<Webhook> {
        self.webhooks.lock().unwrap().values().cloned().collect()
    }

    /// Snapshot of stored event rules
    pub fn event_rules(&self) -> Vec<EventRule> {
        self.event_rules.lock().unwrap().values().cloned().collect()
    }

    /// Snapshot of stored prefixes
    pub fn prefixes(&self) -> Vec<Prefix> {
        self.prefixes.lock().unwrap().values().cloned().collect()
    }

    /// Generate next ID
    pub(crate) fn next_id(&self) -> u64 {
        let mut id = self.next_id.lock().unwrap();
        let current = *id;
        *id += 1;
        current
    }

    pub(crate) fn record(&self, call: MockCall) {
        self.calls.lock().unwrap().push(call);
    }

    /// Return the scripted 400 for `endpoint` if it was configured to fail
    pub(crate) fn check_create(&self, endpoint: &'static str) -> Result<(), NetBoxError> {
        if self.failing_creates.lock().unwrap().contains(endpoint) {
            return Err(NetBoxError::UnexpectedStatus {
                operation: format!("POST /api/{}/", endpoint),
                status: 400,
                body: r#"{"detail": "mock rejected create"}"#.to_string(),
            });
        }
        Ok(())
    }
}

/// Extract the value of filter `key` from a filter list
pub(crate) fn filter_value<'a>(filters: &[(&str, &'a str)], key: &str) -> Option<&'a str> {
    filters.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}

/// Wrap matching results as a single NetBox page
pub(crate) fn page<T>(results: Vec<T>) -> PaginatedResponse<T> {
    PaginatedResponse {
        count: results.len() as u64,
        next: None,
        previous: None,
        results,
    }
}

#[async_trait::async_trait]
impl NetBoxClientTrait for MockNetBoxClient {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn check_api(&self) -> Result<u16, NetBoxError> {
        self.record(MockCall::new("GET", "", ""));
        match self.status_script.lock().unwrap().pop_front() {
            Some(Some(status)) => Ok(status),
            Some(None) => Err(NetBoxError::Api("connection refused".to_string())),
            None => Ok(200),
        }
    }

    async fn query_tags(&self, filters: &[(&str, &str)]) -> Result<PaginatedResponse<Tag>, NetBoxError> {
        extras::query_tags(self, filters).await
    }

    async fn create_tag(&self, request: &CreateTagRequest) -> Result<Tag, NetBoxError> {
        extras::create_tag(self, request).await
    }

    async fn query_webhooks(&self, filters: &[(&str, &str)]) -> Result<PaginatedResponse<Webhook>, NetBoxError> {
        extras::query_webhooks(self, filters).await
    }

    async fn create_webhook(&self, request: &CreateWebhookRequest) -> Result<Webhook, NetBoxError> {
        extras::create_webhook(self, request).await
    }

    async fn query_event_rules(&self, filters: &[(&str, &str)]) -> Result<PaginatedResponse<EventRule>, NetBoxError> {
        extras::query_event_rules(self, filters).await
    }

    async fn create_event_rule(&self, request: &CreateEventRuleRequest) -> Result<EventRule, NetBoxError> {
        extras::create_event_rule(self, request).await
    }

    async fn query_prefixes(&self, filters: &[(&str, &str)]) -> Result<PaginatedResponse<Prefix>, NetBoxError> {
        ipam::query_prefixes(self, filters).await
    }

    async fn create_prefix(&self, request: &CreatePrefixRequest) -> Result<Prefix, NetBoxError> {
        ipam::create_prefix(self, request).await
    }
}
