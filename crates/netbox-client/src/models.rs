//! NetBox API models
//!
//! These models match the subset of the NetBox REST API serializers used to
//! wire NetBox up to EDA: extras (tags, webhooks, event rules) and IPAM prefixes.
//! Response models are lenient (`#[serde(default)]`) since NetBox returns many
//! fields this client never reads.

use serde::{Deserialize, Serialize};

/// A NetBox choice field.
///
/// NetBox renders choices as `{"value": "active", "label": "Active"}` in responses,
/// while older versions and some endpoints return the bare value.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum Choice {
    Labeled { value: String, label: String },
    Plain(String),
}

impl Choice {
    /// The machine value of the choice (e.g. "active")
    pub fn value(&self) -> &str {
        match self {
            Choice::Labeled { value, .. } => value,
            Choice::Plain(value) => value,
        }
    }
}

impl Default for Choice {
    fn default() -> Self {
        Choice::Plain(String::new())
    }
}

/// Tag model matching NetBox TagSerializer
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Tag {
    pub id: u64,
    pub url: String,
    pub display: String,
    pub name: String,
    pub slug: String,
    pub color: String, // Hex color code without '#', e.g. "0066cc"
    pub description: String,
}

/// Nested tag as embedded in other objects
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NestedTag {
    pub id: u64,
    pub url: String,
    pub display: String,
    pub name: String,
    pub slug: String,
    pub color: String,
}

/// Webhook model matching NetBox WebhookSerializer
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Webhook {
    pub id: u64,
    pub url: String,
    pub display: String,
    pub name: String,
    pub payload_url: String,
    pub http_method: String,
    pub http_content_type: String,
    pub ssl_verification: bool,
}

/// Event rule model matching NetBox EventRuleSerializer
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EventRule {
    pub id: u64,
    pub url: String,
    pub display: String,
    pub name: String,
    pub object_types: Vec<String>,
    pub enabled: bool,
    pub event_types: Vec<String>,
    pub action_type: Choice,
    pub action_object_type: String,
    pub action_object_id: Option<u64>,
}

/// Prefix model matching NetBox PrefixSerializer
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Prefix {
    pub id: u64,
    pub url: String,
    pub display: String,
    pub prefix: String, // e.g., "192.168.1.0/24"
    pub status: Choice,
    pub description: String,
    pub tags: Vec<NestedTag>,
}

/// Prefix status choices
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum PrefixStatus {
    Container,
    Active,
    Reserved,
    Deprecated,
}

/// Reference to a tag by name, as accepted by writable `tags` fields
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagRef {
    pub name: String,
}

impl TagRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Request body for creating a tag
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateTagRequest {
    pub name: String,
    pub slug: String,
    pub color: String,
}

/// Request body for creating a webhook
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateWebhookRequest {
    pub name: String,
    pub payload_url: String,
    pub enabled: bool,
    pub http_method: String,
    pub http_content_type: String,
    pub secret: String,
    pub ssl_verification: bool,
}

/// Request body for creating an event rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateEventRuleRequest {
    pub name: String,
    pub object_types: Vec<String>,
    pub enabled: bool,
    pub event_types: Vec<String>,
    pub action_type: String,
    pub action_object_type: String,
    pub action_object_id: u64,
}

/// Request body for creating a prefix
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatePrefixRequest {
    pub prefix: String,
    pub status: PrefixStatus,
    pub description: String,
    pub tags: Vec<TagRef>,
}
