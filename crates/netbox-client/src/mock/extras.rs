//! Extras operations for MockNetBoxClient
//!
//! Handles tags, webhooks and event rules

use super::{filter_value, page, MockCall, MockNetBoxClient};
use crate::common::PaginatedResponse;
use crate::error::NetBoxError;
use crate::models::*;

const TAGS: &str = "extras/tags";
const WEBHOOKS: &str = "extras/webhooks";
const EVENT_RULES: &str = "extras/event-rules";

pub async fn query_tags(client: &MockNetBoxClient, filters: &[(&str, &str)]) -> Result<PaginatedResponse<Tag>, NetBoxError> {
        let name = filter_value(filters, "name");
        client.record(MockCall::new("GET", TAGS, name.unwrap_or_default()));
        let tags = client.tags.lock().unwrap();
        Ok(page(
            tags.values()
                .filter(|t| name.is_none_or(|n| t.name == n))
                .cloned()
                .collect(),
        ))
}

pub async fn create_tag(client: &MockNetBoxClient, request: &CreateTagRequest) -> Result<Tag, NetBoxError> {
        client.record(MockCall::new("POST", TAGS, request.name.as_str()));
        client.check_create(TAGS)?;

        let id = client.next_id();
        let tag = Tag {
            id,
            url: format!("{}/api/extras/tags/{}/", client.base_url, id),
            display: request.name.clone(),
            name: request.name.clone(),
            slug: request.slug.clone(),
            color: request.color.clone(),
            description: String::new(),
        };

        client.tags.lock().unwrap().insert(id, tag.clone());
        Ok(tag)
}

pub async fn query_webhooks(client: &MockNetBoxClient, filters: &[(&str, &str)]) -> Result<PaginatedResponse<Webhook>, NetBoxError> {
        let name = filter_value(filters, "name");
        client.record(MockCall::new("GET", WEBHOOKS, name.unwrap_or_default()));
        let webhooks = client.webhooks.lock().unwrap();
        Ok(page(
            webhooks
                .values()
                .filter(|w| name.is_none_or(|n| w.name == n))
                .cloned()
                .collect(),
        ))
}

pub async fn create_webhook(client: &MockNetBoxClient, request: &CreateWebhookRequest) -> Result<Webhook, NetBoxError> {
        client.record(MockCall::new("POST", WEBHOOKS, request.name.as_str()));
        client.check_create(WEBHOOKS)?;

        let id = client.next_id();
        let webhook = Webhook {
            id,
            url: format!("{}/api/extras/webhooks/{}/", client.base_url, id),
            display: request.name.clone(),
            name: request.name.clone(),
            payload_url: request.payload_url.clone(),
            http_method: request.http_method.clone(),
            http_content_type: request.http_content_type.clone(),
            ssl_verification: request.ssl_verification,
        };

        client.webhooks.lock().unwrap().insert(id, webhook.clone());
        Ok(webhook)
}

pub async fn query_event_rules(client: &MockNetBoxClient, filters: &[(&str, &str)]) -> Result<PaginatedResponse<EventRule>, NetBoxError> {
        let name = filter_value(filters, "name");
        client.record(MockCall::new("GET", EVENT_RULES, name.unwrap_or_default()));
        let rules = client.event_rules.lock().unwrap();
        Ok(page(
            rules
                .values()
                .filter(|r| name.is_none_or(|n| r.name == n))
                .cloned()
                .collect(),
        ))
}

pub async fn create_event_rule(client: &MockNetBoxClient, request: &CreateEventRuleRequest) -> Result<EventRule, NetBoxError> {
        client.record(MockCall::new("POST", EVENT_RULES, request.name.as_str()));
        client.check_create(EVENT_RULES)?;

        if !client.webhooks.lock().unwrap().contains_key(&request.action_object_id) {
            return Err(NetBoxError::UnexpectedStatus {
                operation: "POST /api/extras/event-rules/".to_string(),
                status: 400,
                body: format!(r#"{{"action_object_id": ["Webhook {} does not exist"]}}"#, request.action_object_id),
            });
        }

        let id = client.next_id();
        let rule = EventRule {
            id,
            url: format!("{}/api/extras/event-rules/{}/", client.base_url, id),
            display: request.name.clone(),
            name: request.name.clone(),
            object_types: request.object_types.clone(),
            enabled: request.enabled,
            event_types: request.event_types.clone(),
            action_type: Choice::Plain(request.action_type.clone()),
            action_object_type: request.action_object_type.clone(),
            action_object_id: Some(request.action_object_id),
        };

        client.event_rules.lock().unwrap().insert(id, rule.clone());
        Ok(rule)
}
