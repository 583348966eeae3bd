//! Fixed NetBox objects for the EDA integration.

use netbox_client::{
    CreateEventRuleRequest, CreatePrefixRequest, CreateTagRequest, CreateWebhookRequest, PrefixStatus, TagRef,
};

/// Name shared by the webhook and the event rule
pub const EDA_OBJECT_NAME: &str = "eda";

/// Shared secret NetBox signs webhook deliveries with
pub const WEBHOOK_SECRET: &str = "eda-netbox-webhook-secret";

/// Path of the NetBox webhook receiver behind the EDA HTTP proxy
pub const WEBHOOK_PATH: &str = "/core/httpproxy/v1/netbox/webhook/clab-eda-nb/netbox";

/// (name, color)
const TAGS: [(&str, &str); 5] = [
    ("eda-systemip-v4", "0066cc"),
    ("eda-systemip-v6", "0066cc"),
    ("eda-isl-v4", "00cc66"),
    ("eda-isl-v6", "00cc66"),
    ("eda-mgmt-v4", "cc6600"),
];

/// (prefix, status, description, tag)
const PREFIXES: [(&str, PrefixStatus, &str, &str); 5] = [
    ("192.168.10.0/24", PrefixStatus::Active, "System IP pool for spine/leaf", "eda-systemip-v4"),
    ("10.0.0.0/16", PrefixStatus::Container, "ISL subnet pool", "eda-isl-v4"),
    ("2001:db8::/32", PrefixStatus::Active, "IPv6 System IP pool", "eda-systemip-v6"),
    ("2005::/64", PrefixStatus::Container, "IPv6 ISL subnet pool", "eda-isl-v6"),
    ("172.16.0.0/16", PrefixStatus::Active, "Management IP pool", "eda-mgmt-v4"),
];

/// Webhook callback URL for an EDA API address (host or host:port)
pub fn webhook_payload_url(eda_api_address: &str) -> String {
    format!("https://{}{}", eda_api_address, WEBHOOK_PATH)
}

/// Tags the EDA allocation pools are labelled with; slug equals name
pub fn tags() -> Vec<CreateTagRequest> {
    TAGS.iter()
        .map(|(name, color)| CreateTagRequest {
            name: (*name).to_string(),
            slug: (*name).to_string(),
            color: (*color).to_string(),
        })
        .collect()
}

/// Example allocation pool prefixes
pub fn prefixes() -> Vec<CreatePrefixRequest> {
    PREFIXES
        .iter()
        .map(|(prefix, status, description, tag)| CreatePrefixRequest {
            prefix: (*prefix).to_string(),
            status: *status,
            description: (*description).to_string(),
            tags: vec![TagRef::new(*tag)],
        })
        .collect()
}

/// Webhook pointing NetBox at EDA, with TLS verification disabled
pub fn webhook(eda_api_address: &str) -> CreateWebhookRequest {
    CreateWebhookRequest {
        name: EDA_OBJECT_NAME.to_string(),
        payload_url: webhook_payload_url(eda_api_address),
        enabled: true,
        http_method: "POST".to_string(),
        http_content_type: "application/json".to_string(),
        secret: WEBHOOK_SECRET.to_string(),
        ssl_verification: false,
    }
}

/// Event rule firing the webhook on IP address and prefix lifecycle events
pub fn event_rule(webhook_id: u64) -> CreateEventRuleRequest {
    CreateEventRuleRequest {
        name: EDA_OBJECT_NAME.to_string(),
        object_types: vec!["ipam.ipaddress".to_string(), "ipam.prefix".to_string()],
        enabled: true,
        event_types: vec![
            "object_created".to_string(),
            "object_updated".to_string(),
            "object_deleted".to_string(),
        ],
        action_type: "webhook".to_string(),
        action_object_type: "extras.webhook".to_string(),
        action_object_id: webhook_id,
    }
}
