//! IPAM operations for MockNetBoxClient
//!
//! Handles prefixes

use super::helpers::Helpers;
use super::{filter_value, page, MockCall, MockNetBoxClient};
use crate::common::PaginatedResponse;
use crate::error::NetBoxError;
use crate::models::*;

const PREFIXES: &str = "ipam/prefixes";

pub async fn query_prefixes(client: &MockNetBoxClient, filters: &[(&str, &str)]) -> Result<PaginatedResponse<Prefix>, NetBoxError> {
        let cidr = filter_value(filters, "prefix");
        client.record(MockCall::new("GET", PREFIXES, cidr.unwrap_or_default()));
        let prefixes = client.prefixes.lock().unwrap();
        Ok(page(
            prefixes
                .values()
                .filter(|p| cidr.is_none_or(|c| p.prefix == c))
                .cloned()
                .collect(),
        ))
}

pub async fn create_prefix(client: &MockNetBoxClient, request: &CreatePrefixRequest) -> Result<Prefix, NetBoxError> {
        client.record(MockCall::new("POST", PREFIXES, request.prefix.as_str()));
        client.check_create(PREFIXES)?;

        let helpers = Helpers::new(client.base_url.clone());
        let tags = {
            let stored = client.tags.lock().unwrap();
            request
                .tags
                .iter()
                .map(|r| {
                    let id = stored
                        .values()
                        .find(|t| t.name == r.name)
                        .map(|t| t.id)
                        .unwrap_or_default();
                    helpers.create_nested_tag(id, &r.name)
                })
                .collect()
        };

        let id = client.next_id();
        let status = serde_json::to_value(request.status)?;
        let prefix = Prefix {
            id,
            url: format!("{}/api/ipam/prefixes/{}/", client.base_url, id),
            display: request.prefix.clone(),
            prefix: request.prefix.clone(),
            status: serde_json::from_value(status)?,
            description: request.description.clone(),
            tags,
        };

        client.prefixes.lock().unwrap().insert(id, prefix.clone());
        Ok(prefix)
}
