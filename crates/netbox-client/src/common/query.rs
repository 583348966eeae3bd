//! Query utilities for NetBox API
//!
//! Provides helpers for building filtered collection queries.

use crate::common::{HttpClient, PaginatedResponse};
use crate::error::NetBoxError;
use serde::Deserialize;

/// Build the collection path for an endpoint, e.g. `extras/tags` -> `/api/extras/tags/`
pub fn collection_path(endpoint: &str) -> String {
    format!("/api/{}/", endpoint)
}

/// Query the first page of a collection with filters
///
/// The returned page carries NetBox's total `count`, which is what existence
/// checks on a natural key look at.
pub async fn query_resources<T: for<'de> Deserialize<'de>>(
    http: &HttpClient,
    endpoint: &str,
    filters: &[(&str, &str)],
) -> Result<PaginatedResponse<T>, NetBoxError> {
    let mut url = collection_path(endpoint);

    if !filters.is_empty() {
        let query_string = http.build_query_string(filters);
        url = format!("{}?{}", url, query_string);
    }

    http.get(&url).await
}
