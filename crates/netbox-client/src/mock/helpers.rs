//! Helper functions for creating nested NetBox model types

use crate::models::*;

/// Helper functions for creating nested types in mock implementations
#[derive(Debug)]
pub struct Helpers {
    base_url: String,
}

impl Helpers {
    pub fn new(base_url: String) -> Self {
        Self { base_url }
    }

    /// Helper to create NestedTag
    pub fn create_nested_tag(&self, id: u64, name: &str) -> NestedTag {
        NestedTag {
            id,
            url: format!("{}/api/extras/tags/{}/", self.base_url, id),
            display: name.to_string(),
            name: name.to_string(),
            slug: name.to_lowercase().replace(' ', "-"),
            color: String::new(),
        }
    }
}
