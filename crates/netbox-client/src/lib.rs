//! NetBox REST API Client
//!
//! A Rust client library for the parts of the NetBox REST API needed to wire
//! NetBox up to an event-driven automation platform: tags, webhooks, event
//! rules and IPAM prefixes, plus a readiness check of the API root.
//!
//! # Example
//!
//! ```no_run
//! use netbox_client::{NetBoxClient, CreateTagRequest};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = NetBoxClient::new("http://netbox:80/", "your-api-token")?;
//!
//! // Existence check on the natural key
//! let existing = client.query_tags(&[("name", "eda-isl-v4")]).await?;
//! if existing.count == 0 {
//!     client
//!         .create_tag(&CreateTagRequest {
//!             name: "eda-isl-v4".to_string(),
//!             slug: "eda-isl-v4".to_string(),
//!             color: "00cc66".to_string(),
//!         })
//!         .await?;
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Features
//!
//! - **Extras Operations**: Query and create tags, webhooks, event rules
//! - **IPAM Operations**: Query and create prefixes
//! - **`test-util`**: In-memory `MockNetBoxClient` recording every call

pub mod client;
pub mod common;
pub mod error;
pub mod models;
#[path = "trait.rs"]
pub mod netbox_trait;
#[cfg(any(test, feature = "test-util"))]
pub mod mock;

pub use client::NetBoxClient;
pub use common::{HttpClient, PaginatedResponse};
pub use error::NetBoxError;
pub use models::*;
pub use netbox_trait::NetBoxClientTrait;
#[cfg(any(test, feature = "test-util"))]
pub use mock::{MockCall, MockNetBoxClient};
