//! Resolver error types.

use thiserror::Error;

/// Errors that abort a resolver run
///
/// Cluster failures and DNS failures are not errors; they end up as an empty
/// field or a `None` address in the printed endpoint.
#[derive(Debug, Error)]
pub enum ResolverError {
    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
