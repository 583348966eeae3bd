//! Hostname to IPv4 resolution.

use std::io;
use std::net::{IpAddr, Ipv4Addr};
use tracing::{debug, warn};

/// True iff `value` is a dotted-quad IPv4 literal
pub fn is_ip_address(value: &str) -> bool {
    value.parse::<Ipv4Addr>().is_ok()
}

/// Forward DNS lookups
#[async_trait::async_trait]
pub trait HostResolver: Send + Sync {
    /// All addresses `host` resolves to, in resolver order
    async fn lookup(&self, host: &str) -> io::Result<Vec<IpAddr>>;
}

/// The operating system resolver
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemResolver;

#[async_trait::async_trait]
impl HostResolver for SystemResolver {
    async fn lookup(&self, host: &str) -> io::Result<Vec<IpAddr>> {
        let addrs = tokio::net::lookup_host((host, 0)).await?;
        Ok(addrs.map(|addr| addr.ip()).collect())
    }
}

/// Resolve `domain` to an IPv4 address
///
/// IPv4 literals come back unchanged without a lookup. Otherwise the first
/// IPv4 answer wins; no answer, lookup failure or an empty domain give `None`.
pub async fn resolve_domain<R: HostResolver + ?Sized>(resolver: &R, domain: &str) -> Option<Ipv4Addr> {
    if is_ip_address(domain) {
        return domain.parse().ok();
    }
    if domain.is_empty() {
        warn!("No domain to resolve");
        return None;
    }

    match resolver.lookup(domain).await {
        Ok(addrs) => {
            let ipv4 = addrs.into_iter().find_map(|addr| match addr {
                IpAddr::V4(v4) => Some(v4),
                IpAddr::V6(_) => None,
            });
            if ipv4.is_none() {
                warn!("{} has no IPv4 address", domain);
            }
            ipv4
        }
        Err(e) => {
            warn!("Failed to resolve {}: {}", domain, e);
            None
        }
    }
}

/// `ip:port`, with the literal `None` standing in for an unresolved address
pub fn format_endpoint(address: Option<Ipv4Addr>, port: &str) -> String {
    let endpoint = match address {
        Some(ip) => format!("{}:{}", ip, port),
        None => format!("None:{}", port),
    };
    debug!("Resolved endpoint {}", endpoint);
    endpoint
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::FakeResolver;
    use std::net::Ipv6Addr;

    #[test]
    fn test_is_ip_address() {
        assert!(is_ip_address("192.168.1.1"));
        assert!(is_ip_address("0.0.0.0"));
        assert!(!is_ip_address("eda.example.com"));
        assert!(!is_ip_address("256.1.1.1"));
        assert!(!is_ip_address("10.0.0"));
        assert!(!is_ip_address("2001:db8::1"));
        assert!(!is_ip_address(""));
    }

    #[tokio::test]
    async fn test_literal_ip_skips_dns() {
        let resolver = FakeResolver::default();

        let ip = resolve_domain(&resolver, "10.1.2.3").await;

        assert_eq!(ip, Some(Ipv4Addr::new(10, 1, 2, 3)));
        assert_eq!(resolver.lookups(), 0);
    }

    #[tokio::test]
    async fn test_first_ipv4_answer_wins() {
        let resolver = FakeResolver::with(
            "eda.example.com",
            vec![
                IpAddr::V6(Ipv6Addr::LOCALHOST),
                IpAddr::V4(Ipv4Addr::new(203, 0, 113, 7)),
                IpAddr::V4(Ipv4Addr::new(203, 0, 113, 8)),
            ],
        );

        let ip = resolve_domain(&resolver, "eda.example.com").await;
        assert_eq!(ip, Some(Ipv4Addr::new(203, 0, 113, 7)));
    }

    #[tokio::test]
    async fn test_unresolvable_gives_none() {
        let resolver = FakeResolver::with("eda6.example.com", vec![IpAddr::V6(Ipv6Addr::LOCALHOST)]);

        assert_eq!(resolve_domain(&resolver, "missing.example.com").await, None);
        assert_eq!(resolve_domain(&resolver, "eda6.example.com").await, None);
    }

    #[tokio::test]
    async fn test_empty_domain_gives_none_without_lookup() {
        let resolver = FakeResolver::default();

        assert_eq!(resolve_domain(&resolver, "").await, None);
        assert_eq!(resolver.lookups(), 0);
    }

    #[tokio::test]
    async fn test_system_resolver_numeric_host() {
        let addrs = SystemResolver.lookup("127.0.0.1").await.unwrap();
        assert_eq!(addrs, vec![IpAddr::V4(Ipv4Addr::LOCALHOST)]);
    }

    #[test]
    fn test_format_endpoint() {
        assert_eq!(format_endpoint(Some(Ipv4Addr::new(10, 1, 2, 3)), "9443"), "10.1.2.3:9443");
        assert_eq!(format_endpoint(None, "9443"), "None:9443");
        assert_eq!(format_endpoint(None, ""), "None:");
    }
}
