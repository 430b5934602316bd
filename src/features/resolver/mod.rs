pub mod hostname_resolver;
pub mod outbound_resolver;

use std::net::Ipv4Addr;

use crate::domain::config::ResolverConfig;
use crate::domain::error::ResolveError;

pub use hostname_resolver::{lookup_ipv4, resolve_address_for_hostname, resolve_hostname_address};
pub use outbound_resolver::{
    probe_local_address, resolve_outbound_address, resolve_outbound_address_with,
};

/// Renders a resolved address, substituting the loopback fallback on any failure
fn address_or_fallback(result: Result<Ipv4Addr, ResolveError>, strategy: &str) -> String {
    match result {
        Ok(ip) => ip.to_string(),
        Err(e) => {
            log::debug!(
                "{} lookup failed, falling back to {}: {}",
                strategy,
                ResolverConfig::FALLBACK_ADDRESS,
                e
            );
            ResolverConfig::FALLBACK_ADDRESS.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_on_error() {
        let rendered = address_or_fallback(Err(ResolveError::EmptyHostname), "test");
        assert_eq!(rendered, "127.0.0.1");
    }

    #[test]
    fn test_resolved_address_is_rendered() {
        let rendered = address_or_fallback(Ok(Ipv4Addr::new(192, 168, 1, 42)), "test");
        assert_eq!(rendered, "192.168.1.42");
    }
}
