use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4, ToSocketAddrs};

use crate::domain::error::ResolveError;
use crate::utils::read_hostname;

use super::address_or_fallback;

/// Resolves the machine's own hostname to an IPv4 address.
///
/// Inside containers the hostname usually maps to the address of the
/// container's interface in its hosts file, which the outbound probe may
/// not see. Returns "127.0.0.1" when the hostname cannot be read or resolved.
pub fn resolve_hostname_address() -> String {
    address_or_fallback(read_hostname().and_then(|name| lookup_ipv4(&name)), "Hostname")
}

/// Resolves `name` to an IPv4 address, or "127.0.0.1" on failure
pub fn resolve_address_for_hostname(name: &str) -> String {
    address_or_fallback(lookup_ipv4(name), "Hostname")
}

pub fn lookup_ipv4(name: &str) -> Result<Ipv4Addr, ResolveError> {
    lookup_socket_v4(name, 0).map(|addr| *addr.ip())
}

/// First IPv4 result the system resolver returns for `host`
pub(crate) fn lookup_socket_v4(host: &str, port: u16) -> Result<SocketAddrV4, ResolveError> {
    let host = host.trim();
    if host.is_empty() {
        return Err(ResolveError::EmptyHostname);
    }

    let mut addrs = (host, port).to_socket_addrs().map_err(|source| ResolveError::Lookup {
        host: host.to_string(),
        source,
    })?;

    addrs
        .find_map(|addr| match addr {
            SocketAddr::V4(v4) => Some(v4),
            SocketAddr::V6(_) => None,
        })
        .ok_or_else(|| ResolveError::NoIpv4Address(host.to_string()))
}
