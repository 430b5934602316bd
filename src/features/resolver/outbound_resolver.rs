use std::io;
use std::net::{Ipv4Addr, SocketAddr, TcpStream};

use crate::domain::config::ProbeConfig;
use crate::domain::error::ResolveError;

use super::address_or_fallback;
use super::hostname_resolver::lookup_socket_v4;

/// Local address of an outbound connection to the default probe host.
///
/// Blocks for at most the probe timeout while connecting. Returns
/// "127.0.0.1" when offline or when the probe host is unreachable.
pub fn resolve_outbound_address() -> String {
    resolve_outbound_address_with(&ProbeConfig::default())
}

pub fn resolve_outbound_address_with(config: &ProbeConfig) -> String {
    address_or_fallback(probe_local_address(config), "Outbound")
}

/// Connects to the configured target and reports the local endpoint address
/// the OS picked for the connection. No data is exchanged.
pub fn probe_local_address(config: &ProbeConfig) -> Result<Ipv4Addr, ResolveError> {
    if config.timeout.is_zero() {
        return Err(ResolveError::InvalidTimeout);
    }

    // A single address keeps the connect phase within one timeout
    let addr = SocketAddr::V4(lookup_socket_v4(&config.host, config.port)?);

    let stream = TcpStream::connect_timeout(&addr, config.timeout).map_err(|source| {
        match source.kind() {
            io::ErrorKind::TimedOut | io::ErrorKind::WouldBlock => ResolveError::Timeout {
                addr,
                timeout: config.timeout,
            },
            _ => ResolveError::Connect { addr, source },
        }
    })?;

    let local = stream.local_addr().map_err(ResolveError::LocalAddress)?;
    log::debug!("Outbound probe to {} used local endpoint {}", addr, local);

    match local {
        SocketAddr::V4(v4) => Ok(*v4.ip()),
        SocketAddr::V6(v6) => v6.ip().to_ipv4_mapped().ok_or_else(|| {
            ResolveError::LocalAddress(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("local endpoint {} is not IPv4", v6),
            ))
        }),
    }
}
