use std::io;
use std::net::SocketAddr;
use std::time::Duration;

use thiserror::Error;

/// Reasons a local address could not be determined
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("Failed to read machine hostname: {0}")]
    Hostname(#[source] io::Error),
    #[error("Hostname is empty")]
    EmptyHostname,
    #[error("Failed to resolve {host}: {source}")]
    Lookup {
        host: String,
        #[source]
        source: io::Error,
    },
    #[error("No IPv4 address found for {0}")]
    NoIpv4Address(String),
    #[error("Probe timeout must be non-zero")]
    InvalidTimeout,
    #[error("Connection to {addr} timed out after {timeout:?}")]
    Timeout { addr: SocketAddr, timeout: Duration },
    #[error("Connection to {addr} failed: {source}")]
    Connect {
        addr: SocketAddr,
        #[source]
        source: io::Error,
    },
    #[error("Failed to read local endpoint address: {0}")]
    LocalAddress(#[source] io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeout_message() {
        let err = ResolveError::Timeout {
            addr: "192.0.2.1:80".parse().unwrap(),
            timeout: Duration::from_secs(2),
        };
        assert_eq!(err.to_string(), "Connection to 192.0.2.1:80 timed out after 2s");
    }

    #[test]
    fn test_lookup_keeps_source() {
        let err = ResolveError::Lookup {
            host: "probe.invalid".to_string(),
            source: io::Error::new(io::ErrorKind::NotFound, "no such host"),
        };
        assert!(std::error::Error::source(&err).is_some());
        assert!(err.to_string().starts_with("Failed to resolve probe.invalid"));
    }
}
