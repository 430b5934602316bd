use serde::Serialize;

use crate::features::resolver::{resolve_hostname_address, resolve_outbound_address};
use crate::utils::get_hostname;

/// Snapshot of every address the resolver can determine for this machine
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct AddressReport {
    pub hostname: String,
    pub outbound_address: String,
    pub hostname_address: String,
}

impl AddressReport {
    pub fn collect() -> Self {
        Self::from_parts(get_hostname(), resolve_outbound_address(), resolve_hostname_address())
    }

    pub fn from_parts(hostname: String, outbound_address: String, hostname_address: String) -> Self {
        Self {
            hostname,
            outbound_address,
            hostname_address,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json;

    #[test]
    fn test_serialize_report() {
        let report = AddressReport::from_parts(
            "abc123".to_string(),
            "192.168.1.42".to_string(),
            "172.17.0.5".to_string(),
        );
        let json = serde_json::to_string(&report).unwrap();
        assert_eq!(
            json,
            r#"{"hostname":"abc123","outbound_address":"192.168.1.42","hostname_address":"172.17.0.5"}"#
        );
    }

    #[test]
    fn test_collect_fills_every_field() {
        let report = AddressReport::collect();
        assert!(!report.hostname.is_empty());
        assert!(report.outbound_address.parse::<std::net::Ipv4Addr>().is_ok());
        assert!(report.hostname_address.parse::<std::net::Ipv4Addr>().is_ok());
    }
}
