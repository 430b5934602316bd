//! Best-effort discovery of the local machine's IPv4 address.
//!
//! Every public resolver returns a dotted-decimal string and never fails:
//! when no real address can be determined the loopback address
//! [`ResolverConfig::FALLBACK_ADDRESS`] is returned instead.

pub mod domain;
pub mod features;
pub mod utils;

pub use domain::config::{ProbeConfig, ResolverConfig};
pub use domain::error::ResolveError;
pub use domain::models::AddressReport;
pub use features::resolver::{
    lookup_ipv4, probe_local_address, resolve_address_for_hostname, resolve_hostname_address,
    resolve_outbound_address, resolve_outbound_address_with,
};
