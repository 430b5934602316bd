pub mod resolver_config;

pub use resolver_config::{ProbeConfig, ResolverConfig};
