use std::time::Duration;

pub struct ResolverConfig;

impl ResolverConfig {
    pub const DEFAULT_PROBE_HOST: &'static str = "google.com";
    pub const DEFAULT_PROBE_PORT: u16 = 80;
    pub const DEFAULT_PROBE_TIMEOUT_SECS: u64 = 2;
    pub const FALLBACK_ADDRESS: &'static str = "127.0.0.1";
    pub const UNKNOWN_HOSTNAME: &'static str = "Unknown";
}

/// Target and connect timeout used by the outbound probe
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeConfig {
    pub host: String,
    pub port: u16,
    pub timeout: Duration,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            host: ResolverConfig::DEFAULT_PROBE_HOST.to_string(),
            port: ResolverConfig::DEFAULT_PROBE_PORT,
            timeout: Duration::from_secs(ResolverConfig::DEFAULT_PROBE_TIMEOUT_SECS),
        }
    }
}

impl ProbeConfig {
    pub fn with_target(mut self, host: impl Into<String>, port: u16) -> Self {
        self.host = host.into();
        self.port = port;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
