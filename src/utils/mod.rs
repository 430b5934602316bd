use crate::domain::config::ResolverConfig;
use crate::domain::error::ResolveError;

/// Reads the machine hostname, failing if it is unavailable or not valid UTF-8
pub fn read_hostname() -> Result<String, ResolveError> {
    let name = hostname::get()
        .map_err(ResolveError::Hostname)?
        .into_string()
        .map_err(|raw| {
            ResolveError::Hostname(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!("hostname is not valid UTF-8: {:?}", raw),
            ))
        })?;

    if name.trim().is_empty() {
        return Err(ResolveError::EmptyHostname);
    }
    Ok(name)
}

pub fn get_hostname() -> String {
    read_hostname().unwrap_or_else(|_| ResolverConfig::UNKNOWN_HOSTNAME.to_string())
}
