//! Group configuration: the fixed set of light endpoints.

use std::net::Ipv4Addr;

use serde::{Deserialize, Serialize};

use crate::errors::Error;

type Result<T> = std::result::Result<T, Error>;

/// Configuration for one group of Wiz lights.
///
/// The target set and port are fixed for the process lifetime; there is no
/// runtime add/remove. All communication with Wiz bulbs happens over UDP on
/// port 38899 unless a different port is configured.
///
/// # Example
///
/// ```
/// use wiz_bridge_rs::GroupConfig;
///
/// let config = GroupConfig::from_strs(
///     &["192.168.0.155", "192.168.0.139"],
///     GroupConfig::DEFAULT_PORT,
/// ).unwrap();
/// assert_eq!(config.targets().len(), 2);
/// ```
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct GroupConfig {
    targets: Vec<Ipv4Addr>,
    port: u16,
}

impl GroupConfig {
    /// The port Wiz bulbs listen on.
    pub const DEFAULT_PORT: u16 = 38899;

    /// Create a configuration from already-parsed addresses.
    ///
    /// Fails on an empty target list or a zero port; no I/O happens here.
    pub fn new(targets: Vec<Ipv4Addr>, port: u16) -> Result<Self> {
        if targets.is_empty() {
            return Err(Error::invalid_config("target list is empty"));
        }
        if port == 0 {
            return Err(Error::invalid_config("port must be non-zero"));
        }
        Ok(GroupConfig { targets, port })
    }

    /// Create a configuration from textual IP addresses.
    pub fn from_strs(targets: &[&str], port: u16) -> Result<Self> {
        let targets = targets
            .iter()
            .map(|s| {
                s.parse()
                    .map_err(|_| Error::InvalidConfig(format!("invalid target address: {s}")))
            })
            .collect::<Result<Vec<Ipv4Addr>>>()?;
        Self::new(targets, port)
    }

    pub fn targets(&self) -> &[Ipv4Addr] {
        &self.targets
    }

    pub fn port(&self) -> u16 {
        self.port
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_targets_rejected() {
        assert!(GroupConfig::new(Vec::new(), GroupConfig::DEFAULT_PORT).is_err());
    }

    #[test]
    fn test_zero_port_rejected() {
        assert!(GroupConfig::from_strs(&["192.168.0.155"], 0).is_err());
    }

    #[test]
    fn test_bad_address_rejected() {
        let err = GroupConfig::from_strs(&["192.168.0.999"], GroupConfig::DEFAULT_PORT);
        assert!(matches!(err, Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn test_roundtrips_through_json() {
        let config =
            GroupConfig::from_strs(&["10.0.0.1", "10.0.0.2"], GroupConfig::DEFAULT_PORT).unwrap();
        let json = serde_json::to_string(&config).unwrap();
        let back: GroupConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }
}
