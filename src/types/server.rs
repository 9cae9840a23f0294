use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::Gns3Error;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 3080;

/// Address of a GNS3 controller, written as `host:port`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerAddr {
    pub host: String,
    pub port: u16,
}

impl ServerAddr {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }
}

impl Default for ServerAddr {
    fn default() -> Self {
        Self::new(DEFAULT_HOST, DEFAULT_PORT)
    }
}

impl fmt::Display for ServerAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}

impl FromStr for ServerAddr {
    type Err = Gns3Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || Gns3Error::InvalidServer(s.to_string());
        let trimmed = s.trim();

        let (host, port) = trimmed.rsplit_once(':').ok_or_else(invalid)?;
        if host.is_empty() {
            return Err(invalid());
        }
        // Bare IPv6 without brackets would split inside the address
        if host.contains(':') && !(host.starts_with('[') && host.ends_with(']')) {
            return Err(invalid());
        }

        let port: u16 = port.parse().map_err(|_| invalid())?;
        if port == 0 {
            return Err(invalid());
        }

        Ok(Self::new(host, port))
    }
}

impl Serialize for ServerAddr {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ServerAddr {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_host_port() {
        let addr: ServerAddr = "172.30.4.21:3080".parse().unwrap();
        assert_eq!(addr.host, "172.30.4.21");
        assert_eq!(addr.port, 3080);
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let addr: ServerAddr = "  gns3.lab:8080 \n".parse().unwrap();
        assert_eq!(addr, ServerAddr::new("gns3.lab", 8080));
    }

    #[test]
    fn test_parse_ipv6() {
        let addr: ServerAddr = "[::1]:3080".parse().unwrap();
        assert_eq!(addr.host, "[::1]");
        assert_eq!(addr.to_string(), "[::1]:3080");
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        for input in ["", "localhost", ":3080", "host:", "host:abc", "host:0", "host:70000", "::1:3080"] {
            assert!(input.parse::<ServerAddr>().is_err(), "accepted {input:?}");
        }
    }

    #[test]
    fn test_default_and_display() {
        assert_eq!(ServerAddr::default().to_string(), "127.0.0.1:3080");
    }
}
