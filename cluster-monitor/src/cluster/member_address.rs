use std::cmp::Ordering;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::error::{Error, Result};

/// Address of a cluster member in the form of `protocol://system@host:port`. Local-only members
/// have neither host nor port.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MemberAddress {
    protocol: String,
    system: String,
    host: Option<String>,
    port: Option<u16>,
}

impl MemberAddress {
    pub fn new(protocol: String, system: String, host: Option<String>, port: Option<u16>) -> Self {
        MemberAddress {
            protocol,
            system,
            host,
            port,
        }
    }

    /// Creates a remote address.
    pub fn remote(protocol: &str, system: &str, host: &str, port: u16) -> Self {
        Self::new(
            protocol.into(),
            system.into(),
            Some(host.into()),
            Some(port),
        )
    }

    #[inline]
    pub fn protocol(&self) -> &str {
        &self.protocol
    }

    #[inline]
    pub fn system(&self) -> &str {
        &self.system
    }

    #[inline]
    pub fn host(&self) -> Option<&str> {
        self.host.as_deref()
    }

    #[inline]
    pub fn port(&self) -> Option<u16> {
        self.port
    }
}

impl Display for MemberAddress {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}://{}", self.protocol, self.system)?;

        if let Some(host) = &self.host {
            write!(f, "@{host}")?;
        }

        if let Some(port) = self.port {
            write!(f, ":{port}")?;
        }

        Ok(())
    }
}

impl FromStr for MemberAddress {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || Error::InvalidAddress(s.to_string());

        let (protocol, rest) = s.split_once("://").ok_or_else(invalid)?;
        if protocol.is_empty() {
            return Err(invalid());
        }

        let (system, authority) = match rest.split_once('@') {
            Some((system, authority)) => (system, Some(authority)),
            None => (rest, None),
        };

        if system.is_empty() {
            return Err(invalid());
        }

        let (host, port) = match authority {
            Some(authority) => {
                let (host, port) = authority.rsplit_once(':').ok_or_else(invalid)?;
                let port = port.parse::<u16>().map_err(|_| invalid())?;
                if host.is_empty() {
                    return Err(invalid());
                }

                (Some(host.to_string()), Some(port))
            }
            None => (None, None),
        };

        Ok(MemberAddress::new(
            protocol.to_string(),
            system.to_string(),
            host,
            port,
        ))
    }
}

// host, then port; system and protocol only break ties
impl Ord for MemberAddress {
    fn cmp(&self, other: &Self) -> Ordering {
        self.host
            .cmp(&other.host)
            .then_with(|| self.port.cmp(&other.port))
            .then_with(|| self.system.cmp(&other.system))
            .then_with(|| self.protocol.cmp(&other.protocol))
    }
}

impl PartialOrd for MemberAddress {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
