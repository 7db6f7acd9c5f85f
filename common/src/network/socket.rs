use std::fmt;
use std::net::{SocketAddr, SocketAddrV4, SocketAddrV6};
use std::str::FromStr;

use crate::error::AddrError;
use crate::network::address::IpAddress;

/// An endpoint: an [`IpAddress`] plus a port.
///
/// The default value is uninitialized and compares equal only to other
/// uninitialized endpoints.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SocketAddress {
    host: IpAddress,
    port: u16,
}

impl SocketAddress {
    pub fn new(host: IpAddress, port: u16) -> Self {
        if !host.is_initialized() {
            return Self::default();
        }
        Self { host, port }
    }

    pub fn host(&self) -> IpAddress {
        self.host
    }

    pub fn port(&self) -> u16 {
        debug_assert!(self.is_initialized(), "port() of an empty SocketAddress");
        self.port
    }

    pub fn is_initialized(&self) -> bool {
        self.host.is_initialized()
    }

    /// Parses `host:port`, or a bare host which then gets `default_port`.
    /// IPv6 hosts may be written with or without brackets when the port is
    /// omitted.
    pub fn parse_with_default_port(s: &str, default_port: u16) -> Result<Self, AddrError> {
        if let Ok(addr) = s.parse() {
            return Ok(addr);
        }
        let bare = s
            .strip_prefix('[')
            .and_then(|rest| rest.strip_suffix(']'))
            .unwrap_or(s);
        let host: IpAddress = bare
            .parse()
            .map_err(|_| AddrError::InvalidSocketAddress(s.to_string()))?;
        Ok(Self::new(host, default_port))
    }
}

/// Parses the `Display` form: `1.2.3.4:80` or `[2001:db8::1]:80`.
impl FromStr for SocketAddress {
    type Err = AddrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || AddrError::InvalidSocketAddress(s.to_string());
        let (host, port) = s.rsplit_once(':').ok_or_else(invalid)?;
        let host: IpAddress = match host.strip_prefix('[') {
            Some(rest) => {
                let v6 = rest.strip_suffix(']').ok_or_else(invalid)?;
                let addr: IpAddress = v6.parse().map_err(|_| invalid())?;
                if !addr.is_ipv6() {
                    return Err(invalid());
                }
                addr
            }
            None => {
                let addr: IpAddress = host.parse().map_err(|_| invalid())?;
                if !addr.is_ipv4() {
                    return Err(invalid());
                }
                addr
            }
        };
        if !port.starts_with(|c: char| c.is_ascii_digit()) {
            return Err(invalid());
        }
        let port: u16 = port.parse().map_err(|_| invalid())?;
        Ok(Self::new(host, port))
    }
}

impl fmt::Display for SocketAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_initialized() {
            return f.write_str("<uninitialized SocketAddress>");
        }
        write!(f, "{}:{}", self.host.to_uri_string(), self.port)
    }
}

impl From<SocketAddrV4> for SocketAddress {
    fn from(addr: SocketAddrV4) -> Self {
        Self::new(IpAddress::V4(*addr.ip()), addr.port())
    }
}

/// The scope id and flow info are dropped.
impl From<SocketAddrV6> for SocketAddress {
    fn from(addr: SocketAddrV6) -> Self {
        Self::new(IpAddress::V6(*addr.ip()), addr.port())
    }
}

impl From<SocketAddr> for SocketAddress {
    fn from(addr: SocketAddr) -> Self {
        match addr {
            SocketAddr::V4(v4) => v4.into(),
            SocketAddr::V6(v6) => v6.into(),
        }
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
