//! Compact binary forms.
//!
//! * Address: the raw network-order bytes, 4 or 16 of them.
//! * Range: one header byte followed by the network address with everything
//!   past the prefix, and any trailing zero bytes, stripped. Headers
//!   `0..=128` are IPv6 prefix lengths, `200..=232` are IPv4 prefix lengths
//!   offset by 200.
//! * Socket address: the packed address followed by the port in network
//!   order.

use addrkit_common::{AddrError, IpAddress, IpRange, SocketAddress};
use tracing::warn;

const IPV6_HEADER_MAX: u8 = 128;
const IPV4_HEADER_OFFSET: u8 = 200;
const IPV4_HEADER_MAX: u8 = IPV4_HEADER_OFFSET + 32;

pub trait Packed: Sized {
    /// # Panics
    ///
    /// Panics if the value is uninitialized.
    fn to_packed(&self) -> Vec<u8>;

    fn from_packed(bytes: &[u8]) -> Result<Self, AddrError>;
}

impl Packed for IpAddress {
    fn to_packed(&self) -> Vec<u8> {
        self.octets().to_vec()
    }

    fn from_packed(bytes: &[u8]) -> Result<Self, AddrError> {
        IpAddress::from_octets(bytes)
    }
}

impl Packed for IpRange {
    fn to_packed(&self) -> Vec<u8> {
        assert!(self.is_initialized(), "Uninitialized address in IPRange");
        let host = self.host().octets();
        let mut kept = (self.length() as usize).div_ceil(8);
        while kept > 0 && host[kept - 1] == 0 {
            kept -= 1;
        }

        let header = match self.host() {
            IpAddress::V4(_) => IPV4_HEADER_OFFSET + self.length() as u8,
            _ => self.length() as u8,
        };
        let mut out = Vec::with_capacity(1 + kept);
        out.push(header);
        out.extend_from_slice(&host[..kept]);
        out
    }

    fn from_packed(bytes: &[u8]) -> Result<Self, AddrError> {
        let Some((&header, host_bytes)) = bytes.split_first() else {
            return Err(AddrError::InvalidPackedLength(0));
        };
        let (length, width) = match header {
            0..=IPV6_HEADER_MAX => (header, 16),
            IPV4_HEADER_OFFSET..=IPV4_HEADER_MAX => (header - IPV4_HEADER_OFFSET, 4),
            _ => {
                warn!(
                    "Invalid netmask {header} in packed range. Valid ranges are: 0-{IPV6_HEADER_MAX} and {IPV4_HEADER_OFFSET}-{IPV4_HEADER_MAX}."
                );
                return Err(AddrError::InvalidPackedHeader(header));
            }
        };
        if host_bytes.len() > width {
            return Err(AddrError::InvalidPackedLength(bytes.len()));
        }

        let mut padded = vec![0u8; width];
        padded[..host_bytes.len()].copy_from_slice(host_bytes);
        let host = IpAddress::from_octets(&padded)?;

        let range = IpRange::new(host, i32::from(length));
        if range.host() != host {
            return Err(AddrError::NonZeroHostBits);
        }
        Ok(range)
    }
}

impl Packed for SocketAddress {
    fn to_packed(&self) -> Vec<u8> {
        let mut out = self.host().to_packed();
        out.extend_from_slice(&self.port().to_be_bytes());
        out
    }

    fn from_packed(bytes: &[u8]) -> Result<Self, AddrError> {
        if bytes.len() < 2 {
            return Err(AddrError::InvalidPackedLength(bytes.len()));
        }
        let (host, port) = bytes.split_at(bytes.len() - 2);
        let host = IpAddress::from_octets(host).map_err(|_| AddrError::InvalidPackedLength(bytes.len()))?;
        Ok(SocketAddress::new(host, u16::from_be_bytes([port[0], port[1]])))
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
