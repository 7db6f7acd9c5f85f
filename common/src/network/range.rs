//! CIDR ranges.
//!
//! An [`IpRange`] is a host address plus a prefix length, always kept in
//! canonical form: the host bits beyond the prefix are zero.

use std::fmt;
use std::net::Ipv4Addr;
use std::str::FromStr;

use crate::error::AddrError;
use crate::network::address::{AddressFamily, IpAddress};
use crate::network::host_order::HostOrder;
use crate::network::netmask::netmask_to_mask_length;

/// A CIDR block such as `192.168.0.0/16`.
///
/// Ordering compares the host first and the length second, so every IPv4
/// range sorts before every IPv6 range and `10.0.0.0/8 < 10.0.0.0/16`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IpRange {
    host: IpAddress,
    length: i32,
}

impl Default for IpRange {
    fn default() -> Self {
        Self {
            host: IpAddress::Unspecified,
            length: -1,
        }
    }
}

impl IpRange {
    /// Builds the range `host/length`, zeroing host bits beyond the prefix.
    /// Lengths longer than the family width are clamped to it.
    ///
    /// # Panics
    ///
    /// Panics if `length` is negative and `host` is initialized.
    pub fn new(host: IpAddress, length: i32) -> Self {
        let (host, length) = truncate_ip_and_length(&host, length);
        Self { host, length }
    }

    /// Builds a range from parts that are already canonical.
    pub fn new_unchecked(host: IpAddress, length: i32) -> Self {
        if !host.is_initialized() {
            debug_assert_eq!(length, -1, "uninitialized IPRange with length {length}");
            return Self { host, length };
        }
        debug_assert!(
            (0..=host.bit_length() as i32).contains(&length),
            "prefix length {length} out of bounds for {host}"
        );
        debug_assert_eq!(
            truncate_ip_address(&host, length),
            host,
            "{host}/{length} has host bits set"
        );
        Self { host, length }
    }

    /// The single-address range of `host`, e.g. `10.0.0.1/32`.
    pub fn from_host(host: IpAddress) -> Self {
        match host.family().bit_length() {
            Some(width) => Self {
                host,
                length: width as i32,
            },
            None => Self::default(),
        }
    }

    /// `0.0.0.0/0`
    pub const fn any4() -> Self {
        Self {
            host: IpAddress::any4(),
            length: 0,
        }
    }

    /// `::/0`
    pub const fn any6() -> Self {
        Self {
            host: IpAddress::any6(),
            length: 0,
        }
    }

    pub fn host(&self) -> IpAddress {
        self.host
    }

    /// Prefix length, or -1 for an uninitialized range.
    pub fn length(&self) -> i32 {
        self.length
    }

    pub fn family(&self) -> AddressFamily {
        self.host.family()
    }

    pub fn is_initialized(&self) -> bool {
        self.host.is_initialized()
    }

    /// True if the range is initialized and canonical.
    pub fn is_valid(&self) -> bool {
        self.is_initialized()
            && self.length >= 0
            && self.length <= self.host.bit_length() as i32
            && truncate_ip_address(&self.host, self.length) == self.host
    }

    /// Lowest address in the range.
    pub fn network_address(&self) -> IpAddress {
        self.host
    }

    /// Highest address in the range, e.g. `10.255.255.255` for `10.0.0.0/8`.
    ///
    /// # Panics
    ///
    /// Panics if the range is uninitialized.
    pub fn broadcast_address(&self) -> IpAddress {
        match self.host {
            IpAddress::V4(_) => broadcast_of::<u32>(&self.host, self.length),
            IpAddress::V6(_) => broadcast_of::<u128>(&self.host, self.length),
            IpAddress::Unspecified => panic!("broadcast_address() of an uninitialized IPRange"),
        }
    }

    /// True if `addr` lies in the range. Addresses of another family never
    /// do.
    pub fn contains(&self, addr: &IpAddress) -> bool {
        if !self.is_initialized() || self.family() != addr.family() {
            return false;
        }
        truncate_ip_address(addr, self.length) == self.host
    }

    /// True if `self` lies within `outer` and is strictly smaller.
    pub fn is_proper_sub_range_of(&self, outer: &IpRange) -> bool {
        self.length > outer.length && outer.contains(&self.host)
    }

    /// Parses `addr[/len]`, truncating host bits instead of rejecting them.
    pub fn parse_truncating(s: &str) -> Result<Self, AddrError> {
        let (host, length) = parse_parts(s)?;
        Ok(Self::new(host, length))
    }
}

fn broadcast_of<T: HostOrder>(host: &IpAddress, length: i32) -> IpAddress {
    (T::from_address(host) | T::host_mask(length as u32)).into_address()
}

/// Zeroes the bits of `addr` beyond `length`, clamping `length` to the
/// family width. An uninitialized address yields `(Unspecified, -1)`.
///
/// # Panics
///
/// Panics if `length` is negative and `addr` is initialized.
pub fn truncate_ip_and_length(addr: &IpAddress, length: i32) -> (IpAddress, i32) {
    match addr {
        IpAddress::V4(_) => truncate_as::<u32>(addr, length),
        IpAddress::V6(_) => truncate_as::<u128>(addr, length),
        IpAddress::Unspecified => (IpAddress::Unspecified, -1),
    }
}

fn truncate_as<T: HostOrder>(addr: &IpAddress, length: i32) -> (IpAddress, i32) {
    let width = T::BITS as i32;
    if length >= width {
        return (*addr, width);
    }
    assert!(length >= 0, "negative prefix length {length} for {addr}");
    let truncated = T::from_address(addr) & T::prefix_mask(length as u32);
    (truncated.into_address(), length)
}

/// The network address of `addr/length`.
///
/// # Panics
///
/// Panics if `addr` is uninitialized or `length` is negative.
pub fn truncate_ip_address(addr: &IpAddress, length: i32) -> IpAddress {
    assert!(addr.is_initialized(), "truncating an uninitialized IPAddress");
    truncate_ip_and_length(addr, length).0
}

fn parse_parts(s: &str) -> Result<(IpAddress, i32), AddrError> {
    let invalid = || AddrError::InvalidRange(s.to_string());
    let Some((addr, mask)) = s.split_once('/') else {
        let host: IpAddress = s.parse().map_err(|_| invalid())?;
        return Ok((host, host.bit_length() as i32));
    };
    let host: IpAddress = addr.parse().map_err(|_| invalid())?;
    let length = parse_prefix_length(mask, host.family()).ok_or_else(invalid)?;
    Ok((host, length))
}

/// Reads a decimal prefix length, or for IPv4 a dotted netmask such as
/// `255.255.0.0`.
fn parse_prefix_length(s: &str, family: AddressFamily) -> Option<i32> {
    if !s.starts_with(|c: char| c.is_ascii_digit()) {
        return None;
    }
    let length = match s.parse::<i32>() {
        Ok(length) => length,
        Err(_) if family == AddressFamily::Inet => {
            let mask: Ipv4Addr = s.parse().ok()?;
            netmask_to_mask_length(&IpAddress::V4(mask)).ok()?
        }
        Err(_) => return None,
    };
    let width = family.bit_length()? as i32;
    (0..=width).contains(&length).then_some(length)
}

/// Strict parse: `192.168.0.0/16` is accepted, `192.168.0.1/16` is not.
impl FromStr for IpRange {
    type Err = AddrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (host, length) = parse_parts(s)?;
        let range = Self::new(host, length);
        if range.host != host {
            return Err(AddrError::NonZeroHostBits);
        }
        Ok(range)
    }
}

impl fmt::Display for IpRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_initialized() {
            return f.write_str("<uninitialized IPRange>");
        }
        write!(f, "{}/{}", self.host, self.length)
    }
}

impl From<IpAddress> for IpRange {
    fn from(host: IpAddress) -> Self {
        Self::from_host(host)
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
