//! # IP Address Model
//!
//! [`IpAddress`] is a family-tagged host address: uninitialized, IPv4 or
//! IPv6. It does not treat mapped or compatible IPv4 addresses specially;
//! `1.2.3.4`, `::1.2.3.4` and `::ffff:1.2.3.4` are three distinct values.
//!
//! The uninitialized state is analogous to a null pointer. It can be copied,
//! compared, ordered, hashed and logged, but asking it for its raw bytes,
//! numeric form or family width is a programming error and panics.

use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::ops::Deref;
use std::str::FromStr;

use rand::seq::IndexedRandom;

use crate::error::AddrError;
use crate::network::range::IpRange;
use crate::network::transition;

/// Network-order bytes of an initialized address, kept on the stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Octets {
    V4([u8; 4]),
    V6([u8; 16]),
}

impl AsRef<[u8]> for Octets {
    fn as_ref(&self) -> &[u8] {
        match self {
            Octets::V4(bytes) => bytes,
            Octets::V6(bytes) => bytes,
        }
    }
}

impl Deref for Octets {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        self.as_ref()
    }
}

/// Address family of an [`IpAddress`].
///
/// Ordered the way addresses are ordered: uninitialized first, then IPv4,
/// then IPv6.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AddressFamily {
    Unspecified,
    Inet,
    Inet6,
}

impl AddressFamily {
    /// Number of bits in an address of this family.
    pub fn bit_length(self) -> Option<u32> {
        match self {
            AddressFamily::Inet => Some(32),
            AddressFamily::Inet6 => Some(128),
            AddressFamily::Unspecified => None,
        }
    }
}

impl fmt::Display for AddressFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AddressFamily::Unspecified => "unspecified",
            AddressFamily::Inet => "IPv4",
            AddressFamily::Inet6 => "IPv6",
        };
        f.write_str(name)
    }
}

/// An IPv4 or IPv6 host address, or the uninitialized sentinel.
///
/// The derived ordering puts uninitialized values first, then all IPv4
/// addresses, then all IPv6 addresses; within a family addresses compare by
/// their network-order bytes (0.0.0.0, 0.0.0.1, ...). Hashing includes the
/// family, so `Unspecified` never collides with `0.0.0.0` or `::`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum IpAddress {
    #[default]
    Unspecified,
    V4(Ipv4Addr),
    V6(Ipv6Addr),
}

impl IpAddress {
    /// `0.0.0.0`
    pub const fn any4() -> Self {
        IpAddress::V4(Ipv4Addr::UNSPECIFIED)
    }

    /// `127.0.0.1`
    pub const fn loopback4() -> Self {
        IpAddress::V4(Ipv4Addr::LOCALHOST)
    }

    /// `::`
    pub const fn any6() -> Self {
        IpAddress::V6(Ipv6Addr::UNSPECIFIED)
    }

    /// `::1`
    pub const fn loopback6() -> Self {
        IpAddress::V6(Ipv6Addr::LOCALHOST)
    }

    pub fn family(&self) -> AddressFamily {
        match self {
            IpAddress::Unspecified => AddressFamily::Unspecified,
            IpAddress::V4(_) => AddressFamily::Inet,
            IpAddress::V6(_) => AddressFamily::Inet6,
        }
    }

    pub fn is_initialized(&self) -> bool {
        !matches!(self, IpAddress::Unspecified)
    }

    pub fn is_ipv4(&self) -> bool {
        matches!(self, IpAddress::V4(_))
    }

    pub fn is_ipv6(&self) -> bool {
        matches!(self, IpAddress::V6(_))
    }

    /// The IPv4 address.
    ///
    /// # Panics
    ///
    /// Panics if this is not an IPv4 address.
    pub fn ipv4_address(&self) -> Ipv4Addr {
        match self {
            IpAddress::V4(v4) => *v4,
            other => panic!("Trying to call ipv4_address() on the address {other}"),
        }
    }

    /// The IPv6 address.
    ///
    /// # Panics
    ///
    /// Panics if this is not an IPv6 address.
    pub fn ipv6_address(&self) -> Ipv6Addr {
        match self {
            IpAddress::V6(v6) => *v6,
            other => panic!("Trying to call ipv6_address() on the address {other}"),
        }
    }

    pub fn as_ipv4(&self) -> Option<Ipv4Addr> {
        match self {
            IpAddress::V4(v4) => Some(*v4),
            _ => None,
        }
    }

    pub fn as_ipv6(&self) -> Option<Ipv6Addr> {
        match self {
            IpAddress::V6(v6) => Some(*v6),
            _ => None,
        }
    }

    /// Family width in bits: 32 or 128.
    ///
    /// # Panics
    ///
    /// Panics on an uninitialized address.
    pub fn bit_length(&self) -> u32 {
        match self.family().bit_length() {
            Some(bits) => bits,
            None => panic!("bit_length() of an uninitialized IPAddress"),
        }
    }

    /// Converts a host byte order integer into an IPv4 address, e.g.
    /// `0x01020304` becomes `1.2.3.4`.
    pub fn from_host_u32(address: u32) -> Self {
        IpAddress::V4(Ipv4Addr::from(address))
    }

    /// Inverse of [`IpAddress::from_host_u32`].
    ///
    /// # Panics
    ///
    /// Panics if this is not an IPv4 address.
    pub fn to_host_u32(&self) -> u32 {
        u32::from(self.ipv4_address())
    }

    /// Converts a host byte order integer into an IPv6 address, e.g. `1`
    /// becomes `::1`.
    pub fn from_u128(address: u128) -> Self {
        IpAddress::V6(Ipv6Addr::from(address))
    }

    /// Inverse of [`IpAddress::from_u128`].
    ///
    /// # Panics
    ///
    /// Panics if this is not an IPv6 address.
    pub fn to_u128(&self) -> u128 {
        u128::from(self.ipv6_address())
    }

    /// The address bytes in network order: 4 for IPv4, 16 for IPv6.
    ///
    /// # Panics
    ///
    /// Panics on an uninitialized address.
    pub fn octets(&self) -> Octets {
        match self {
            IpAddress::V4(v4) => Octets::V4(v4.octets()),
            IpAddress::V6(v6) => Octets::V6(v6.octets()),
            IpAddress::Unspecified => panic!("octets() of an uninitialized IPAddress"),
        }
    }

    /// Builds an address from 4 or 16 network-order bytes.
    pub fn from_octets(bytes: &[u8]) -> Result<Self, AddrError> {
        if let Ok(v4) = <[u8; 4]>::try_from(bytes) {
            return Ok(IpAddress::V4(Ipv4Addr::from(v4)));
        }
        if let Ok(v6) = <[u8; 16]>::try_from(bytes) {
            return Ok(IpAddress::V6(Ipv6Addr::from(v6)));
        }
        Err(AddrError::InvalidPackedLength(bytes.len()))
    }

    /// True for `0.0.0.0` and `::`.
    pub fn is_any(&self) -> bool {
        debug_assert!(self.is_initialized(), "is_any() on an empty IPAddress");
        match self {
            IpAddress::V4(_) => *self == IpAddress::any4(),
            IpAddress::V6(_) => *self == IpAddress::any6(),
            IpAddress::Unspecified => false,
        }
    }

    /// True for anything in `127.0.0.0/8` and for `::1`.
    pub fn is_loopback(&self) -> bool {
        debug_assert!(self.is_initialized(), "is_loopback() on an empty IPAddress");
        match self {
            IpAddress::V4(_) => IpRange::new(IpAddress::loopback4(), 8).contains(self),
            IpAddress::V6(_) => *self == IpAddress::loopback6(),
            IpAddress::Unspecified => false,
        }
    }

    /// True only for `127.0.0.1` and `::1`; the rest of `127.0.0.0/8` is not
    /// canonical.
    pub fn is_canonical_loopback(&self) -> bool {
        debug_assert!(
            self.is_initialized(),
            "is_canonical_loopback() on an empty IPAddress"
        );
        match self {
            IpAddress::V4(_) => *self == IpAddress::loopback4(),
            IpAddress::V6(_) => *self == IpAddress::loopback6(),
            IpAddress::Unspecified => false,
        }
    }

    /// Text form suitable for URIs (RFC 3986 section 3.2.2): IPv6 is wrapped
    /// in brackets, IPv4 is left alone.
    pub fn to_uri_string(&self) -> String {
        match self {
            IpAddress::V6(v6) => format!("[{v6}]"),
            other => other.to_string(),
        }
    }

    /// Collapses IPv4-mapped IPv6 addresses (`::ffff:a.b.c.d`) into plain
    /// IPv4. Everything else, including compatible addresses, is returned
    /// unchanged.
    pub fn normalized(&self) -> IpAddress {
        match self {
            IpAddress::V6(_) => transition::mapped_ipv4_address(self).unwrap_or(*self),
            _ => *self,
        }
    }

    /// Address for IPv6-aware contexts: IPv4 becomes its IPv4-mapped form
    /// (`0.0.0.0` included), IPv6 is unchanged. Opposite of
    /// [`IpAddress::normalized`].
    ///
    /// # Panics
    ///
    /// Panics on an uninitialized address.
    pub fn dualstack(&self) -> IpAddress {
        match self {
            IpAddress::V4(v4) => IpAddress::V6(v4.to_ipv6_mapped()),
            IpAddress::V6(_) => *self,
            IpAddress::Unspecified => panic!("dualstack() of an uninitialized IPAddress"),
        }
    }
}

/// Picks one of `addresses` at random.
pub fn choose_random_address(addresses: &[IpAddress]) -> Option<IpAddress> {
    addresses.choose(&mut rand::rng()).copied()
}

impl fmt::Display for IpAddress {
    /// The `inet_ntop` style text form. Uninitialized addresses render as a
    /// placeholder that never parses back.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IpAddress::Unspecified => f.write_str("<uninitialized IPAddress>"),
            IpAddress::V4(v4) => fmt::Display::fmt(v4, f),
            IpAddress::V6(v6) => fmt::Display::fmt(v6, f),
        }
    }
}

impl FromStr for IpAddress {
    type Err = AddrError;

    /// Parses dotted-quad IPv4 or RFC 4291 IPv6 text.
    ///
    /// Legacy `inet_aton` forms such as `016.016.016.016`, `0x0a.0x0a` or
    /// `42.42` are rejected, and no DNS lookup is ever made.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(v4) = s.parse::<Ipv4Addr>() {
            return Ok(IpAddress::V4(v4));
        }
        if let Ok(v6) = s.parse::<Ipv6Addr>() {
            return Ok(IpAddress::V6(v6));
        }
        Err(AddrError::InvalidAddress(s.to_string()))
    }
}

impl From<Ipv4Addr> for IpAddress {
    fn from(addr: Ipv4Addr) -> Self {
        IpAddress::V4(addr)
    }
}

impl From<Ipv6Addr> for IpAddress {
    fn from(addr: Ipv6Addr) -> Self {
        IpAddress::V6(addr)
    }
}

impl From<IpAddr> for IpAddress {
    fn from(addr: IpAddr) -> Self {
        match addr {
            IpAddr::V4(v4) => IpAddress::V4(v4),
            IpAddr::V6(v6) => IpAddress::V6(v6),
        }
    }
}

impl TryFrom<IpAddress> for IpAddr {
    type Error = AddrError;

    fn try_from(addr: IpAddress) -> Result<Self, Self::Error> {
        match addr {
            IpAddress::V4(v4) => Ok(IpAddr::V4(v4)),
            IpAddress::V6(v6) => Ok(IpAddr::V6(v6)),
            IpAddress::Unspecified => Err(AddrError::Uninitialized),
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
