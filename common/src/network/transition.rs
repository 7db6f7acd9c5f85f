//! IPv4-in-IPv6 transition mechanisms.
//!
//! Each decoder takes any address and returns `None` unless it is an IPv6
//! address of the matching shape. `X.Y.Z.Q` below stands for the embedded
//! IPv4 address.
//!
//! None of these are trustworthy in a security context: the embedded client
//! address is trivially spoofable on the wire.

use std::net::{Ipv4Addr, Ipv6Addr};

use crate::network::address::IpAddress;
use crate::network::range::IpRange;

const SIX_TO_FOUR_PREFIX: u16 = 0x2002;
const TEREDO_PREFIX: u16 = 0x2001;
const ISATAP_MARKER: u16 = 0x5efe;
/// The U/L and group bits that may be set in front of the ISATAP marker.
const ISATAP_FLAG_BITS: u16 = 0x0300;

/// Decoded Teredo address (RFC 4380 section 4).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TeredoInfo {
    pub server: IpAddress,
    pub flags: u16,
    /// Client's external UDP port, already un-obfuscated.
    pub port: u16,
    /// Client's external IPv4 address, already un-obfuscated.
    pub client: IpAddress,
}

fn ipv6_of(addr: &IpAddress) -> Option<Ipv6Addr> {
    debug_assert!(
        addr.is_initialized(),
        "transition decoder called on an empty IPAddress"
    );
    addr.as_ipv6()
}

fn low_ipv4(octets: &[u8; 16]) -> IpAddress {
    IpAddress::V4(Ipv4Addr::new(octets[12], octets[13], octets[14], octets[15]))
}

/// Compatible addresses look like `::X.Y.Z.Q`.
///
/// `::` and `::1` are excluded.
pub fn compat_ipv4_address(addr: &IpAddress) -> Option<IpAddress> {
    let v6 = ipv6_of(addr)?;
    let value = u128::from(v6);
    if value >> 32 != 0 || value <= 1 {
        return None;
    }
    Some(low_ipv4(&v6.octets()))
}

/// Mapped addresses look like `::ffff:X.Y.Z.Q`.
pub fn mapped_ipv4_address(addr: &IpAddress) -> Option<IpAddress> {
    let v6 = ipv6_of(addr)?;
    v6.to_ipv4_mapped().map(IpAddress::V4)
}

/// 6to4 addresses look like `2002:XXYY:ZZQQ::/48`, e.g. `2002:c000:201::`
/// yields `192.0.2.1`.
pub fn six_to_four_ipv4_address(addr: &IpAddress) -> Option<IpAddress> {
    let v6 = ipv6_of(addr)?;
    if v6.segments()[0] != SIX_TO_FOUR_PREFIX {
        return None;
    }
    let o = v6.octets();
    Some(IpAddress::V4(Ipv4Addr::new(o[2], o[3], o[4], o[5])))
}

/// Converts an IPv4 range into its 6to4 equivalent, e.g. `192.0.2.4/31`
/// yields `2002:c000:204::/47`.
pub fn six_to_four_ipv6_range(range: &IpRange) -> Option<IpRange> {
    let v4 = range.host().as_ipv4()?;
    let mut octets = [0u8; 16];
    octets[..2].copy_from_slice(&SIX_TO_FOUR_PREFIX.to_be_bytes());
    octets[2..6].copy_from_slice(&v4.octets());
    Some(IpRange::new_unchecked(
        IpAddress::V6(Ipv6Addr::from(octets)),
        range.length() + 16,
    ))
}

/// ISATAP interface identifiers look like `0[0-3]00:5efe:XXYY:ZZQQ` in the
/// low 64 bits (RFC 5214 section 6.1).
///
/// Teredo addresses whose obfuscated port happens to read `5efe` are not
/// ISATAP.
pub fn isatap_ipv4_address(addr: &IpAddress) -> Option<IpAddress> {
    let v6 = ipv6_of(addr)?;
    if teredo_info(addr).is_some() {
        return None;
    }
    let segments = v6.segments();
    if segments[5] != ISATAP_MARKER || (segments[4] | ISATAP_FLAG_BITS) != ISATAP_FLAG_BITS {
        return None;
    }
    Some(low_ipv4(&v6.octets()))
}

/// Teredo addresses look like
/// `2001:0:SSSS:SSSS:flags:~port:~CCCC:~CCCC`.
pub fn teredo_info(addr: &IpAddress) -> Option<TeredoInfo> {
    let v6 = ipv6_of(addr)?;
    let segments = v6.segments();
    if segments[0] != TEREDO_PREFIX || segments[1] != 0 {
        return None;
    }
    let value = u128::from(v6);
    Some(TeredoInfo {
        server: IpAddress::from_host_u32((value >> 64) as u32),
        flags: segments[4],
        port: !segments[5],
        client: IpAddress::from_host_u32(!(value as u32)),
    })
}

/// The embedded IPv4 client of a compatible, mapped, 6to4 or Teredo address,
/// tried in that order.
///
/// ISATAP is never consulted: its client address is outside the routed
/// prefix and offers no protection against spoofing.
pub fn embedded_ipv4_client_address(addr: &IpAddress) -> Option<IpAddress> {
    compat_ipv4_address(addr)
        .or_else(|| mapped_ipv4_address(addr))
        .or_else(|| six_to_four_ipv4_address(addr))
        .or_else(|| teredo_info(addr).map(|info| info.client))
}
