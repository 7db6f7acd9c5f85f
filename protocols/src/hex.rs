use addrkit_common::{AddrError, IpAddress};

const IPV6_HEX_DIGITS: usize = 32;

/// Parses an IPv6 address written as exactly 32 hex digits with no colons,
/// e.g. `fe80000000000000000573fffea00065`.
pub fn colonless_hex_to_ipv6(s: &str) -> Result<IpAddress, AddrError> {
    if s.len() != IPV6_HEX_DIGITS || !s.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(AddrError::InvalidHex(s.to_string()));
    }
    u128::from_str_radix(s, 16)
        .map(IpAddress::from_u128)
        .map_err(|_| AddrError::InvalidHex(s.to_string()))
}

/// Inverse of [`colonless_hex_to_ipv6`]; lowercase, zero padded.
///
/// # Panics
///
/// Panics if `addr` is not IPv6.
pub fn ipv6_to_colonless_hex(addr: &IpAddress) -> String {
    format!("{:032x}", addr.to_u128())
}

/// Lowercase hex dump of a byte string, as printed for packed forms.
pub fn to_hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}
