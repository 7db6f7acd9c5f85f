//! Reverse DNS names: `4.3.2.1.in-addr.arpa` and the 32-nibble
//! `ip6.arpa` form.

use std::fmt::Write;
use std::net::Ipv4Addr;

use addrkit_common::{AddrError, IpAddress};

use crate::hex::colonless_hex_to_ipv6;

const IPV4_SUFFIX: &str = ".in-addr.arpa";
const IPV6_SUFFIX: &str = ".ip6.arpa";
/// 32 nibbles separated by 31 dots.
const IPV6_DOTTED_NIBBLES: usize = 63;

/// The PTR name of `addr`.
///
/// # Panics
///
/// Panics on an uninitialized address.
pub fn to_ptr_string(addr: &IpAddress) -> String {
    match addr {
        IpAddress::V4(v4) => {
            let [a, b, c, d] = v4.octets();
            format!("{d}.{c}.{b}.{a}{IPV4_SUFFIX}")
        }
        IpAddress::V6(v6) => {
            let mut name = String::with_capacity(IPV6_DOTTED_NIBBLES + IPV6_SUFFIX.len());
            for byte in v6.octets().iter().rev() {
                let _ = write!(name, "{:x}.{:x}.", byte & 0xf, byte >> 4);
            }
            name.push_str(&IPV6_SUFFIX[1..]);
            name
        }
        IpAddress::Unspecified => panic!("to_ptr_string() of an empty IPAddress"),
    }
}

/// Parses a PTR name back into an address. A single trailing dot is
/// accepted.
pub fn from_ptr_string(name: &str) -> Result<IpAddress, AddrError> {
    let invalid = || AddrError::InvalidPtr(name.to_string());
    let host = name.strip_suffix('.').unwrap_or(name);
    if let Some(reversed) = host.strip_suffix(IPV4_SUFFIX) {
        let reversed: Ipv4Addr = reversed.parse().map_err(|_| invalid())?;
        let [a, b, c, d] = reversed.octets();
        return Ok(IpAddress::V4(Ipv4Addr::new(d, c, b, a)));
    }
    if let Some(nibbles) = host.strip_suffix(IPV6_SUFFIX) {
        return parse_ipv6_nibbles(nibbles).ok_or_else(invalid);
    }
    Err(invalid())
}

fn parse_ipv6_nibbles(nibbles: &str) -> Option<IpAddress> {
    let bytes = nibbles.as_bytes();
    if bytes.len() != IPV6_DOTTED_NIBBLES {
        return None;
    }
    if bytes.iter().skip(1).step_by(2).any(|&b| b != b'.') {
        return None;
    }
    let hex: String = bytes.iter().step_by(2).rev().map(|&b| b as char).collect();
    colonless_hex_to_ipv6(&hex).ok()
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
