//! Mapping between [`SocketAddress`] and the OS-facing `std::net` types.
//!
//! Reading from a socket goes through [`normalize_socket_address`]; writing
//! to a dual-stack socket goes through [`dualstack_socket_address`] or
//! [`to_family`].

use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4, SocketAddrV6};

use addrkit_common::{AddrError, AddressFamily, IpAddress, SocketAddress};
use tracing::warn;

/// Converts `addr` into a socket address of `family`.
///
/// * [`AddressFamily::Inet`] accepts IPv4 hosts; `[::]` maps to `0.0.0.0`
///   since binding to the wildcard works for either family.
/// * [`AddressFamily::Inet6`] accepts IPv6 hosts and wraps IPv4 hosts into
///   their mapped form for dual-stack sockets.
/// * [`AddressFamily::Unspecified`] picks the host's own family.
pub fn to_family(family: AddressFamily, addr: &SocketAddress) -> Result<SocketAddr, AddrError> {
    let host = addr.host();
    let family = match family {
        AddressFamily::Unspecified => host.family(),
        other => other,
    };
    let converted = match (family, host) {
        (AddressFamily::Inet, IpAddress::V4(v4)) => Some(SocketAddr::V4(SocketAddrV4::new(v4, addr.port()))),
        (AddressFamily::Inet, IpAddress::V6(_)) if host == IpAddress::any6() => {
            Some(SocketAddr::V4(SocketAddrV4::new(Ipv4Addr::UNSPECIFIED, addr.port())))
        }
        (AddressFamily::Inet6, IpAddress::V6(v6)) => Some(SocketAddr::V6(SocketAddrV6::new(v6, addr.port(), 0, 0))),
        (AddressFamily::Inet6, IpAddress::V4(_)) => Some(SocketAddr::V6(SocketAddrV6::new(
            host.dualstack().ipv6_address(),
            addr.port(),
            0,
            0,
        ))),
        _ => None,
    };
    converted.ok_or_else(|| {
        warn!("Can't convert address family {} to {}", host.family(), family);
        AddrError::UnsupportedFamily {
            from: host.family(),
            to: family,
        }
    })
}

/// Like [`to_family`], but `0.0.0.0` becomes `[::]` when binding an IPv6
/// socket so the socket accepts both families.
pub fn to_family_for_bind(family: AddressFamily, addr: &SocketAddress) -> Result<SocketAddr, AddrError> {
    if family == AddressFamily::Inet6 && addr.host() == IpAddress::any4() {
        return to_family(family, &SocketAddress::new(IpAddress::any6(), addr.port()));
    }
    to_family(family, addr)
}

/// The socket address in the host's own family.
///
/// # Panics
///
/// Panics if `addr` is uninitialized.
pub fn generic_address(addr: &SocketAddress) -> SocketAddr {
    match to_family(AddressFamily::Unspecified, addr) {
        Ok(converted) => converted,
        Err(_) => panic!("generic_address() of {addr}"),
    }
}

/// Collapses an IPv4-mapped IPv6 host to plain IPv4, e.g. `[::ffff:1.2.3.4]:80`
/// becomes `1.2.3.4:80`. Everything else is returned unchanged.
pub fn normalize_socket_address(addr: &SocketAddress) -> SocketAddress {
    match addr.host() {
        IpAddress::V6(_) => SocketAddress::new(addr.host().normalized(), addr.port()),
        _ => *addr,
    }
}

/// Reads an OS socket address and normalizes it in one step.
pub fn normalize_std_socket_address(addr: SocketAddr) -> SocketAddress {
    normalize_socket_address(&SocketAddress::from(addr))
}

/// Wraps an IPv4 host into its mapped IPv6 form; IPv6 hosts pass through.
///
/// # Panics
///
/// Panics if `addr` is uninitialized.
pub fn dualstack_socket_address(addr: &SocketAddress) -> SocketAddress {
    SocketAddress::new(addr.host().dualstack(), addr.port())
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
