//! Offset arithmetic over the numeric form of addresses.
//!
//! Both families are indexed with `u128` so that one signature covers IPv4
//! ranges and IPv6 ranges up to `::/0`.

use addrkit_common::network::host_order::HostOrder;
use addrkit_common::{IpAddress, IpRange};

/// Adds `n` to `addr`, or `None` if the result would leave the address
/// space of the family.
///
/// # Panics
///
/// Panics if `addr` is uninitialized.
pub fn plus_n(addr: &IpAddress, n: i64) -> Option<IpAddress> {
    match addr {
        IpAddress::V4(_) => offset_by::<u32>(addr, n),
        IpAddress::V6(_) => offset_by::<u128>(addr, n),
        IpAddress::Unspecified => panic!("plus_n() of an uninitialized IPAddress"),
    }
}

fn offset_by<T: HostOrder>(addr: &IpAddress, n: i64) -> Option<IpAddress> {
    let value = T::from_address(addr).to_u128();
    value
        .checked_add_signed(i128::from(n))
        .filter(|sum| *sum <= T::MAX.to_u128())
        .map(|sum| T::from_u128_truncating(sum).into_address())
}

/// Number of host bits left over by the prefix.
fn host_bits(range: &IpRange) -> u32 {
    assert!(range.is_initialized(), "index arithmetic on an uninitialized IPRange");
    range.host().bit_length() - range.length() as u32
}

/// True if `index` addresses a member of `range`, i.e. is below
/// `2^(width - length)`.
pub fn is_range_index_valid(range: &IpRange, index: u128) -> bool {
    let bits = host_bits(range);
    bits == 128 || index >> bits == 0
}

/// Number of addresses in `range`, or `None` for `::/0` whose count does not
/// fit in a `u128`.
pub fn address_count(range: &IpRange) -> Option<u128> {
    1u128.checked_shl(host_bits(range))
}

/// The address at `index` in `range`; index 0 is the network address.
///
/// # Panics
///
/// Panics if the index is not valid for the range (see
/// [`is_range_index_valid`]).
pub fn nth_address_in_range(range: &IpRange, index: u128) -> IpAddress {
    assert!(
        is_range_index_valid(range, index),
        "index {index} is out of bounds for {range}"
    );
    match range.host() {
        IpAddress::V4(_) => nth_as::<u32>(range, index),
        IpAddress::V6(_) => nth_as::<u128>(range, index),
        IpAddress::Unspecified => unreachable!("validated above"),
    }
}

fn nth_as<T: HostOrder>(range: &IpRange, index: u128) -> IpAddress {
    let base = T::from_address(&range.host()).to_u128();
    T::from_u128_truncating(base + index).into_address()
}

/// Inverse of [`nth_address_in_range`].
///
/// # Panics
///
/// Panics if `addr` is not within `range`.
pub fn index_in_range(range: &IpRange, addr: &IpAddress) -> u128 {
    assert!(range.contains(addr), "{addr} is not within {range}");
    match addr {
        IpAddress::V4(_) => index_as::<u32>(range, addr),
        IpAddress::V6(_) => index_as::<u128>(range, addr),
        IpAddress::Unspecified => unreachable!("contains() rejects uninitialized addresses"),
    }
}

fn index_as<T: HostOrder>(range: &IpRange, addr: &IpAddress) -> u128 {
    T::from_address(addr).to_u128() - T::from_address(&range.host()).to_u128()
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
