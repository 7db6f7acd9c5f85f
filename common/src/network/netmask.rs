//! Conversions between prefix lengths and dotted netmasks.

use crate::error::AddrError;
use crate::network::address::{AddressFamily, IpAddress};
use crate::network::bits::Bits;
use crate::network::host_order::HostOrder;

/// Builds the netmask address for a prefix length, e.g. 24 in
/// [`AddressFamily::Inet`] gives `255.255.255.0`.
pub fn mask_length_to_address(family: AddressFamily, length: i32) -> Result<IpAddress, AddrError> {
    match family {
        AddressFamily::Inet => mask_of::<u32>(length),
        AddressFamily::Inet6 => mask_of::<u128>(length),
        AddressFamily::Unspecified => Err(AddrError::Uninitialized),
    }
}

fn mask_of<T: HostOrder>(length: i32) -> Result<IpAddress, AddrError> {
    match u32::try_from(length) {
        Ok(bits) if bits <= T::BITS => Ok(T::prefix_mask(bits).into_address()),
        _ => Err(AddrError::InvalidPrefixLength(length)),
    }
}

/// Prefix length of a netmask, e.g. `255.255.255.0` gives 24.
///
/// Fails unless the address is a run of one bits followed by a run of zero
/// bits; `255.0.255.0` has a hole and is rejected.
pub fn netmask_to_mask_length(address: &IpAddress) -> Result<i32, AddrError> {
    match address {
        IpAddress::V4(_) => length_of(u32::from_address(address)),
        IpAddress::V6(_) => length_of(u128::from_address(address)),
        IpAddress::Unspecified => Err(AddrError::Uninitialized),
    }
}

fn length_of<T: HostOrder>(mask: T) -> Result<i32, AddrError> {
    if !mask.is_contiguous_mask() {
        return Err(AddrError::InvalidNetmask);
    }
    Ok((!mask).count_leading_zeros() as i32)
}
