use std::ops::{BitAnd, BitOr, BitXor, Not, Shl};

use crate::network::address::IpAddress;
use crate::network::bits::Bits;

/// A host-order integer holding one address of a family: `u32` for IPv4 and
/// `u128` for IPv6.
///
/// CIDR arithmetic is written once against this trait and dispatched on the
/// address family.
pub trait HostOrder:
    Bits
    + Ord
    + BitAnd<Output = Self>
    + BitOr<Output = Self>
    + BitXor<Output = Self>
    + Not<Output = Self>
    + Shl<u32, Output = Self>
{
    const ZERO: Self;
    const ONE: Self;
    const MAX: Self;

    /// Reads the address as a host-order integer.
    ///
    /// # Panics
    ///
    /// Panics if the address is not of this width's family.
    fn from_address(addr: &IpAddress) -> Self;

    fn into_address(self) -> IpAddress;

    fn to_u128(self) -> u128;

    /// Keeps the low `BITS` bits of `value`.
    fn from_u128_truncating(value: u128) -> Self;

    fn wrapping_inc(self) -> Self;

    /// Mask with the top `length` bits set, for `length` in `0..=BITS`.
    fn prefix_mask(length: u32) -> Self {
        debug_assert!(length <= Self::BITS);
        // A full-width shift is undefined, so /0 is special-cased.
        if length == 0 {
            Self::ZERO
        } else {
            Self::MAX << (Self::BITS - length)
        }
    }

    /// Mask with the low `BITS - length` bits set.
    fn host_mask(length: u32) -> Self {
        !Self::prefix_mask(length)
    }

    /// True if the value is a run of ones followed by a run of zeros.
    fn is_contiguous_mask(self) -> bool {
        let inverted = !self;
        (inverted & inverted.wrapping_inc()) == Self::ZERO
    }
}

impl HostOrder for u32 {
    const ZERO: Self = 0;
    const ONE: Self = 1;
    const MAX: Self = u32::MAX;

    fn from_address(addr: &IpAddress) -> Self {
        addr.to_host_u32()
    }

    fn into_address(self) -> IpAddress {
        IpAddress::from_host_u32(self)
    }

    fn to_u128(self) -> u128 {
        u128::from(self)
    }

    fn from_u128_truncating(value: u128) -> Self {
        value as u32
    }

    fn wrapping_inc(self) -> Self {
        self.wrapping_add(1)
    }
}

impl HostOrder for u128 {
    const ZERO: Self = 0;
    const ONE: Self = 1;
    const MAX: Self = u128::MAX;

    fn from_address(addr: &IpAddress) -> Self {
        addr.to_u128()
    }

    fn into_address(self) -> IpAddress {
        IpAddress::from_u128(self)
    }

    fn to_u128(self) -> u128 {
        self
    }

    fn from_u128_truncating(value: u128) -> Self {
        value
    }

    fn wrapping_inc(self) -> Self {
        self.wrapping_add(1)
    }
}
