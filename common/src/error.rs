use thiserror::Error;

use crate::network::address::AddressFamily;

/// Recoverable failures caused by malformed external input.
///
/// Misuse of the API (asking an IPv4 address for its IPv6 bytes, indexing
/// outside a range, ...) is not represented here; those paths panic.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddrError {
    #[error("invalid IP address: {0:?}")]
    InvalidAddress(String),

    #[error("invalid IP range: {0:?}")]
    InvalidRange(String),

    #[error("invalid socket address: {0:?}")]
    InvalidSocketAddress(String),

    #[error("address is not a contiguous netmask")]
    InvalidNetmask,

    #[error("prefix length {0} is out of bounds for the address family")]
    InvalidPrefixLength(i32),

    #[error("packed form has invalid length {0}")]
    InvalidPackedLength(usize),

    #[error("packed range header {0} is outside 0-128 and 200-232")]
    InvalidPackedHeader(u8),

    #[error("address has bits set beyond the prefix length")]
    NonZeroHostBits,

    #[error("addresses belong to different families")]
    FamilyMismatch,

    #[error("address is uninitialized")]
    Uninitialized,

    #[error("first address of the interval is greater than the last")]
    InvalidInterval,

    #[error("{inner} is not a proper sub-range of {outer}")]
    NotProperSubRange { outer: String, inner: String },

    #[error("invalid PTR name: {0:?}")]
    InvalidPtr(String),

    #[error("invalid colonless hex IPv6 address: {0:?}")]
    InvalidHex(String),

    #[error("can't convert address family {from} to {to}")]
    UnsupportedFamily {
        from: AddressFamily,
        to: AddressFamily,
    },
}
