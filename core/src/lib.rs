//! Algorithms over the address value types: interval decomposition, range
//! subtraction, offset arithmetic and the socket-address family mapping.

pub mod arithmetic;
pub mod interval;
pub mod sockaddr;
pub mod subtract;

pub use arithmetic::{index_in_range, is_range_index_valid, nth_address_in_range, plus_n};
pub use interval::interval_to_subnets;
pub use subtract::subtract_range;
