//! Wire and text encodings of the address types.

pub mod hex;
pub mod packed;
pub mod ptr;

pub use packed::Packed;
pub use ptr::{from_ptr_string, to_ptr_string};
