//! Bit-scanning helpers over unsigned integers.
//!
//! The `find_*_non_zero` functions return 0-based bit positions and must not
//! be called with zero.

use std::fmt::Debug;

pub trait Bits: Copy + Eq + Debug {
    const BITS: u32;

    fn count_leading_zeros(self) -> u32;

    /// Position of the lowest set bit.
    fn find_lsb_set_non_zero(self) -> u32;

    /// Position of the highest set bit.
    fn find_msb_set_non_zero(self) -> u32;

    /// Floor of the base 2 logarithm, or `None` for zero.
    fn log2_floor(self) -> Option<u32>;
}

macro_rules! impl_bits {
    ($($t:ty),*) => {
        $(
            impl Bits for $t {
                const BITS: u32 = <$t>::BITS;

                fn count_leading_zeros(self) -> u32 {
                    self.leading_zeros()
                }

                fn find_lsb_set_non_zero(self) -> u32 {
                    debug_assert_ne!(self, 0, "find_lsb_set_non_zero called with zero");
                    self.trailing_zeros()
                }

                fn find_msb_set_non_zero(self) -> u32 {
                    debug_assert_ne!(self, 0, "find_msb_set_non_zero called with zero");
                    <$t>::BITS - 1 - self.leading_zeros()
                }

                fn log2_floor(self) -> Option<u32> {
                    if self == 0 {
                        None
                    } else {
                        Some(self.find_msb_set_non_zero())
                    }
                }
            }
        )*
    };
}

impl_bits!(u32, u64, u128);
