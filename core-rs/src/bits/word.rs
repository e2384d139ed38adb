//! Fixed-width bitmap words
//!
//! A [`Word`] is one slot-group of the bitmap: bit `b` of word `w` stands for
//! ID `w * BITS + b`. A set bit means "unavailable".

use std::fmt;
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, Not};

use super::debruijn::{lowest_bit_index_32, lowest_bit_index_64};

/// Unsigned word usable as a sub-bitmap.
pub trait Word:
    Copy
    + Eq
    + fmt::Debug
    + Send
    + Sync
    + 'static
    + BitAnd<Output = Self>
    + BitOr<Output = Self>
    + Not<Output = Self>
    + BitAndAssign
    + BitOrAssign
{
    /// Number of bits (and therefore IDs) per word.
    const BITS: u32;
    /// Every slot free.
    const ZERO: Self;
    /// Every slot taken.
    const ONES: Self;

    /// Index of the lowest zero bit, or `None` if the word is all ones.
    ///
    /// Constant time: invert, isolate the lowest set bit with `x & -x`, then
    /// resolve its position through the De Bruijn table. No loop over bits.
    fn find_first_zero(self) -> Option<u32>;

    /// Number of set bits, by repeatedly clearing the lowest one.
    ///
    /// Costs one iteration per set bit, so a full word is the slow case.
    fn popcount(self) -> u32;

    /// A word with only bit `bit` set.
    fn bit(bit: u32) -> Self;

    /// A word with bits `[0, count)` set. `count >= BITS` gives all ones.
    fn low_mask(count: u32) -> Self;

    #[inline]
    fn is_full(self) -> bool {
        self == Self::ONES
    }

    #[inline]
    fn has_bit(self, bit: u32) -> bool {
        self & Self::bit(bit) != Self::ZERO
    }
}

macro_rules! impl_word {
    ($ty:ty, $lowest_bit_index:ident) => {
        impl Word for $ty {
            const BITS: u32 = <$ty>::BITS;
            const ZERO: Self = 0;
            const ONES: Self = <$ty>::MAX;

            #[inline]
            fn find_first_zero(self) -> Option<u32> {
                let inverted = !self;
                if inverted == 0 {
                    return None;
                }
                let lowest = inverted & inverted.wrapping_neg();
                Some($lowest_bit_index(lowest))
            }

            #[inline]
            fn popcount(self) -> u32 {
                let mut n = self;
                let mut count = 0;
                while n != 0 {
                    n &= n.wrapping_sub(1);
                    count += 1;
                }
                count
            }

            #[inline]
            fn bit(bit: u32) -> Self {
                debug_assert!(bit < Self::BITS);
                1 << bit
            }

            #[inline]
            fn low_mask(count: u32) -> Self {
                if count >= Self::BITS {
                    Self::ONES
                } else {
                    (1 << count) - 1
                }
            }
        }
    };
}

impl_word!(u32, lowest_bit_index_32);
impl_word!(u64, lowest_bit_index_64);
