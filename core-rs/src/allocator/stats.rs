/**
 * stats.rs
 * Aggregate counts derived by rescanning the bitmap
 *
 * Unlike allocate/deallocate/is_allocated this is not constant time:
 * every word of the range is visited, and popcount loops once per set bit.
 * Nothing is cached, so the numbers are always consistent with the bitmap.
 */

use serde::{Deserialize, Serialize};

use crate::allocator::range::IdRange;
use crate::bitmap::{out_of_range_mask, Bitmap};
use crate::bits::Word;

/// Snapshot of an allocator's occupancy
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AllocatorStats {
    /// IDs in the range, endpoints included
    pub total: u32,
    pub available: u32,
    /// Includes reserved IDs
    pub allocated: u32,
    /// Percentage of `total` that is allocated, 0..=100
    pub ratio: f64,
    pub memory_bytes: usize,
    pub range: IdRange,
}

/// Free IDs inside `range`.
///
/// Out-of-range bits of the two boundary words are forced to 1 before
/// counting so that they never count as free.
pub fn count_available<W: Word>(bitmap: &Bitmap<W>, range: &IdRange) -> u32 {
    let mut available = 0;
    for index in range.start_word::<W>()..=range.end_word::<W>() {
        let masked = bitmap.word(index) | out_of_range_mask::<W>(range, index);
        available += W::BITS - masked.popcount();
    }
    available
}

/// `100 * allocated / total`
pub fn ratio(total: u32, available: u32) -> f64 {
    if total == 0 {
        return 0.0;
    }
    100.0 * f64::from(total - available) / f64::from(total)
}
