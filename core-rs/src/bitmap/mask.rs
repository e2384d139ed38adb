/**
 * mask.rs
 * One-time initialization of a bitmap for a configured range
 *
 * After `apply_range_mask`:
 * - words wholly below the start word or above the end word are all ones
 * - the start and end words have their out-of-range bits set
 * - every reserved ID inside the range has its bit set
 * - every other in-range bit is zero
 *
 * The allocate path relies on this: any zero bit it finds is a valid,
 * allocatable ID, so it never checks range bounds itself.
 */

use tracing::debug;

use crate::allocator::range::IdRange;
use crate::bitmap::store::Bitmap;
use crate::bits::Word;

/// Bits of word `index` that fall outside `range`.
///
/// Wholly outside words give all ones, interior words give zero, and the
/// boundary words give only the bits below `start` / above `end`. When the
/// range starts and ends in the same word both parts are combined.
pub fn out_of_range_mask<W: Word>(range: &IdRange, index: usize) -> W {
    let start_word = range.start_word::<W>();
    let end_word = range.end_word::<W>();

    if index < start_word || index > end_word {
        return W::ONES;
    }

    let mut mask = W::ZERO;

    if index == start_word {
        mask |= W::low_mask(range.start % W::BITS);
    }

    if index == end_word {
        mask |= !W::low_mask(range.end % W::BITS + 1);
    }

    mask
}

/// Rebuild `bitmap` from scratch for `range` and `reserved`.
///
/// Reserved IDs outside the range are skipped; their bits are already set.
pub fn apply_range_mask<'a, W, I>(bitmap: &mut Bitmap<W>, range: &IdRange, reserved: I)
where
    W: Word,
    I: IntoIterator<Item = &'a u32>,
{
    let start_word = range.start_word::<W>();
    let end_word = range.end_word::<W>();

    bitmap.clear_all();

    for index in 0..start_word {
        bitmap.set_word(index, W::ONES);
    }
    for index in (end_word + 1)..bitmap.len() {
        bitmap.set_word(index, W::ONES);
    }

    bitmap.or_word(start_word, out_of_range_mask::<W>(range, start_word));
    if end_word != start_word {
        bitmap.or_word(end_word, out_of_range_mask::<W>(range, end_word));
    }

    let mut reserved_in_range = 0usize;
    for &id in reserved {
        if range.contains(id) {
            bitmap.set(id);
            reserved_in_range += 1;
        }
    }

    debug!(
        start = range.start,
        end = range.end,
        start_word,
        end_word,
        reserved = reserved_in_range,
        "Range mask applied"
    );
}
