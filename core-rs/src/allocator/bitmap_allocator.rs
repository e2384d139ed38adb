/**
 * bitmap_allocator.rs
 * Allocate / release unique IDs from one contiguous range
 *
 * State:
 * - bitmap: one bit per ID in the whole ID space, 1 = unavailable
 * - cursor: word offset (relative to the range's start word) where the next
 *   scan begins
 *
 * Allocation strategy:
 * - Scan at most `word_span` words, round-robin from the cursor
 * - First word that is not all ones: find its lowest zero bit, set it, done
 * - Cursor stays on the word just used
 * - Full sweep without a zero bit: exhausted, return None
 *
 * Cost:
 * - allocate: O(1) amortized, O(word_span) when the range is nearly full
 * - deallocate / is_allocated: O(1)
 * - available_count / allocation_ratio / stats: O(word_span), see stats.rs
 *
 * No internal locking. Callers sharing an allocator across threads wrap it
 * in their own mutex.
 */

use std::collections::HashSet;
use std::fmt;

use tracing::{debug, trace, warn};

use crate::allocator::config::AllocatorConfig;
use crate::allocator::range::IdRange;
use crate::allocator::stats::{self, AllocatorStats};
use crate::bitmap::{apply_range_mask, Bitmap};
use crate::bits::Word;
use crate::errors::Result;

/// Fixed-memory bitmap allocator over an inclusive ID range
///
/// `W` is the bitmap word; `u32` is the reference layout.
pub struct BitmapAllocator<W: Word = u32> {
    range: IdRange,
    /// Reserved IDs that fall inside `range`
    reserved: HashSet<u32>,
    bitmap: Bitmap<W>,
    start_word: usize,
    word_span: usize,
    cursor: usize,
}

impl BitmapAllocator<u32> {
    /// Create an allocator with 32-bit words
    ///
    /// # Errors
    /// Returns `InvalidRange` if the range is out of bounds or `start >= end`.
    ///
    /// # Example
    /// ```
    /// use bitport::{AllocatorConfig, BitmapAllocator};
    ///
    /// let config = AllocatorConfig::new(3000, 4000).with_reserved([3000, 3001]);
    /// let mut allocator = BitmapAllocator::new(&config).unwrap();
    ///
    /// let port = allocator.allocate().unwrap();
    /// assert!(allocator.is_allocated(port));
    /// assert!(allocator.deallocate(port));
    /// ```
    pub fn new(config: &AllocatorConfig) -> Result<Self> {
        Self::from_config(config)
    }
}

impl<W: Word> BitmapAllocator<W> {
    /// Create an allocator with an explicit word type
    ///
    /// `BitmapAllocator::<u64>::from_config(&config)` halves the number of
    /// words scanned per sweep at the same memory footprint.
    pub fn from_config(config: &AllocatorConfig) -> Result<Self> {
        let range = config.range()?;
        let reserved: HashSet<u32> = config
            .reserved_ids
            .iter()
            .copied()
            .filter(|&id| range.contains(id))
            .collect();

        let mut bitmap = Bitmap::new();
        apply_range_mask(&mut bitmap, &range, &reserved);

        debug!(
            start = range.start,
            end = range.end,
            word_bits = W::BITS,
            reserved = reserved.len(),
            "Bitmap allocator created"
        );

        Ok(BitmapAllocator {
            range,
            reserved,
            bitmap,
            start_word: range.start_word::<W>(),
            word_span: range.word_span::<W>(),
            cursor: 0,
        })
    }

    /// Allocate the next free ID
    ///
    /// # Returns
    /// The ID, or `None` if every ID in the range is taken. Exhaustion is a
    /// normal outcome, not an error.
    pub fn allocate(&mut self) -> Option<u32> {
        for step in 0..self.word_span {
            let offset = (self.cursor + step) % self.word_span;
            let index = self.start_word + offset;

            if let Some(bit) = self.bitmap.word(index).find_first_zero() {
                self.bitmap.set_bit(index, bit);
                self.cursor = offset;

                let id = index as u32 * W::BITS + bit;
                trace!(id, "Allocated");
                return Some(id);
            }
        }

        warn!(
            start = self.range.start,
            end = self.range.end,
            "No free IDs left in range"
        );
        None
    }

    /// Release an ID
    ///
    /// # Returns
    /// true if `id` is inside the range (whether or not it was allocated),
    /// false otherwise. Reserved IDs report true but stay unavailable.
    pub fn deallocate(&mut self, id: u32) -> bool {
        if !self.range.contains(id) {
            trace!(id, "Deallocate ignored: out of range");
            return false;
        }

        if !self.reserved.contains(&id) {
            self.bitmap.clear(id);
        }

        trace!(id, "Deallocated");
        true
    }

    /// Whether `id` is unavailable
    ///
    /// Out-of-range IDs are reported as allocated since `allocate` can never
    /// return them.
    pub fn is_allocated(&self, id: u32) -> bool {
        if !self.range.contains(id) {
            return true;
        }
        self.bitmap.test(id)
    }

    /// Return to the post-construction state and rewind the cursor
    pub fn reset(&mut self) {
        apply_range_mask(&mut self.bitmap, &self.range, &self.reserved);
        self.cursor = 0;
        debug!(start = self.range.start, end = self.range.end, "Bitmap allocator reset");
    }

    /// Free IDs in the range. Rescans the bitmap.
    pub fn available_count(&self) -> u32 {
        stats::count_available(&self.bitmap, &self.range)
    }

    /// Allocated IDs in the range, reserved ones included. Rescans the bitmap.
    pub fn allocated_count(&self) -> u32 {
        self.range.len() - self.available_count()
    }

    /// Percentage of the range that is allocated, 0..=100. Rescans the bitmap.
    pub fn allocation_ratio(&self) -> f64 {
        stats::ratio(self.range.len(), self.available_count())
    }

    /// Snapshot of counts, footprint and range
    pub fn stats(&self) -> AllocatorStats {
        let total = self.range.len();
        let available = self.available_count();

        AllocatorStats {
            total,
            available,
            allocated: total - available,
            ratio: stats::ratio(total, available),
            memory_bytes: self.bitmap.memory_bytes(),
            range: self.range,
        }
    }

    pub fn range(&self) -> IdRange {
        self.range
    }

    /// Reserved IDs inside the range, in no particular order
    pub fn reserved(&self) -> impl Iterator<Item = u32> + '_ {
        self.reserved.iter().copied()
    }

    /// Word offset, relative to the range's first word, of the next scan
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn memory_bytes(&self) -> usize {
        self.bitmap.memory_bytes()
    }
}

impl<W: Word> fmt::Debug for BitmapAllocator<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BitmapAllocator")
            .field("range", &self.range)
            .field("word_bits", &W::BITS)
            .field("reserved", &self.reserved.len())
            .field("cursor", &self.cursor)
            .finish()
    }
}
