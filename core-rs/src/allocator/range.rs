/**
 * range.rs
 * Inclusive ID range and the fixed ID space it lives in
 *
 * The bitmap always covers the whole ID space [0, TOTAL_IDS), whatever the
 * configured range. A range only decides which of those bits can ever be 0.
 *
 * Example:
 * - range [3000, 4000] with 32-bit words
 * - start word = 3000 / 32 = 93, end word = 4000 / 32 = 125
 * - 33 words scanned by allocate, 2015 words permanently full
 */

use serde::{Deserialize, Serialize};

use crate::bits::Word;
use crate::errors::{BitportError, Result};

/// Number of representable IDs (one bit each).
pub const TOTAL_IDS: u32 = 65_536;

/// Lowest ID a range may start at. ID 0 is never handed out.
pub const MIN_ID: u32 = 1;

/// Highest representable ID.
pub const MAX_ID: u32 = TOTAL_IDS - 1;

/// Inclusive ID range `[start, end]`
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct IdRange {
    pub start: u32,
    pub end: u32,
}

impl IdRange {
    /// Build a validated range
    ///
    /// # Errors
    /// Returns `InvalidRange` if:
    /// - `start < MIN_ID`
    /// - `end > MAX_ID`
    /// - `start >= end`
    pub fn new(start: u32, end: u32) -> Result<Self> {
        let range = IdRange { start, end };
        range.validate()?;
        Ok(range)
    }

    /// Check bounds against the representable ID space
    pub fn validate(&self) -> Result<()> {
        if self.start < MIN_ID {
            return Err(BitportError::InvalidRange(format!(
                "start {} is below minimum ID {}",
                self.start, MIN_ID
            )));
        }

        if self.end > MAX_ID {
            return Err(BitportError::InvalidRange(format!(
                "end {} exceeds maximum ID {}",
                self.end, MAX_ID
            )));
        }

        if self.start >= self.end {
            return Err(BitportError::InvalidRange(format!(
                "start {} must be less than end {}",
                self.start, self.end
            )));
        }

        Ok(())
    }

    /// Check if id is within this range
    pub fn contains(&self, id: u32) -> bool {
        id >= self.start && id <= self.end
    }

    /// Number of IDs in the range, endpoints included
    pub fn len(&self) -> u32 {
        self.end - self.start + 1
    }

    /// Never true for a validated range
    pub fn is_empty(&self) -> bool {
        self.end < self.start
    }

    /// Index of the word holding `start`
    pub fn start_word<W: Word>(&self) -> usize {
        (self.start / W::BITS) as usize
    }

    /// Index of the word holding `end`
    pub fn end_word<W: Word>(&self) -> usize {
        (self.end / W::BITS) as usize
    }

    /// Number of words the allocator has to scan for this range
    pub fn word_span<W: Word>(&self) -> usize {
        self.end_word::<W>() - self.start_word::<W>() + 1
    }
}
