//! Fixed-size bitmap over the whole ID space
//!
//! One bit per representable ID, `TOTAL_IDS / W::BITS` words, allocated once.
//! The footprint is the same for a two-ID range as for the full port space.

use std::mem;

use crate::allocator::range::TOTAL_IDS;
use crate::bits::Word;

/// Word array backing an allocator. Bit = 1 means the ID is unavailable.
#[derive(Clone)]
pub struct Bitmap<W: Word> {
    words: Box<[W]>,
}

impl<W: Word> Bitmap<W> {
    /// Number of words needed to cover `TOTAL_IDS`.
    pub const WORD_COUNT: usize = (TOTAL_IDS / W::BITS) as usize;

    /// All-zero bitmap
    pub fn new() -> Self {
        Bitmap {
            words: vec![W::ZERO; Self::WORD_COUNT].into_boxed_slice(),
        }
    }

    /// Split an ID into (word index, bit index)
    #[inline]
    pub fn locate(id: u32) -> (usize, u32) {
        ((id / W::BITS) as usize, id % W::BITS)
    }

    #[inline]
    pub fn word(&self, index: usize) -> W {
        self.words[index]
    }

    #[inline]
    pub fn set_word(&mut self, index: usize, value: W) {
        self.words[index] = value;
    }

    #[inline]
    pub fn or_word(&mut self, index: usize, mask: W) {
        self.words[index] |= mask;
    }

    /// Mark `bit` of word `index` as taken
    #[inline]
    pub fn set_bit(&mut self, index: usize, bit: u32) {
        self.words[index] |= W::bit(bit);
    }

    /// Mark `id` as taken
    #[inline]
    pub fn set(&mut self, id: u32) {
        let (index, bit) = Self::locate(id);
        self.set_bit(index, bit);
    }

    /// Mark `id` as free
    #[inline]
    pub fn clear(&mut self, id: u32) {
        let (index, bit) = Self::locate(id);
        self.words[index] &= !W::bit(bit);
    }

    #[inline]
    pub fn test(&self, id: u32) -> bool {
        let (index, bit) = Self::locate(id);
        self.words[index].has_bit(bit)
    }

    /// Zero every word
    pub fn clear_all(&mut self) {
        self.words.fill(W::ZERO);
    }

    /// Word count
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Bytes held by the word array
    pub fn memory_bytes(&self) -> usize {
        self.words.len() * mem::size_of::<W>()
    }

    pub fn words(&self) -> &[W] {
        &self.words
    }
}

impl<W: Word> Default for Bitmap<W> {
    fn default() -> Self {
        Self::new()
    }
}
