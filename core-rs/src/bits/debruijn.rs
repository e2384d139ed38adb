/**
 * debruijn.rs
 * Constant-time "index of lowest set bit" via De Bruijn multiplication
 *
 * For a word with exactly one bit set (1 << k), multiplying by a De Bruijn
 * constant shifts a unique log2(BITS)-bit window into the top of the product.
 * That window indexes a table that maps it straight back to k.
 *
 * 32-bit: constant 0x077CB531, top 5 bits (>> 27), 32-entry table
 * 64-bit: constant 0x03F79D71B4CB0A89, top 6 bits (>> 58), 64-entry table
 *
 * The two are not interchangeable: a 64-bit word needs its own sequence and
 * table, truncating the 64-bit constant does not give a valid 32-bit one.
 */

pub const DEBRUIJN_32: u32 = 0x077C_B531;
pub const DEBRUIJN_32_SHIFT: u32 = 27;

pub const DEBRUIJN_64: u64 = 0x03F7_9D71_B4CB_0A89;
pub const DEBRUIJN_64_SHIFT: u32 = 58;

/// Position lookup for 32-bit words, built at compile time.
pub static TABLE_32: [u8; 32] = build_table_32();

/// Position lookup for 64-bit words, built at compile time.
pub static TABLE_64: [u8; 64] = build_table_64();

const fn build_table_32() -> [u8; 32] {
    let mut table = [0u8; 32];
    let mut k = 0;
    while k < 32 {
        let slot = (1u32 << k).wrapping_mul(DEBRUIJN_32) >> DEBRUIJN_32_SHIFT;
        table[slot as usize] = k as u8;
        k += 1;
    }
    table
}

const fn build_table_64() -> [u8; 64] {
    let mut table = [0u8; 64];
    let mut k = 0;
    while k < 64 {
        let slot = (1u64 << k).wrapping_mul(DEBRUIJN_64) >> DEBRUIJN_64_SHIFT;
        table[slot as usize] = k as u8;
        k += 1;
    }
    table
}

/// Bit position of the only set bit in `single_bit`.
///
/// `single_bit` must be a power of two; any other input yields a meaningless
/// (but in-bounds) position.
#[inline]
pub fn lowest_bit_index_32(single_bit: u32) -> u32 {
    let slot = single_bit.wrapping_mul(DEBRUIJN_32) >> DEBRUIJN_32_SHIFT;
    TABLE_32[slot as usize] as u32
}

/// 64-bit counterpart of [`lowest_bit_index_32`].
#[inline]
pub fn lowest_bit_index_64(single_bit: u64) -> u32 {
    let slot = single_bit.wrapping_mul(DEBRUIJN_64) >> DEBRUIJN_64_SHIFT;
    TABLE_64[slot as usize] as u32
}
