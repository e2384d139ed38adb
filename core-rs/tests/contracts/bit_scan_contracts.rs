// Bit Scan Contract Tests
//
// The allocator trusts find_first_zero and popcount blindly. These tests
// check them against the standard library's intrinsics over many words.

use bitport::bits::debruijn::{DEBRUIJN_32, DEBRUIJN_64, TABLE_32, TABLE_64};
use bitport::Word;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// WHY: table[(1 << k) * C >> shift] == k for every k
/// REASON: This is the defining property of the De Bruijn lookup
/// BREAKS: Wrong bit set on allocate, IDs handed out twice
#[test]
fn debruijn_tables_invert_every_single_bit() {
    for k in 0..32u32 {
        let slot = (1u32 << k).wrapping_mul(DEBRUIJN_32) >> 27;
        assert_eq!(TABLE_32[slot as usize] as u32, k);
    }
    for k in 0..64u32 {
        let slot = (1u64 << k).wrapping_mul(DEBRUIJN_64) >> 58;
        assert_eq!(TABLE_64[slot as usize] as u32, k);
    }
}

/// WHY: The 32-bit constant is not a truncated 64-bit one
/// REASON: Widening the word requires its own sequence and table
/// BREAKS: Silent wrong answers if someone "simplifies" to one constant
#[test]
fn debruijn_constants_are_width_specific() {
    assert_ne!(DEBRUIJN_64 as u32, DEBRUIJN_32);
    assert_ne!((DEBRUIJN_64 >> 32) as u32, DEBRUIJN_32);
}

/// WHY: find_first_zero agrees with trailing_ones on arbitrary words
/// REASON: The allocator sets exactly the bit this returns
/// BREAKS: Allocation of a taken ID
#[test]
fn find_first_zero_matches_intrinsic() {
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..10_000 {
        let word: u32 = rng.gen();
        let expected = if word == u32::MAX { None } else { Some(word.trailing_ones()) };
        assert_eq!(word.find_first_zero(), expected, "word {:#034b}", word);

        let wide: u64 = rng.gen();
        let expected = if wide == u64::MAX { None } else { Some(wide.trailing_ones()) };
        assert_eq!(wide.find_first_zero(), expected, "word {:#066b}", wide);
    }

    for k in 0..32 {
        let dense = u32::MAX << k;
        let expected = if k == 0 { None } else { Some(0) };
        assert_eq!(dense.find_first_zero(), expected);
        assert_eq!(u32::low_mask(k).find_first_zero(), Some(k));
    }
}

/// WHY: popcount agrees with count_ones
/// REASON: available_count sums BITS - popcount over the range
/// BREAKS: Capacity reporting
#[test]
fn popcount_matches_intrinsic() {
    let mut rng = StdRng::seed_from_u64(11);

    for _ in 0..10_000 {
        let word: u32 = rng.gen();
        assert_eq!(word.popcount(), word.count_ones());

        let wide: u64 = rng.gen();
        assert_eq!(wide.popcount(), wide.count_ones());
    }
}
