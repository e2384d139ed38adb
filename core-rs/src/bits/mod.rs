/**
 * bits module
 * Stateless bit primitives used by the bitmap: find-first-zero and popcount
 */

pub mod debruijn;
pub mod word;

pub use word::Word;
