/**
 * bitmap module
 * Fixed-size bitmap storage and range masking
 */

pub mod mask;
pub mod store;

pub use mask::{apply_range_mask, out_of_range_mask};
pub use store::Bitmap;
