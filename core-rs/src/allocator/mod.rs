/**
 * allocator module
 * Bitmap ID allocator: range, config, allocate/deallocate core, stats
 */

pub mod bitmap_allocator;
pub mod config;
pub mod range;
pub mod stats;

pub use bitmap_allocator::BitmapAllocator;
pub use config::AllocatorConfig;
pub use range::{IdRange, MAX_ID, MIN_ID, TOTAL_IDS};
pub use stats::AllocatorStats;
