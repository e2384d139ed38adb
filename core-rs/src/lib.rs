//! # bitport - Fixed-memory bitmap ID allocator
//!
//! Hands out and reclaims unique integer IDs (typically port numbers) from a
//! bounded, contiguous range. The whole 16-bit ID space is covered by one
//! fixed 8 KiB bitmap, so the footprint does not depend on the range width.
//!
//! ## Core Principle
//!
//! **Mask once, never bounds-check again**: at construction every bit that
//! can never be handed out (outside the range, or reserved) is set to 1.
//! From then on any zero bit the scan finds is a valid ID.
//!
//! ## Layout
//!
//! ```text
//!   ID space [0, 65536), 2048 words x 32 bits
//!
//!   word:   0 ... 92 | 93 ........... 125 | 126 ... 2047
//!   bits:   all ones | boundary  free  boundary | all ones
//!                      ▲                 ▲
//!                  start=3000        end=4000
//!
//!   allocate: round-robin over words 93..=125 from the cursor,
//!             De Bruijn lookup for the lowest zero bit
//! ```
//!
//! ## Cost
//!
//! | Operation | Time |
//! |---|---|
//! | `allocate` | O(1) amortized, O(words in range) when nearly full |
//! | `deallocate`, `is_allocated` | O(1) |
//! | `available_count`, `allocation_ratio`, `stats` | O(words in range) |
//!
//! ## Quick Start
//!
//! ```
//! use bitport::{AllocatorConfig, BitmapAllocator};
//!
//! let config = AllocatorConfig::new(3000, 4000).with_reserved([3000, 3001]);
//! let mut ports = BitmapAllocator::new(&config).unwrap();
//!
//! assert_eq!(ports.available_count(), 999);
//! let port = ports.allocate().unwrap();
//! assert_eq!(port, 3002);
//! assert!(ports.deallocate(port));
//! ```

pub mod allocator;
pub mod bitmap;
pub mod bits;
pub mod errors;
pub mod pool;

pub use allocator::{AllocatorConfig, AllocatorStats, BitmapAllocator, IdRange, MAX_ID, MIN_ID, TOTAL_IDS};
pub use bits::Word;
pub use errors::{BitportError, Result};
pub use pool::{AllocatorRegistry, PoolConfig, PoolsConfig};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
