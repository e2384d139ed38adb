/**
 * pool module
 * Named pools: definition files and the registry that owns the allocators
 */

pub mod config;
pub mod registry;

pub use config::{PoolConfig, PoolsConfig};
pub use registry::AllocatorRegistry;
