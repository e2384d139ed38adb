/**
 * registry.rs
 * Named allocators owned by the embedding layer
 *
 * The registry is an ordinary value: the service that needs pools builds one
 * (directly or from a PoolsConfig) and passes it by reference. There is no
 * process-wide instance.
 *
 * No locking. A multi-threaded service keeps the registry behind its own
 * Mutex and holds the lock for each call.
 */

use std::collections::BTreeMap;

use tracing::info;

use crate::allocator::{AllocatorConfig, AllocatorStats, BitmapAllocator};
use crate::errors::{BitportError, Result};
use crate::pool::config::PoolsConfig;

/// Pool name → allocator
#[derive(Debug, Default)]
pub struct AllocatorRegistry {
    allocators: BTreeMap<String, BitmapAllocator>,
}

impl AllocatorRegistry {
    /// Empty registry
    pub fn new() -> Self {
        AllocatorRegistry {
            allocators: BTreeMap::new(),
        }
    }

    /// Build every pool in a validated config
    ///
    /// # Example
    /// ```
    /// use bitport::{AllocatorConfig, AllocatorRegistry, PoolsConfig};
    ///
    /// let config = PoolsConfig::new().with_pool("kernels", AllocatorConfig::new(3000, 4000));
    /// let mut registry = AllocatorRegistry::from_config(&config).unwrap();
    /// assert_eq!(registry.allocate("kernels").unwrap(), Some(3000));
    /// ```
    pub fn from_config(config: &PoolsConfig) -> Result<Self> {
        config.validate()?;

        let mut registry = Self::new();
        for pool in &config.pools {
            registry.create(&pool.name, &pool.allocator)?;
        }
        Ok(registry)
    }

    /// Create a named pool
    ///
    /// # Errors
    /// - `PoolAlreadyExists` if `name` is taken
    /// - `InvalidRange` if the config is invalid
    pub fn create(&mut self, name: &str, config: &AllocatorConfig) -> Result<&mut BitmapAllocator> {
        if self.allocators.contains_key(name) {
            return Err(BitportError::PoolAlreadyExists(name.to_string()));
        }

        let allocator = BitmapAllocator::new(config)?;
        info!(
            pool = name,
            start = config.start_id,
            end = config.end_id,
            "Pool created"
        );

        Ok(self.allocators.entry(name.to_string()).or_insert(allocator))
    }

    pub fn get(&self, name: &str) -> Option<&BitmapAllocator> {
        self.allocators.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut BitmapAllocator> {
        self.allocators.get_mut(name)
    }

    /// Remove a pool, returning its allocator
    pub fn remove(&mut self, name: &str) -> Option<BitmapAllocator> {
        let removed = self.allocators.remove(name);
        if removed.is_some() {
            info!(pool = name, "Pool removed");
        }
        removed
    }

    pub fn contains(&self, name: &str) -> bool {
        self.allocators.contains_key(name)
    }

    /// Pool names in sorted order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.allocators.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.allocators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.allocators.is_empty()
    }

    /// Allocate from a named pool
    ///
    /// # Returns
    /// `Ok(None)` when the pool is exhausted
    ///
    /// # Errors
    /// `PoolNotFound` if no pool has this name
    pub fn allocate(&mut self, name: &str) -> Result<Option<u32>> {
        Ok(self.pool_mut(name)?.allocate())
    }

    /// Release an ID back to a named pool
    ///
    /// # Returns
    /// The allocator's answer: true if `id` is within the pool's range
    pub fn deallocate(&mut self, name: &str, id: u32) -> Result<bool> {
        Ok(self.pool_mut(name)?.deallocate(id))
    }

    /// Stats for every pool, sorted by name
    pub fn stats(&self) -> Vec<(String, AllocatorStats)> {
        self.allocators
            .iter()
            .map(|(name, allocator)| (name.clone(), allocator.stats()))
            .collect()
    }

    fn pool_mut(&mut self, name: &str) -> Result<&mut BitmapAllocator> {
        self.allocators
            .get_mut(name)
            .ok_or_else(|| BitportError::PoolNotFound(name.to_string()))
    }
}
