/**
 * config.rs
 * Construction parameters for a single allocator
 *
 * Format (YAML, one entry of a pools file):
 * ```yaml
 * startId: 3000
 * endId: 4000
 * reservedIds: [3000, 3001]
 * ```
 */

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::allocator::range::IdRange;
use crate::errors::Result;

/// Range and reserved set for one allocator
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AllocatorConfig {
    pub start_id: u32,
    pub end_id: u32,
    /// IDs that are never handed out. Entries outside the range are ignored.
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub reserved_ids: BTreeSet<u32>,
}

impl AllocatorConfig {
    /// Config with no reserved IDs
    ///
    /// # Example
    /// ```
    /// use bitport::AllocatorConfig;
    ///
    /// let config = AllocatorConfig::new(3000, 4000).with_reserved([3000, 3001]);
    /// assert_eq!(config.reserved_ids.len(), 2);
    /// ```
    pub fn new(start_id: u32, end_id: u32) -> Self {
        AllocatorConfig {
            start_id,
            end_id,
            reserved_ids: BTreeSet::new(),
        }
    }

    /// Add reserved IDs
    pub fn with_reserved<I: IntoIterator<Item = u32>>(mut self, ids: I) -> Self {
        self.reserved_ids.extend(ids);
        self
    }

    /// Validated range for this config
    pub fn range(&self) -> Result<IdRange> {
        IdRange::new(self.start_id, self.end_id)
    }

    /// Check range bounds without building an allocator
    pub fn validate(&self) -> Result<()> {
        self.range().map(|_| ())
    }
}
