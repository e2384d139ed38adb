/**
 * config.rs
 * Parser for pool definition files (YAML or JSON)
 *
 * Format:
 * ```yaml
 * apiVersion: bitport/v1
 * kind: PortPools
 * pools:
 *   - name: kernels
 *     startId: 3000
 *     endId: 4000
 *     reservedIds: [3000, 3001]
 *   - name: gateways
 *     startId: 56000
 *     endId: 56199
 * ```
 *
 * Files ending in `.json` are parsed as JSON, everything else as YAML.
 */

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

use tracing::info;

use crate::allocator::AllocatorConfig;
use crate::errors::{BitportError, Result};

pub const API_VERSION: &str = "bitport/v1";
pub const KIND: &str = "PortPools";

/// One named pool
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PoolConfig {
    pub name: String,
    #[serde(flatten)]
    pub allocator: AllocatorConfig,
}

/// Pool definition file
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PoolsConfig {
    pub api_version: String,
    pub kind: String,
    #[serde(default)]
    pub pools: Vec<PoolConfig>,
}

impl PoolsConfig {
    /// Empty config with the current apiVersion/kind
    pub fn new() -> Self {
        PoolsConfig {
            api_version: API_VERSION.to_string(),
            kind: KIND.to_string(),
            pools: Vec::new(),
        }
    }

    /// Append a pool definition
    pub fn with_pool(mut self, name: &str, allocator: AllocatorConfig) -> Self {
        self.pools.push(PoolConfig {
            name: name.to_string(),
            allocator,
        });
        self
    }

    /// Load and validate a pools file
    ///
    /// # Arguments
    /// * `path` - Path to a `.yaml`/`.yml` or `.json` file
    ///
    /// # Example
    /// ```no_run
    /// use bitport::PoolsConfig;
    ///
    /// let config = PoolsConfig::load("pools.yaml").unwrap();
    /// assert!(!config.pools.is_empty());
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(BitportError::FileNotFound(path.to_string_lossy().to_string()));
        }

        let content = fs::read_to_string(path).map_err(|e| {
            BitportError::IoError(format!("Failed to read pools file: {}", e))
        })?;

        let is_json = path.extension().and_then(|s| s.to_str()) == Some("json");
        let config = if is_json {
            Self::from_json_str(&content)?
        } else {
            Self::from_yaml_str(&content)?
        };

        info!(path = %path.display(), pools = config.pools.len(), "Loaded pools config");
        Ok(config)
    }

    /// Parse and validate YAML
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let config: PoolsConfig = serde_yaml::from_str(content)
            .map_err(|e| BitportError::ParseError(format!("Invalid pools YAML: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate JSON
    pub fn from_json_str(content: &str) -> Result<Self> {
        let config: PoolsConfig = serde_json::from_str(content)
            .map_err(|e| BitportError::ParseError(format!("Invalid pools JSON: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Validate structure
    ///
    /// Ensures:
    /// - apiVersion is "bitport/v1"
    /// - kind is "PortPools"
    /// - pool names are non-empty and unique
    /// - every pool range is valid
    pub fn validate(&self) -> Result<()> {
        if self.api_version != API_VERSION {
            return Err(BitportError::ValidationError(format!(
                "Invalid apiVersion: expected '{}', got '{}'",
                API_VERSION, self.api_version
            )));
        }

        if self.kind != KIND {
            return Err(BitportError::ValidationError(format!(
                "Invalid kind: expected '{}', got '{}'",
                KIND, self.kind
            )));
        }

        let mut seen = HashSet::new();
        for pool in &self.pools {
            if pool.name.is_empty() {
                return Err(BitportError::ValidationError(
                    "pool name cannot be empty".to_string(),
                ));
            }

            if !seen.insert(pool.name.as_str()) {
                return Err(BitportError::ValidationError(format!(
                    "duplicate pool name: {}",
                    pool.name
                )));
            }

            pool.allocator.validate().map_err(|e| {
                BitportError::ValidationError(format!("pool '{}': {}", pool.name, e))
            })?;
        }

        Ok(())
    }

    /// Save as YAML
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let yaml = serde_yaml::to_string(self).map_err(|e| {
            BitportError::SerializationError(format!("Failed to serialize pools: {}", e))
        })?;

        fs::write(path.as_ref(), yaml).map_err(|e| {
            BitportError::IoError(format!("Failed to write pools file: {}", e))
        })?;

        Ok(())
    }
}

impl Default for PoolsConfig {
    fn default() -> Self {
        Self::new()
    }
}
