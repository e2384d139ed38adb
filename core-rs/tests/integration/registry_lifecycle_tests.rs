//! Integration tests for the pools file -> registry -> allocate/release lifecycle

use std::fs;
use std::sync::{Arc, Mutex};
use std::thread;

use bitport::{AllocatorConfig, AllocatorRegistry, BitportError, PoolsConfig};
use tempfile::TempDir;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}

const POOLS_YAML: &str = r#"
apiVersion: bitport/v1
kind: PortPools
pools:
  - name: kernels
    startId: 3000
    endId: 4000
    reservedIds: [3000, 3001]
  - name: tiny
    startId: 1024
    endId: 1025
"#;

#[test]
fn test_load_file_and_allocate() {
    init_tracing();
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("pools.yaml");
    fs::write(&path, POOLS_YAML).unwrap();

    let config = PoolsConfig::load(&path).unwrap();
    let mut registry = AllocatorRegistry::from_config(&config).unwrap();

    assert_eq!(registry.allocate("tiny").unwrap(), Some(1024));
    assert_eq!(registry.allocate("tiny").unwrap(), Some(1025));
    assert_eq!(registry.allocate("tiny").unwrap(), None);

    let port = registry.allocate("kernels").unwrap().unwrap();
    assert_eq!(port, 3002);

    let stats = registry.stats();
    let kernels = &stats.iter().find(|(name, _)| name == "kernels").unwrap().1;
    assert_eq!(kernels.available, 998);
    assert_eq!(kernels.allocated, 3);
}

#[test]
fn test_invalid_file_rejected_before_any_pool_is_built() {
    init_tracing();
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("pools.yaml");
    fs::write(&path, POOLS_YAML.replace("endId: 1025", "endId: 1024")).unwrap();

    let err = PoolsConfig::load(&path).unwrap_err();
    assert!(matches!(err, BitportError::ValidationError(_)));
    assert!(format!("{}", err).contains("tiny"));
}

#[test]
fn test_registry_edit_and_save_config() {
    init_tracing();
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("pools.yaml");

    let config = PoolsConfig::new()
        .with_pool("gateways", AllocatorConfig::new(56000, 56199).with_reserved([56043]));
    config.save(&path).unwrap();

    let mut registry = AllocatorRegistry::from_config(&PoolsConfig::load(&path).unwrap()).unwrap();
    registry
        .create("workers", &AllocatorConfig::new(57000, 57099))
        .unwrap();

    assert_eq!(registry.names().collect::<Vec<_>>(), vec!["gateways", "workers"]);
    assert!(registry.get("gateways").unwrap().is_allocated(56043));
    assert_eq!(registry.get("workers").unwrap().available_count(), 100);
}

#[test]
fn test_churn_then_reset_through_registry() {
    init_tracing();
    let config = PoolsConfig::from_yaml_str(POOLS_YAML).unwrap();
    let mut registry = AllocatorRegistry::from_config(&config).unwrap();

    let mut held = Vec::new();
    for i in 0..2000u32 {
        if i % 3 == 2 {
            if let Some(id) = held.pop() {
                assert!(registry.deallocate("kernels", id).unwrap());
            }
        } else if let Some(id) = registry.allocate("kernels").unwrap() {
            held.push(id);
        }
    }

    let kernels = registry.get_mut("kernels").unwrap();
    assert_eq!(kernels.available_count(), 999 - held.len() as u32);

    kernels.reset();
    assert_eq!(kernels.available_count(), 999);
    for id in held {
        assert!(!kernels.is_allocated(id));
    }
}

#[test]
fn test_registry_behind_external_mutex() {
    init_tracing();
    let config = PoolsConfig::new().with_pool("shared", AllocatorConfig::new(20000, 20999));
    let registry = Arc::new(Mutex::new(AllocatorRegistry::from_config(&config).unwrap()));

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let registry = Arc::clone(&registry);
            thread::spawn(move || {
                let mut ids = Vec::new();
                for _ in 0..250 {
                    let id = registry.lock().unwrap().allocate("shared").unwrap();
                    ids.push(id.unwrap());
                }
                ids
            })
        })
        .collect();

    let mut all: Vec<u32> = handles
        .into_iter()
        .flat_map(|h| h.join().unwrap())
        .collect();
    all.sort_unstable();
    all.dedup();
    assert_eq!(all.len(), 1000);

    let mut registry = registry.lock().unwrap();
    assert_eq!(registry.allocate("shared").unwrap(), None);
}
