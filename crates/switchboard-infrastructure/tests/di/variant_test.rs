//! Variant configuration memoization

use async_trait::async_trait;
use futures::future::join_all;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, LazyLock};
use switchboard_domain::error::{Error, Result};
use switchboard_domain::ports::CacheProvider;
use switchboard_infrastructure::config::MemoryConfig;
use switchboard_infrastructure::di::{SingletonFactory, VariantConfig};
use switchboard_providers::cache::NullCacheProvider;

static FLAKY_BUILDS: AtomicUsize = AtomicUsize::new(0);

/// Variant whose first construction fails
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct FlakyConfig {
    id: u32,
}

#[async_trait]
impl VariantConfig for FlakyConfig {
    type Capability = dyn CacheProvider;

    fn registry() -> &'static SingletonFactory<Self, dyn CacheProvider> {
        static REGISTRY: LazyLock<SingletonFactory<FlakyConfig, dyn CacheProvider>> =
            LazyLock::new(|| SingletonFactory::new("test.flaky"));
        &REGISTRY
    }

    async fn build(&self) -> Result<Arc<dyn CacheProvider>> {
        if FLAKY_BUILDS.fetch_add(1, Ordering::SeqCst) == 0 {
            Err(Error::backend_construction("flaky", "backend not ready"))
        } else {
            Ok(Arc::new(NullCacheProvider::new()))
        }
    }
}

#[tokio::test]
async fn test_failed_construction_retries_on_next_call() {
    let config = FlakyConfig { id: 1 };

    let first = config.instance().await;
    assert!(matches!(first, Err(Error::BackendConstruction { .. })));
    assert!(!FlakyConfig::registry().contains(&config));

    let second = config.instance().await.unwrap();
    let third = FlakyConfig { id: 1 }.instance().await.unwrap();

    assert!(Arc::ptr_eq(&second, &third));
    assert_eq!(FLAKY_BUILDS.load(Ordering::SeqCst), 2);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_first_use_of_equal_configs() {
    let handles = (0..32).map(|_| {
        tokio::spawn(async {
            let config = MemoryConfig { max_size: 9001 };
            config.instance().await
        })
    });

    let instances: Vec<Arc<dyn CacheProvider>> = join_all(handles)
        .await
        .into_iter()
        .map(|joined| joined.unwrap().unwrap())
        .collect();

    assert!(instances.iter().all(|i| Arc::ptr_eq(i, &instances[0])));
    assert!(MemoryConfig::registry().contains(&MemoryConfig { max_size: 9001 }));
}

#[tokio::test]
async fn test_build_bypasses_registry() {
    let config = MemoryConfig { max_size: 9002 };

    let shared = config.instance().await.unwrap();
    let fresh = config.build().await.unwrap();

    assert!(!Arc::ptr_eq(&shared, &fresh));
    assert!(Arc::ptr_eq(&shared, &config.instance().await.unwrap()));
}
