//! Keyed singleton construction
//!
//! A [`SingletonFactory`] maps a configuration value to the one backend built
//! from it. Structurally equal configurations share a single instance for
//! the lifetime of the table, even when callers race on first use. A failed
//! construction leaves nothing behind, so the next call tries again.

use dashmap::DashMap;
use std::fmt;
use std::future::Future;
use std::hash::Hash;
use std::sync::Arc;
use switchboard_domain::error::Result;
use tokio::sync::OnceCell;
use tracing::{debug, info, warn};

/// Memo table from configuration value to constructed instance
pub struct SingletonFactory<C, T: ?Sized> {
    name: &'static str,
    cells: DashMap<C, Arc<OnceCell<Arc<T>>>>,
}

impl<C, T> SingletonFactory<C, T>
where
    C: Eq + Hash + Clone + fmt::Debug,
    T: ?Sized,
{
    /// Create an empty table; `name` labels log events
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            cells: DashMap::new(),
        }
    }

    /// Return the instance for `config`, constructing it with `init` on first use
    ///
    /// Concurrent callers with equal configurations wait on the same
    /// construction and all receive the same `Arc`. Errors from `init` are
    /// returned to the caller that ran it and are not cached; the key is
    /// forgotten once no other caller is waiting on it.
    pub async fn get_or_try_init<F, Fut>(&self, config: &C, init: F) -> Result<Arc<T>>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Arc<T>>>,
    {
        // Clone the cell out so no map guard is held across the await
        let cell = Arc::clone(
            self.cells
                .entry(config.clone())
                .or_insert_with(|| Arc::new(OnceCell::new()))
                .value(),
        );

        if let Some(instance) = cell.get() {
            debug!(registry = self.name, ?config, "Reusing backend instance");
            return Ok(Arc::clone(instance));
        }

        let result = cell
            .get_or_try_init(|| async {
                let built = init().await;
                match &built {
                    Ok(_) => info!(registry = self.name, ?config, "Constructed backend instance"),
                    Err(e) => warn!(
                        registry = self.name,
                        ?config,
                        error = %e,
                        "Backend construction failed"
                    ),
                }
                built
            })
            .await;

        match result {
            Ok(instance) => Ok(Arc::clone(instance)),
            Err(e) => {
                // Remove the empty cell only when no other caller holds it
                self.cells.remove_if(config, |_, stored| {
                    Arc::ptr_eq(stored, &cell)
                        && Arc::strong_count(stored) == 2
                        && !stored.initialized()
                });
                Err(e)
            }
        }
    }

    /// Number of constructed instances
    pub fn len(&self) -> usize {
        self.cells
            .iter()
            .filter(|entry| entry.value().initialized())
            .count()
    }

    /// Whether no instance has been constructed yet
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of keys tracked, including constructions still in flight
    pub fn tracked_keys(&self) -> usize {
        self.cells.len()
    }

    /// Whether an instance exists for `config`
    pub fn contains(&self, config: &C) -> bool {
        self.cells
            .get(config)
            .is_some_and(|cell| cell.value().initialized())
    }
}

impl<C: Eq + Hash, T: ?Sized> fmt::Debug for SingletonFactory<C, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SingletonFactory")
            .field("name", &self.name)
            .field("keys", &self.cells.len())
            .finish()
    }
}
