//! Backend variant configurations
//!
//! A variant configuration is one immutable, validated block describing a
//! single backend choice. It knows how to build its backend and shares the
//! result through a process-wide [`SingletonFactory`] keyed by its own value.

use super::singleton::SingletonFactory;
use async_trait::async_trait;
use std::fmt;
use std::hash::Hash;
use std::sync::Arc;
use switchboard_domain::error::Result;

/// Configuration block for one backend
#[async_trait]
pub trait VariantConfig: Clone + Eq + Hash + fmt::Debug + Send + Sync + 'static {
    /// Capability the backend implements (e.g. `dyn CacheProvider`)
    type Capability: ?Sized + Send + Sync + 'static;

    /// Process-wide memo table for this variant type
    fn registry() -> &'static SingletonFactory<Self, Self::Capability>;

    /// Construct a fresh backend, bypassing the memo table
    async fn build(&self) -> Result<Arc<Self::Capability>>;

    /// Shared backend for this configuration value
    async fn instance(&self) -> Result<Arc<Self::Capability>> {
        Self::registry().get_or_try_init(self, || self.build()).await
    }
}
