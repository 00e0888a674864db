//! Instance storage for uploaded scheduling data.
//!
//! This module provides the storage abstraction behind the HTTP handlers.
//! Uploaded request/response pairs are kept as immutable [`ScheduleInstance`]
//! values, keyed by a content hash so repeated uploads deduplicate.
//!
//! The module includes:
//! - `InstanceStore`: trait definition for storage operations
//! - `local`: In-memory implementation for the dashboard server and tests
//! - A process-wide store singleton initialized once at startup

pub mod error;
pub mod local;

pub use error::{ErrorContext, StoreError, StoreResult};
pub use local::LocalStore;

use anyhow::{Context, Result};
use async_trait::async_trait;
use std::sync::{Arc, OnceLock};

use crate::config::StoreSettings;
use crate::models::{InstanceId, Request, Response, ScheduleInstance};
use crate::routes::landing::InstanceInfo;

/// Storage operations for scheduling instances.
///
/// Implementations must be safe to share across request handlers.
#[async_trait]
pub trait InstanceStore: Send + Sync {
    /// Store a request/response pair under `name` and return its id.
    ///
    /// The id is derived from the payload content; storing an identical
    /// pair again returns the existing id.
    async fn insert_instance(
        &self,
        name: &str,
        request: Request,
        response: Response,
    ) -> StoreResult<InstanceId>;

    /// Fetch a stored instance.
    async fn get_instance(&self, id: &InstanceId) -> StoreResult<Arc<ScheduleInstance>>;

    /// List stored instances in upload order.
    async fn list_instances(&self) -> StoreResult<Vec<InstanceInfo>>;

    /// Remove a stored instance.
    async fn remove_instance(&self, id: &InstanceId) -> StoreResult<()>;
}

/// Global store instance initialized once per process.
static STORE: OnceLock<Arc<dyn InstanceStore>> = OnceLock::new();

/// Initialize the global store singleton.
pub fn init_store(settings: &StoreSettings) -> Result<()> {
    if STORE.get().is_some() {
        return Ok(());
    }

    let store = Arc::new(LocalStore::new(settings.max_instances));
    let _ = STORE.set(store);
    Ok(())
}

/// Get a reference to the global store instance.
pub fn get_store() -> Result<&'static Arc<dyn InstanceStore>> {
    if STORE.get().is_none() {
        let _ = init_store(&StoreSettings::default());
    }

    STORE
        .get()
        .context("Store not initialized. Call init_store() first.")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_store_initializes_once() {
        init_store(&StoreSettings { max_instances: 4 }).unwrap();
        // A second call is a no-op rather than an error.
        init_store(&StoreSettings { max_instances: 99 }).unwrap();
        assert!(get_store().is_ok());
    }
}
