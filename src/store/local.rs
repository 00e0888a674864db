//! In-memory instance store implementation.
//!
//! All data is held in memory behind a read-write lock, which keeps the
//! store fast and deterministic for unit tests and is sufficient for the
//! single-process dashboard server.

use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

use crate::models::{content_id, InstanceId, Request, Response, ScheduleInstance};
use crate::routes::landing::InstanceInfo;
use crate::store::error::{ErrorContext, StoreError, StoreResult};
use crate::store::InstanceStore;

/// In-memory instance store.
///
/// Instances are keyed by their content hash, so uploading the same
/// request/response pair twice yields the same id instead of a duplicate.
#[derive(Clone)]
pub struct LocalStore {
    data: Arc<RwLock<LocalData>>,
    max_instances: usize,
}

#[derive(Default)]
struct LocalData {
    instances: HashMap<InstanceId, Arc<ScheduleInstance>>,
    // Upload order, for stable listings.
    order: Vec<InstanceId>,
}

impl LocalStore {
    /// Create a new empty store holding at most `max_instances` instances.
    pub fn new(max_instances: usize) -> Self {
        Self {
            data: Arc::new(RwLock::new(LocalData::default())),
            max_instances,
        }
    }

    /// Get the number of instances stored.
    pub fn instance_count(&self) -> usize {
        self.data.read().instances.len()
    }

    /// Check if an instance exists.
    pub fn has_instance(&self, id: &InstanceId) -> bool {
        self.data.read().instances.contains_key(id)
    }

    /// Clear all data from the store.
    pub fn clear(&self) {
        let mut data = self.data.write();
        *data = LocalData::default();
    }
}

impl Default for LocalStore {
    fn default() -> Self {
        Self::new(crate::config::StoreSettings::default().max_instances)
    }
}

#[async_trait]
impl InstanceStore for LocalStore {
    async fn insert_instance(
        &self,
        name: &str,
        request: Request,
        response: Response,
    ) -> StoreResult<InstanceId> {
        let id = content_id(&request, &response).map_err(|e| {
            StoreError::serialization_with_context(
                e.to_string(),
                ErrorContext::new("insert_instance").with_entity("instance"),
            )
        })?;

        let mut data = self.data.write();
        if data.instances.contains_key(&id) {
            log::debug!("instance {} already stored, reusing", id);
            return Ok(id);
        }
        if data.instances.len() >= self.max_instances {
            return Err(StoreError::capacity_with_context(
                format!("store holds {} instances", self.max_instances),
                ErrorContext::new("insert_instance")
                    .with_entity("instance")
                    .with_details("remove an instance before uploading another"),
            ));
        }

        let instance = ScheduleInstance::new(name, request, response).map_err(|e| {
            StoreError::serialization_with_context(
                e.to_string(),
                ErrorContext::new("insert_instance").with_entity("instance"),
            )
        })?;
        log::info!("stored instance {} as {}", name, id);
        data.order.push(id.clone());
        data.instances.insert(id.clone(), Arc::new(instance));
        Ok(id)
    }

    async fn get_instance(&self, id: &InstanceId) -> StoreResult<Arc<ScheduleInstance>> {
        self.data.read().instances.get(id).cloned().ok_or_else(|| {
            StoreError::not_found_with_context(
                format!("instance '{}' does not exist", id),
                ErrorContext::new("get_instance")
                    .with_entity("instance")
                    .with_entity_id(id),
            )
        })
    }

    async fn list_instances(&self) -> StoreResult<Vec<InstanceInfo>> {
        let data = self.data.read();
        Ok(data
            .order
            .iter()
            .filter_map(|id| data.instances.get(id))
            .map(|instance| InstanceInfo {
                id: instance.id.clone(),
                name: instance.name.clone(),
                uploaded_at: instance.uploaded_at,
            })
            .collect())
    }

    async fn remove_instance(&self, id: &InstanceId) -> StoreResult<()> {
        let mut data = self.data.write();
        if data.instances.remove(id).is_none() {
            return Err(StoreError::not_found_with_context(
                format!("instance '{}' does not exist", id),
                ErrorContext::new("remove_instance")
                    .with_entity("instance")
                    .with_entity_id(id),
            ));
        }
        data.order.retain(|stored| stored != id);
        log::info!("removed instance {}", id);
        Ok(())
    }
}
