use async_trait::async_trait;
use uuid::Uuid;

use models::store;

use crate::domain::{NewStore, StoreWithProducts};
use crate::errors::ServiceError;

/// Persistence contract for stores.
#[async_trait]
pub trait StoreRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<store::Model>, ServiceError>;
    async fn find(&self, id: Uuid) -> Result<Option<store::Model>, ServiceError>;
    /// Find by id with the linked products expanded.
    async fn find_with_products(&self, id: Uuid) -> Result<Option<StoreWithProducts>, ServiceError>;
    async fn insert(&self, new: NewStore) -> Result<store::Model, ServiceError>;
    async fn update(&self, model: store::Model) -> Result<store::Model, ServiceError>;
    /// Remove a store and its product links; returns whether it existed.
    async fn delete(&self, id: Uuid) -> Result<bool, ServiceError>;
}
