use async_trait::async_trait;
use uuid::Uuid;

use models::product;

use crate::domain::{NewProduct, ProductWithStores};
use crate::errors::ServiceError;

/// Persistence contract for products and the product side of the store links.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<product::Model>, ServiceError>;
    async fn find(&self, id: Uuid) -> Result<Option<product::Model>, ServiceError>;
    /// Find by id with the linked stores expanded.
    async fn find_with_stores(&self, id: Uuid) -> Result<Option<ProductWithStores>, ServiceError>;
    async fn insert(&self, new: NewProduct) -> Result<product::Model, ServiceError>;
    async fn update(&self, model: product::Model) -> Result<product::Model, ServiceError>;
    /// Remove a product and its store links; returns whether it existed.
    async fn delete(&self, id: Uuid) -> Result<bool, ServiceError>;
    /// Add one product -> store edge; an existing edge is kept. Returns whether it was new.
    async fn link_store(&self, product_id: Uuid, store_id: Uuid) -> Result<bool, ServiceError>;
    /// Remove one product -> store edge. Returns whether it existed.
    async fn unlink_store(&self, product_id: Uuid, store_id: Uuid) -> Result<bool, ServiceError>;
    /// Replace the whole link set of a product. Ids must exist and be de-duplicated.
    async fn replace_stores(&self, product_id: Uuid, store_ids: &[Uuid]) -> Result<(), ServiceError>;
}
