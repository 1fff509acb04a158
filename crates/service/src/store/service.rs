use std::sync::Arc;
use uuid::Uuid;
use tracing::{info, instrument};

use models::store;

use crate::domain::{CreateStoreInput, StoreWithProducts, UpdateStoreInput};
use crate::errors::{EntityKind, ServiceError};
use crate::store::repository::StoreRepository;

/// Application service encapsulating store business rules.
pub struct StoreService<R: StoreRepository + ?Sized> {
    repo: Arc<R>,
}

impl<R: StoreRepository + ?Sized> StoreService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    pub async fn list(&self) -> Result<Vec<store::Model>, ServiceError> {
        self.repo.list().await
    }

    #[instrument(skip(self), fields(store_id = %id))]
    pub async fn get(&self, id: Uuid) -> Result<StoreWithProducts, ServiceError> {
        self.repo
            .find_with_products(id)
            .await?
            .ok_or_else(|| ServiceError::not_found(EntityKind::Store, id))
    }

    #[instrument(skip(self, input), fields(name = %input.name, city = %input.city))]
    pub async fn create(&self, input: CreateStoreInput) -> Result<store::Model, ServiceError> {
        let new = input.validate()?;
        let created = self.repo.insert(new).await?;
        info!(store_id = %created.id, "store_created");
        Ok(created)
    }

    #[instrument(skip(self, input), fields(store_id = %id))]
    pub async fn update(&self, id: Uuid, input: UpdateStoreInput) -> Result<store::Model, ServiceError> {
        let current = self
            .repo
            .find(id)
            .await?
            .ok_or_else(|| ServiceError::not_found(EntityKind::Store, id))?;
        let merged = input.merge(&current)?;
        let updated = self.repo.update(merged).await?;
        info!(store_id = %updated.id, "store_updated");
        Ok(updated)
    }

    #[instrument(skip(self), fields(store_id = %id))]
    pub async fn delete(&self, id: Uuid) -> Result<(), ServiceError> {
        if self.repo.find(id).await?.is_none() {
            return Err(ServiceError::not_found(EntityKind::Store, id));
        }
        self.repo.delete(id).await?;
        info!(store_id = %id, "store_deleted");
        Ok(())
    }
}
