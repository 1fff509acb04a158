use std::sync::Arc;
use uuid::Uuid;
use tracing::{info, instrument};

use models::product;

use crate::domain::{CreateProductInput, ProductWithStores, UpdateProductInput};
use crate::errors::{EntityKind, ServiceError};
use crate::product::repository::ProductRepository;

/// Application service encapsulating product business rules.
pub struct ProductService<R: ProductRepository + ?Sized> {
    repo: Arc<R>,
}

impl<R: ProductRepository + ?Sized> ProductService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    /// All products, without store expansion.
    pub async fn list(&self) -> Result<Vec<product::Model>, ServiceError> {
        self.repo.list().await
    }

    #[instrument(skip(self), fields(product_id = %id))]
    pub async fn get(&self, id: Uuid) -> Result<ProductWithStores, ServiceError> {
        self.repo
            .find_with_stores(id)
            .await?
            .ok_or_else(|| ServiceError::not_found(EntityKind::Product, id))
    }

    /// Validate the product type, then persist with a fresh id.
    #[instrument(skip(self, input), fields(name = %input.name))]
    pub async fn create(&self, input: CreateProductInput) -> Result<product::Model, ServiceError> {
        let new = input.validate()?;
        let created = self.repo.insert(new).await?;
        info!(product_id = %created.id, product_type = %created.product_type, "product_created");
        Ok(created)
    }

    #[instrument(skip(self, input), fields(product_id = %id))]
    pub async fn update(&self, id: Uuid, input: UpdateProductInput) -> Result<product::Model, ServiceError> {
        let current = self
            .repo
            .find(id)
            .await?
            .ok_or_else(|| ServiceError::not_found(EntityKind::Product, id))?;
        let merged = input.merge(&current)?;
        let updated = self.repo.update(merged).await?;
        info!(product_id = %updated.id, "product_updated");
        Ok(updated)
    }

    #[instrument(skip(self), fields(product_id = %id))]
    pub async fn delete(&self, id: Uuid) -> Result<(), ServiceError> {
        if self.repo.find(id).await?.is_none() {
            return Err(ServiceError::not_found(EntityKind::Product, id));
        }
        self.repo.delete(id).await?;
        info!(product_id = %id, "product_deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{catalog, milk};
    use models::ProductType;

    #[tokio::test]
    async fn create_then_get_expands_empty_store_set() {
        let c = catalog();
        let created = c.products.create(milk()).await.unwrap();
        assert_eq!(created.name, "Milk");
        assert_eq!(created.product_type, ProductType::Perishable);

        let found = c.products.get(created.id).await.unwrap();
        assert_eq!(found.product, created);
        assert!(found.stores.is_empty());
        assert_eq!(c.products.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn create_with_invalid_type_is_not_persisted() {
        let c = catalog();
        let input = CreateProductInput { product_type: Some("FROZEN".into()), ..milk() };
        let err = c.products.create(input).await.unwrap_err();
        assert!(err.is_precondition_failed());
        assert!(c.products.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn update_merges_fields() {
        let c = catalog();
        let created = c.products.create(milk()).await.unwrap();
        let patch = UpdateProductInput { name: Some("Oat Milk".into()), product_type: Some("NON_PERISHABLE".into()), ..Default::default() };
        let updated = c.products.update(created.id, patch).await.unwrap();
        assert_eq!(updated.name, "Oat Milk");
        assert_eq!(updated.price, 2500.0);
        assert_eq!(updated.product_type, ProductType::NonPerishable);
        assert_eq!(c.products.get(created.id).await.unwrap().product, updated);
    }

    #[tokio::test]
    async fn update_with_invalid_type_keeps_record() {
        let c = catalog();
        let created = c.products.create(milk()).await.unwrap();
        let patch = UpdateProductInput { name: Some("Other".into()), product_type: Some("perishable".into()), ..Default::default() };
        let err = c.products.update(created.id, patch).await.unwrap_err();
        assert_eq!(err.kind(), "invalid_product_type");
        assert_eq!(c.products.get(created.id).await.unwrap().product, created);
    }

    #[tokio::test]
    async fn missing_ids_are_not_found() {
        let c = catalog();
        let id = Uuid::new_v4();
        assert!(c.products.get(id).await.unwrap_err().is_not_found());
        assert!(c.products.update(id, UpdateProductInput::default()).await.unwrap_err().is_not_found());
        assert!(c.products.delete(id).await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn not_found_is_checked_before_type() {
        let c = catalog();
        let patch = UpdateProductInput { product_type: Some("FROZEN".into()), ..Default::default() };
        let err = c.products.update(Uuid::new_v4(), patch).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn delete_removes_record() {
        let c = catalog();
        let created = c.products.create(milk()).await.unwrap();
        c.products.delete(created.id).await.unwrap();
        assert!(c.products.get(created.id).await.unwrap_err().is_not_found());
    }
}
