use std::sync::Arc;
use uuid::Uuid;
use tracing::{debug, info, instrument};

use models::store;

use crate::domain::{unique_ids, ProductWithStores};
use crate::errors::{EntityKind, ServiceError};
use crate::product::repository::ProductRepository;
use crate::store::repository::StoreRepository;

/// Maintains the product -> stores link set.
///
/// Every operation performs all of its lookups and membership checks before
/// the single write; the first failing check short-circuits.
pub struct ProductStoreService<P: ProductRepository + ?Sized, S: StoreRepository + ?Sized> {
    products: Arc<P>,
    stores: Arc<S>,
}

impl<P, S> ProductStoreService<P, S>
where
    P: ProductRepository + ?Sized,
    S: StoreRepository + ?Sized,
{
    pub fn new(products: Arc<P>, stores: Arc<S>) -> Self { Self { products, stores } }

    async fn require_store(&self, store_id: Uuid) -> Result<store::Model, ServiceError> {
        self.stores
            .find(store_id)
            .await?
            .ok_or_else(|| ServiceError::not_found(EntityKind::Store, store_id))
    }

    async fn require_product(&self, product_id: Uuid) -> Result<ProductWithStores, ServiceError> {
        self.products
            .find_with_stores(product_id)
            .await?
            .ok_or_else(|| ServiceError::not_found(EntityKind::Product, product_id))
    }

    /// Link a store to a product. Linking an already linked pair is a no-op.
    /// Writes only the one edge.
    #[instrument(skip(self), fields(product_id = %product_id, store_id = %store_id))]
    pub async fn add_store_to_product(&self, product_id: Uuid, store_id: Uuid) -> Result<ProductWithStores, ServiceError> {
        self.require_store(store_id).await?;
        let product = self.require_product(product_id).await?;
        if product.has_store(store_id) {
            debug!("store already linked");
            return Ok(product);
        }
        if !self.products.link_store(product_id, store_id).await? {
            debug!("store linked concurrently");
        }
        let product = self.require_product(product_id).await?;
        info!(stores = product.stores.len(), "store_linked");
        Ok(product)
    }

    #[instrument(skip(self), fields(product_id = %product_id, store_id = %store_id))]
    pub async fn find_store_from_product(&self, product_id: Uuid, store_id: Uuid) -> Result<store::Model, ServiceError> {
        self.require_store(store_id).await?;
        let product = self.require_product(product_id).await?;
        product
            .store(store_id)
            .cloned()
            .ok_or_else(|| ServiceError::not_associated(product_id, store_id))
    }

    #[instrument(skip(self), fields(product_id = %product_id))]
    pub async fn find_stores_from_product(&self, product_id: Uuid) -> Result<Vec<store::Model>, ServiceError> {
        Ok(self.require_product(product_id).await?.stores)
    }

    /// Replace the whole link set of a product. Repeated ids collapse into one link.
    #[instrument(skip(self, store_ids), fields(product_id = %product_id, requested = store_ids.len()))]
    pub async fn update_stores_from_product(
        &self,
        product_id: Uuid,
        store_ids: &[Uuid],
    ) -> Result<ProductWithStores, ServiceError> {
        self.require_product(product_id).await?;
        let ids = unique_ids(store_ids.iter().copied());
        for id in &ids {
            self.require_store(*id).await?;
        }
        self.products.replace_stores(product_id, &ids).await?;
        info!(stores = ids.len(), "store_links_replaced");
        // re-read so the view carries the repository's store order
        self.require_product(product_id).await
    }

    #[instrument(skip(self), fields(product_id = %product_id, store_id = %store_id))]
    pub async fn delete_store_from_product(&self, product_id: Uuid, store_id: Uuid) -> Result<(), ServiceError> {
        self.require_store(store_id).await?;
        let product = self.require_product(product_id).await?;
        if !product.has_store(store_id) {
            return Err(ServiceError::not_associated(product_id, store_id));
        }
        if !self.products.unlink_store(product_id, store_id).await? {
            debug!("store unlinked concurrently");
        }
        info!("store_unlinked");
        Ok(())
    }
}
