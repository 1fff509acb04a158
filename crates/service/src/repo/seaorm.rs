use async_trait::async_trait;
use sea_orm::{DatabaseConnection, EntityTrait, ModelTrait, QueryOrder, TransactionTrait};
use uuid::Uuid;

use models::{product, product_store, store};

use crate::domain::{NewProduct, NewStore, ProductWithStores, StoreWithProducts};
use crate::errors::ServiceError;
use crate::product::repository::ProductRepository;
use crate::store::repository::StoreRepository;

/// Postgres-backed catalog. Link cascades come from the foreign keys.
/// Lists and expanded relations are ordered by (name, id).
#[derive(Clone)]
pub struct SeaOrmCatalogRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmCatalogRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

#[async_trait]
impl ProductRepository for SeaOrmCatalogRepository {
    async fn list(&self) -> Result<Vec<product::Model>, ServiceError> {
        Ok(product::Entity::find()
            .order_by_asc(product::Column::Name)
            .order_by_asc(product::Column::Id)
            .all(&self.db)
            .await?)
    }

    async fn find(&self, id: Uuid) -> Result<Option<product::Model>, ServiceError> {
        Ok(product::Entity::find_by_id(id).one(&self.db).await?)
    }

    async fn find_with_stores(&self, id: Uuid) -> Result<Option<ProductWithStores>, ServiceError> {
        let Some(product) = product::Entity::find_by_id(id).one(&self.db).await? else {
            return Ok(None);
        };
        let stores = product
            .find_related(store::Entity)
            .order_by_asc(store::Column::Name)
            .order_by_asc(store::Column::Id)
            .all(&self.db)
            .await?;
        Ok(Some(ProductWithStores { product, stores }))
    }

    async fn insert(&self, new: NewProduct) -> Result<product::Model, ServiceError> {
        Ok(product::create(&self.db, &new.name, new.price, new.product_type).await?)
    }

    async fn update(&self, model: product::Model) -> Result<product::Model, ServiceError> {
        Ok(product::save(&self.db, model).await?)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, ServiceError> {
        let res = product::Entity::delete_by_id(id).exec(&self.db).await?;
        Ok(res.rows_affected > 0)
    }

    async fn link_store(&self, product_id: Uuid, store_id: Uuid) -> Result<bool, ServiceError> {
        Ok(product_store::link(&self.db, product_id, store_id).await?)
    }

    async fn unlink_store(&self, product_id: Uuid, store_id: Uuid) -> Result<bool, ServiceError> {
        Ok(product_store::unlink(&self.db, product_id, store_id).await?)
    }

    async fn replace_stores(&self, product_id: Uuid, store_ids: &[Uuid]) -> Result<(), ServiceError> {
        let txn = self.db.begin().await?;
        product_store::replace_for_product(&txn, product_id, store_ids).await?;
        txn.commit().await?;
        Ok(())
    }
}

#[async_trait]
impl StoreRepository for SeaOrmCatalogRepository {
    async fn list(&self) -> Result<Vec<store::Model>, ServiceError> {
        Ok(store::Entity::find()
            .order_by_asc(store::Column::Name)
            .order_by_asc(store::Column::Id)
            .all(&self.db)
            .await?)
    }

    async fn find(&self, id: Uuid) -> Result<Option<store::Model>, ServiceError> {
        Ok(store::Entity::find_by_id(id).one(&self.db).await?)
    }

    async fn find_with_products(&self, id: Uuid) -> Result<Option<StoreWithProducts>, ServiceError> {
        let Some(store) = store::Entity::find_by_id(id).one(&self.db).await? else {
            return Ok(None);
        };
        let products = store
            .find_related(product::Entity)
            .order_by_asc(product::Column::Name)
            .order_by_asc(product::Column::Id)
            .all(&self.db)
            .await?;
        Ok(Some(StoreWithProducts { store, products }))
    }

    async fn insert(&self, new: NewStore) -> Result<store::Model, ServiceError> {
        Ok(store::create(&self.db, &new.name, &new.city, &new.address).await?)
    }

    async fn update(&self, model: store::Model) -> Result<store::Model, ServiceError> {
        Ok(store::save(&self.db, model).await?)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, ServiceError> {
        let res = store::Entity::delete_by_id(id).exec(&self.db).await?;
        Ok(res.rows_affected > 0)
    }
}
