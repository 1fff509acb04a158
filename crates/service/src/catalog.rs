use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::product::{ProductRepository, ProductService};
use crate::product_store::ProductStoreService;
use crate::repo::{MemoryCatalog, SeaOrmCatalogRepository};
use crate::store::{StoreRepository, StoreService};

pub type DynProductService = ProductService<dyn ProductRepository>;
pub type DynStoreService = StoreService<dyn StoreRepository>;
pub type DynProductStoreService = ProductStoreService<dyn ProductRepository, dyn StoreRepository>;

/// The three catalog services wired over one storage backend.
#[derive(Clone)]
pub struct Catalog {
    pub products: Arc<DynProductService>,
    pub stores: Arc<DynStoreService>,
    pub links: Arc<DynProductStoreService>,
}

impl Catalog {
    pub fn from_repos(products: Arc<dyn ProductRepository>, stores: Arc<dyn StoreRepository>) -> Self {
        Self {
            products: Arc::new(ProductService::new(products.clone())),
            stores: Arc::new(StoreService::new(stores.clone())),
            links: Arc::new(ProductStoreService::new(products, stores)),
        }
    }

    /// Catalog held entirely in process memory.
    pub fn memory() -> Self {
        let repo = Arc::new(MemoryCatalog::new());
        Self::from_repos(repo.clone(), repo)
    }

    pub fn postgres(db: DatabaseConnection) -> Self {
        let repo = Arc::new(SeaOrmCatalogRepository::new(db));
        Self::from_repos(repo.clone(), repo)
    }
}
