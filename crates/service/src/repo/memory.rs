use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use models::{product, store};

use crate::domain::{NewProduct, NewStore, ProductWithStores, StoreWithProducts};
use crate::errors::ServiceError;
use crate::product::repository::ProductRepository;
use crate::store::repository::StoreRepository;

#[derive(Default)]
struct State {
    products: BTreeMap<Uuid, product::Model>,
    stores: BTreeMap<Uuid, store::Model>,
    // (product_id, store_id)
    links: Vec<(Uuid, Uuid)>,
}

// Results are ordered by (name, id), the same order the Postgres repository uses.
fn sorted_products(mut v: Vec<product::Model>) -> Vec<product::Model> {
    v.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));
    v
}

fn sorted_stores(mut v: Vec<store::Model>) -> Vec<store::Model> {
    v.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));
    v
}

impl State {
    fn stores_of(&self, product_id: Uuid) -> Vec<store::Model> {
        sorted_stores(
            self.links
                .iter()
                .filter(|(p, _)| *p == product_id)
                .filter_map(|(_, s)| self.stores.get(s).cloned())
                .collect(),
        )
    }

    fn products_of(&self, store_id: Uuid) -> Vec<product::Model> {
        sorted_products(
            self.links
                .iter()
                .filter(|(_, s)| *s == store_id)
                .filter_map(|(p, _)| self.products.get(p).cloned())
                .collect(),
        )
    }
}

/// Process-local catalog used by tests and the `memory` storage backend.
///
/// Implements both repositories over one shared state so link cascades
/// behave like the relational schema.
#[derive(Default)]
pub struct MemoryCatalog {
    state: RwLock<State>,
}

impl MemoryCatalog {
    pub fn new() -> Self { Self::default() }
}

#[async_trait]
impl ProductRepository for MemoryCatalog {
    async fn list(&self) -> Result<Vec<product::Model>, ServiceError> {
        Ok(sorted_products(self.state.read().await.products.values().cloned().collect()))
    }

    async fn find(&self, id: Uuid) -> Result<Option<product::Model>, ServiceError> {
        Ok(self.state.read().await.products.get(&id).cloned())
    }

    async fn find_with_stores(&self, id: Uuid) -> Result<Option<ProductWithStores>, ServiceError> {
        let state = self.state.read().await;
        Ok(state
            .products
            .get(&id)
            .map(|p| ProductWithStores { product: p.clone(), stores: state.stores_of(id) }))
    }

    async fn insert(&self, new: NewProduct) -> Result<product::Model, ServiceError> {
        let model = product::Model {
            id: Uuid::new_v4(),
            name: new.name,
            price: new.price,
            product_type: new.product_type,
        };
        self.state.write().await.products.insert(model.id, model.clone());
        Ok(model)
    }

    async fn update(&self, model: product::Model) -> Result<product::Model, ServiceError> {
        let mut state = self.state.write().await;
        match state.products.get_mut(&model.id) {
            Some(slot) => {
                *slot = model.clone();
                Ok(model)
            }
            None => Err(ServiceError::Db(format!("product {} vanished during update", model.id))),
        }
    }

    async fn delete(&self, id: Uuid) -> Result<bool, ServiceError> {
        let mut state = self.state.write().await;
        let existed = state.products.remove(&id).is_some();
        state.links.retain(|(p, _)| *p != id);
        Ok(existed)
    }

    async fn link_store(&self, product_id: Uuid, store_id: Uuid) -> Result<bool, ServiceError> {
        let mut state = self.state.write().await;
        if !state.products.contains_key(&product_id) {
            return Err(ServiceError::Db(format!("product {product_id} does not exist")));
        }
        if !state.stores.contains_key(&store_id) {
            return Err(ServiceError::Db(format!("store {store_id} does not exist")));
        }
        if state.links.contains(&(product_id, store_id)) {
            return Ok(false);
        }
        state.links.push((product_id, store_id));
        Ok(true)
    }

    async fn unlink_store(&self, product_id: Uuid, store_id: Uuid) -> Result<bool, ServiceError> {
        let mut state = self.state.write().await;
        let before = state.links.len();
        state.links.retain(|edge| *edge != (product_id, store_id));
        Ok(state.links.len() < before)
    }

    async fn replace_stores(&self, product_id: Uuid, store_ids: &[Uuid]) -> Result<(), ServiceError> {
        let mut state = self.state.write().await;
        // mirror the foreign keys: reject dangling ids without touching the set
        if !state.products.contains_key(&product_id) {
            return Err(ServiceError::Db(format!("product {product_id} does not exist")));
        }
        if let Some(missing) = store_ids.iter().find(|s| !state.stores.contains_key(s)) {
            return Err(ServiceError::Db(format!("store {missing} does not exist")));
        }
        state.links.retain(|(p, _)| *p != product_id);
        state.links.extend(store_ids.iter().map(|s| (product_id, *s)));
        Ok(())
    }
}

#[async_trait]
impl StoreRepository for MemoryCatalog {
    async fn list(&self) -> Result<Vec<store::Model>, ServiceError> {
        Ok(sorted_stores(self.state.read().await.stores.values().cloned().collect()))
    }

    async fn find(&self, id: Uuid) -> Result<Option<store::Model>, ServiceError> {
        Ok(self.state.read().await.stores.get(&id).cloned())
    }

    async fn find_with_products(&self, id: Uuid) -> Result<Option<StoreWithProducts>, ServiceError> {
        let state = self.state.read().await;
        Ok(state
            .stores
            .get(&id)
            .map(|s| StoreWithProducts { store: s.clone(), products: state.products_of(id) }))
    }

    async fn insert(&self, new: NewStore) -> Result<store::Model, ServiceError> {
        let model = store::Model { id: Uuid::new_v4(), name: new.name, city: new.city, address: new.address };
        self.state.write().await.stores.insert(model.id, model.clone());
        Ok(model)
    }

    async fn update(&self, model: store::Model) -> Result<store::Model, ServiceError> {
        store::validate_city(&model.city)?;
        let mut state = self.state.write().await;
        match state.stores.get_mut(&model.id) {
            Some(slot) => {
                *slot = model.clone();
                Ok(model)
            }
            None => Err(ServiceError::Db(format!("store {} vanished during update", model.id))),
        }
    }

    async fn delete(&self, id: Uuid) -> Result<bool, ServiceError> {
        let mut state = self.state.write().await;
        let existed = state.stores.remove(&id).is_some();
        state.links.retain(|(_, s)| *s != id);
        Ok(existed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use models::ProductType;

    fn new_product() -> NewProduct {
        NewProduct { name: "Milk".into(), price: 2500.0, product_type: ProductType::Perishable }
    }

    fn new_store(name: &str) -> NewStore {
        NewStore { name: name.into(), city: "BOG".into(), address: "Main St".into() }
    }

    #[tokio::test]
    async fn replace_stores_rejects_dangling_ids_atomically() {
        let repo = MemoryCatalog::new();
        let p = ProductRepository::insert(&repo, new_product()).await.unwrap();
        let s = StoreRepository::insert(&repo, new_store("Shop1")).await.unwrap();
        repo.replace_stores(p.id, &[s.id]).await.unwrap();

        let err = repo.replace_stores(p.id, &[Uuid::new_v4()]).await.unwrap_err();
        assert!(matches!(err, ServiceError::Db(_)));
        let view = repo.find_with_stores(p.id).await.unwrap().unwrap();
        assert_eq!(view.store_ids(), vec![s.id]);
    }

    #[tokio::test]
    async fn delete_reports_existence_and_cascades() {
        let repo = MemoryCatalog::new();
        let p = ProductRepository::insert(&repo, new_product()).await.unwrap();
        let s = StoreRepository::insert(&repo, new_store("Shop1")).await.unwrap();
        repo.replace_stores(p.id, &[s.id]).await.unwrap();

        assert!(StoreRepository::delete(&repo, s.id).await.unwrap());
        assert!(!StoreRepository::delete(&repo, s.id).await.unwrap());
        assert!(repo.find_with_stores(p.id).await.unwrap().unwrap().stores.is_empty());
    }

    #[tokio::test]
    async fn store_view_lists_linked_products_by_name() {
        let repo = MemoryCatalog::new();
        let milk = ProductRepository::insert(&repo, new_product()).await.unwrap();
        let bread = ProductRepository::insert(&repo, NewProduct { name: "Bread".into(), ..new_product() }).await.unwrap();
        let s = StoreRepository::insert(&repo, new_store("Shop1")).await.unwrap();
        repo.replace_stores(milk.id, &[s.id]).await.unwrap();
        repo.replace_stores(bread.id, &[s.id]).await.unwrap();

        let view = repo.find_with_products(s.id).await.unwrap().unwrap();
        let ids: Vec<Uuid> = view.products.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![bread.id, milk.id]);
    }

    #[tokio::test]
    async fn lists_are_ordered_by_name() {
        let repo = MemoryCatalog::new();
        for name in ["Shop3", "Shop1", "Shop2"] {
            StoreRepository::insert(&repo, new_store(name)).await.unwrap();
        }
        let names: Vec<String> = StoreRepository::list(&repo).await.unwrap().into_iter().map(|s| s.name).collect();
        assert_eq!(names, vec!["Shop1", "Shop2", "Shop3"]);
    }

    #[tokio::test]
    async fn link_and_unlink_touch_one_edge() {
        let repo = MemoryCatalog::new();
        let p = ProductRepository::insert(&repo, new_product()).await.unwrap();
        let s1 = StoreRepository::insert(&repo, new_store("Shop1")).await.unwrap();
        let s2 = StoreRepository::insert(&repo, new_store("Shop2")).await.unwrap();

        assert!(repo.link_store(p.id, s1.id).await.unwrap());
        assert!(!repo.link_store(p.id, s1.id).await.unwrap());
        assert!(repo.link_store(p.id, s2.id).await.unwrap());
        assert!(matches!(repo.link_store(p.id, Uuid::new_v4()).await, Err(ServiceError::Db(_))));

        assert!(repo.unlink_store(p.id, s1.id).await.unwrap());
        assert!(!repo.unlink_store(p.id, s1.id).await.unwrap());
        let view = repo.find_with_stores(p.id).await.unwrap().unwrap();
        assert_eq!(view.store_ids(), vec![s2.id]);
    }
}
