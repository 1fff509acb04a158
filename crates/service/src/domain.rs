//! Inputs, expanded views and the update merge rules for catalog records.

use std::collections::HashSet;

use models::{product, store, ProductType};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::errors::{Precondition, ServiceError};

/// Product creation payload. `type` stays raw JSON so a missing or non-string
/// type is rejected by the service rather than by deserialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateProductInput {
    pub name: String,
    pub price: f64,
    #[serde(default, rename = "type")]
    pub product_type: Option<Value>,
}

/// Partial product update; absent fields keep their persisted value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateProductInput {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default, rename = "type")]
    pub product_type: Option<Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateStoreInput {
    pub name: String,
    pub city: String,
    pub address: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateStoreInput {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
}

/// Validated product fields ready to insert.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub price: f64,
    pub product_type: ProductType,
}

/// Validated store fields ready to insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewStore {
    pub name: String,
    pub city: String,
    pub address: String,
}

/// Only a JSON string naming a variant is a product type; anything else is echoed back as JSON text.
fn parse_product_type(raw: Option<&Value>) -> Result<ProductType, ServiceError> {
    match raw {
        Some(Value::String(s)) => Ok(ProductType::parse(s)?),
        other => Err(ServiceError::PreconditionFailed(Precondition::InvalidProductType {
            value: other.unwrap_or(&Value::Null).to_string(),
        })),
    }
}

impl CreateProductInput {
    pub fn validate(self) -> Result<NewProduct, ServiceError> {
        let product_type = parse_product_type(self.product_type.as_ref())?;
        Ok(NewProduct { name: self.name, price: self.price, product_type })
    }
}

impl CreateStoreInput {
    pub fn validate(self) -> Result<NewStore, ServiceError> {
        store::validate_city(&self.city)?;
        Ok(NewStore { name: self.name, city: self.city, address: self.address })
    }
}

impl UpdateProductInput {
    /// Merge the incoming fields over a snapshot of the persisted product.
    pub fn merge(&self, current: &product::Model) -> Result<product::Model, ServiceError> {
        // explicit null counts as absent
        let product_type = match &self.product_type {
            None | Some(Value::Null) => current.product_type,
            Some(raw) => parse_product_type(Some(raw))?,
        };
        Ok(product::Model {
            id: current.id,
            name: self.name.clone().unwrap_or_else(|| current.name.clone()),
            price: self.price.unwrap_or(current.price),
            product_type,
        })
    }
}

impl UpdateStoreInput {
    /// Merge the incoming fields over a snapshot of the persisted store.
    pub fn merge(&self, current: &store::Model) -> Result<store::Model, ServiceError> {
        if let Some(city) = self.city.as_deref() {
            store::validate_city(city)?;
        }
        Ok(store::Model {
            id: current.id,
            name: self.name.clone().unwrap_or_else(|| current.name.clone()),
            city: self.city.clone().unwrap_or_else(|| current.city.clone()),
            address: self.address.clone().unwrap_or_else(|| current.address.clone()),
        })
    }
}

/// A product together with the stores it is linked to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductWithStores {
    #[serde(flatten)]
    pub product: product::Model,
    pub stores: Vec<store::Model>,
}

impl ProductWithStores {
    pub fn store(&self, store_id: Uuid) -> Option<&store::Model> {
        self.stores.iter().find(|s| s.id == store_id)
    }

    pub fn has_store(&self, store_id: Uuid) -> bool { self.store(store_id).is_some() }

    pub fn store_ids(&self) -> Vec<Uuid> { self.stores.iter().map(|s| s.id).collect() }
}

/// A store together with the products it carries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreWithProducts {
    #[serde(flatten)]
    pub store: store::Model,
    pub products: Vec<product::Model>,
}

/// Drop repeated ids, keeping first-occurrence order.
pub fn unique_ids<I: IntoIterator<Item = Uuid>>(ids: I) -> Vec<Uuid> {
    let mut seen = HashSet::new();
    ids.into_iter().filter(|id| seen.insert(*id)).collect()
}
