use std::fmt;
use std::str::FromStr;

use sea_orm::{entity::prelude::*, ConnectionTrait, Set};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{errors::ModelError, product_store, store};

/// Enumerated product kind, stored as its SCREAMING_SNAKE_CASE name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(32))")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProductType {
    #[sea_orm(string_value = "PERISHABLE")]
    Perishable,
    #[sea_orm(string_value = "NON_PERISHABLE")]
    NonPerishable,
}

impl ProductType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductType::Perishable => "PERISHABLE",
            ProductType::NonPerishable => "NON_PERISHABLE",
        }
    }

    /// Exact, case-sensitive match against the enumerated names.
    pub fn parse(value: &str) -> Result<Self, ModelError> {
        match value {
            "PERISHABLE" => Ok(ProductType::Perishable),
            "NON_PERISHABLE" => Ok(ProductType::NonPerishable),
            other => Err(ModelError::InvalidProductType { value: other.to_string() }),
        }
    }
}

impl fmt::Display for ProductType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.as_str()) }
}

impl FromStr for ProductType {
    type Err = ModelError;
    fn from_str(s: &str) -> Result<Self, Self::Err> { Self::parse(s) }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "product")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub price: f64,
    #[serde(rename = "type")]
    pub product_type: ProductType,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { ProductStore }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::ProductStore => Entity::has_many(product_store::Entity).into(),
        }
    }
}

impl Related<product_store::Entity> for Entity {
    fn to() -> RelationDef { Relation::ProductStore.def() }
}

impl Related<store::Entity> for Entity {
    fn to() -> RelationDef { product_store::Relation::Store.def() }
    fn via() -> Option<RelationDef> { Some(product_store::Relation::Product.def().rev()) }
}

impl ActiveModelBehavior for ActiveModel {}

pub async fn create<C: ConnectionTrait>(
    db: &C,
    name: &str,
    price: f64,
    product_type: ProductType,
) -> Result<Model, ModelError> {
    let am = ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(name.to_string()),
        price: Set(price),
        product_type: Set(product_type),
    };
    Ok(am.insert(db).await?)
}

/// Overwrite every column of an existing row with `model`.
pub async fn save<C: ConnectionTrait>(db: &C, model: Model) -> Result<Model, ModelError> {
    let am = ActiveModel {
        id: Set(model.id),
        name: Set(model.name),
        price: Set(model.price),
        product_type: Set(model.product_type),
    };
    Ok(am.update(db).await?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_enumerated_types() {
        assert_eq!(ProductType::parse("PERISHABLE").unwrap(), ProductType::Perishable);
        assert_eq!("NON_PERISHABLE".parse::<ProductType>().unwrap(), ProductType::NonPerishable);
    }

    #[test]
    fn rejects_unknown_or_miscased_types() {
        for bad in ["", "perishable", "FROZEN", "NON-PERISHABLE"] {
            let err = ProductType::parse(bad).unwrap_err();
            assert!(matches!(err, ModelError::InvalidProductType { .. }), "{bad}");
        }
    }

    #[test]
    fn serializes_type_under_type_key() {
        let m = Model { id: Uuid::nil(), name: "Milk".into(), price: 2500.0, product_type: ProductType::Perishable };
        let v = serde_json::to_value(&m).unwrap();
        assert_eq!(v["type"], "PERISHABLE");
        assert!(v.get("product_type").is_none());
    }
}
