use sea_orm::{entity::prelude::*, ConnectionTrait, Set};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{errors::ModelError, product, product_store};

/// Number of characters in a city code.
pub const CITY_CODE_LEN: usize = 3;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "store")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub city: String,
    pub address: String,
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

impl Related<product::Entity> for Entity {
    fn to() -> RelationDef { product_store::Relation::Product.def() }
    fn via() -> Option<RelationDef> { Some(product_store::Relation::Store.def().rev()) }
}

impl ActiveModelBehavior for ActiveModel {}

/// City must be a code of exactly three characters.
pub fn validate_city(city: &str) -> Result<(), ModelError> {
    if city.chars().count() != CITY_CODE_LEN {
        return Err(ModelError::InvalidCity { value: city.to_string() });
    }
    Ok(())
}

pub async fn create<C: ConnectionTrait>(db: &C, name: &str, city: &str, address: &str) -> Result<Model, ModelError> {
    validate_city(city)?;
    let am = ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(name.to_string()),
        city: Set(city.to_string()),
        address: Set(address.to_string()),
    };
    Ok(am.insert(db).await?)
}

/// Overwrite every column of an existing row with `model`.
pub async fn save<C: ConnectionTrait>(db: &C, model: Model) -> Result<Model, ModelError> {
    validate_city(&model.city)?;
    let am = ActiveModel {
        id: Set(model.id),
        name: Set(model.name),
        city: Set(model.city),
        address: Set(model.address),
    };
    Ok(am.update(db).await?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn city_must_have_three_chars() {
        assert!(validate_city("BOG").is_ok());
        assert!(validate_city("MDE").is_ok());
        for bad in ["", "BO", "BOGX", "  BOG"] {
            assert!(validate_city(bad).is_err(), "{bad:?}");
        }
    }

    #[test]
    fn city_counts_characters_not_bytes() {
        assert!(validate_city("ÑÚÑ").is_ok());
    }

    #[test]
    fn invalid_city_message_mentions_city() {
        let err = validate_city("BOGX").unwrap_err();
        assert!(err.to_string().contains("city"));
    }
}
