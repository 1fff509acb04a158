//! Join entity for the product <-> store many-to-many relation.
use sea_orm::{entity::prelude::*, sea_query::OnConflict, ConnectionTrait, QueryFilter, Set};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{errors::ModelError, product, store};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "product_store")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub product_id: Uuid,
    #[sea_orm(primary_key, auto_increment = false)]
    pub store_id: Uuid,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Product, Store }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Product => Entity::belongs_to(product::Entity)
                .from(Column::ProductId)
                .to(product::Column::Id)
                .into(),
            Relation::Store => Entity::belongs_to(store::Entity)
                .from(Column::StoreId)
                .to(store::Column::Id)
                .into(),
        }
    }
}

impl Related<product::Entity> for Entity {
    fn to() -> RelationDef { Relation::Product.def() }
}

impl Related<store::Entity> for Entity {
    fn to() -> RelationDef { Relation::Store.def() }
}

impl ActiveModelBehavior for ActiveModel {}

/// Replace every edge of `product_id` with one edge per id in `store_ids`.
///
/// Callers pass de-duplicated ids; run inside a transaction to make the swap atomic.
pub async fn replace_for_product<C: ConnectionTrait>(
    db: &C,
    product_id: Uuid,
    store_ids: &[Uuid],
) -> Result<(), ModelError> {
    Entity::delete_many()
        .filter(Column::ProductId.eq(product_id))
        .exec(db)
        .await?;
    if store_ids.is_empty() {
        return Ok(());
    }
    let rows = store_ids.iter().map(|sid| ActiveModel {
        product_id: Set(product_id),
        store_id: Set(*sid),
    });
    Entity::insert_many(rows).exec_without_returning(db).await?;
    Ok(())
}

/// Insert one edge; an existing edge is left as is. Returns whether a row was written.
pub async fn link<C: ConnectionTrait>(db: &C, product_id: Uuid, store_id: Uuid) -> Result<bool, ModelError> {
    let row = ActiveModel { product_id: Set(product_id), store_id: Set(store_id) };
    let inserted = Entity::insert(row)
        .on_conflict(
            OnConflict::columns([Column::ProductId, Column::StoreId])
                .do_nothing()
                .to_owned(),
        )
        .exec_without_returning(db)
        .await?;
    Ok(inserted > 0)
}

/// Delete one edge. Returns whether it existed.
pub async fn unlink<C: ConnectionTrait>(db: &C, product_id: Uuid, store_id: Uuid) -> Result<bool, ModelError> {
    let res = Entity::delete_many()
        .filter(Column::ProductId.eq(product_id))
        .filter(Column::StoreId.eq(store_id))
        .exec(db)
        .await?;
    Ok(res.rows_affected > 0)
}
