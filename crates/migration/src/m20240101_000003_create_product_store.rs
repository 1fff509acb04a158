//! Create `product_store` join table.
//!
//! One row per (product, store) edge. Both foreign keys cascade so deleting either
//! side drops its edges.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ProductStore::Table)
                    .if_not_exists()
                    .col(uuid(ProductStore::ProductId).not_null())
                    .col(uuid(ProductStore::StoreId).not_null())
                    .primary_key(
                        Index::create()
                            .name("pk_product_store")
                            .col(ProductStore::ProductId)
                            .col(ProductStore::StoreId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_product_store_product")
                            .from(ProductStore::Table, ProductStore::ProductId)
                            .to(Product::Table, Product::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_product_store_store")
                            .from(ProductStore::Table, ProductStore::StoreId)
                            .to(Store::Table, Store::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(ProductStore::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum ProductStore { Table, ProductId, StoreId }

#[derive(DeriveIden)]
enum Product { Table, Id }

#[derive(DeriveIden)]
enum Store { Table, Id }
