use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // ProductStore: reverse lookup (store -> products); the PK already covers product_id
        manager
            .create_index(
                Index::create()
                    .name("idx_product_store_store")
                    .table(ProductStore::Table)
                    .col(ProductStore::StoreId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_product_store_store").table(ProductStore::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum ProductStore { Table, StoreId }
