//! Migrator registering catalog migrations in dependency order.
//! Indexes are applied last.
pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_product;
mod m20240101_000002_create_store;
mod m20240101_000003_create_product_store;
mod m20240101_000004_add_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_product::Migration),
            Box::new(m20240101_000002_create_store::Migration),
            // join table references both sides
            Box::new(m20240101_000003_create_product_store::Migration),
            Box::new(m20240101_000004_add_indexes::Migration),
        ]
    }
}
