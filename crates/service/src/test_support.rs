#![cfg(test)]
use migration::MigratorTrait;
use models::db::{connect_with_config, DatabaseConfig};
use models::store;
use sea_orm::DatabaseConnection;
use tokio::sync::OnceCell;

use crate::catalog::Catalog;
use crate::domain::{CreateProductInput, CreateStoreInput};

// Ensure migrations run only once across the entire test process
static MIGRATED: OnceCell<bool> = OnceCell::const_new();

fn db_config() -> Option<DatabaseConfig> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return None;
    }
    let url = std::env::var("DATABASE_URL").ok()?;
    Some(DatabaseConfig { url, min_connections: 1, acquire_timeout_secs: 10, ..Default::default() })
}

/// Fresh Postgres connection with migrations applied, or `None` when DB tests are disabled.
pub async fn get_db() -> anyhow::Result<Option<DatabaseConnection>> {
    let Some(cfg) = db_config() else { return Ok(None) };
    let cfg_ref = &cfg;
    let migrated = *MIGRATED
        .get_or_init(|| async move {
            let Ok(db) = connect_with_config(cfg_ref).await else { return false };
            migration::Migrator::up(&db, None).await.is_ok()
        })
        .await;
    anyhow::ensure!(migrated, "migrations failed against DATABASE_URL");
    Ok(Some(connect_with_config(&cfg).await?))
}

pub fn catalog() -> Catalog {
    Catalog::memory()
}

pub fn milk() -> CreateProductInput {
    CreateProductInput { name: "Milk".into(), price: 2500.0, product_type: Some("PERISHABLE".into()) }
}

pub fn shop(name: &str) -> CreateStoreInput {
    CreateStoreInput { name: name.into(), city: "BOG".into(), address: "Main St".into() }
}

/// A memory catalog holding one product and `stores` unlinked stores.
pub async fn seeded(stores: usize) -> (Catalog, models::product::Model, Vec<store::Model>) {
    let c = catalog();
    let p = c.products.create(milk()).await.expect("seed product");
    let mut created = Vec::with_capacity(stores);
    for i in 0..stores {
        created.push(c.stores.create(shop(&format!("Shop{}", i + 1))).await.expect("seed store"));
    }
    (c, p, created)
}
