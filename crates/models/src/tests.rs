//! Postgres-backed model tests. Skipped unless `DATABASE_URL` is set and `SKIP_DB_TESTS` is not.
use anyhow::Result;
use migration::MigratorTrait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, ModelTrait, QueryFilter};

use crate::{db, product, product_store, store, ProductType};

async fn setup_test_db() -> Result<Option<DatabaseConnection>> {
    if std::env::var("SKIP_DB_TESTS").is_ok() || std::env::var("DATABASE_URL").is_err() {
        return Ok(None);
    }
    let db = db::connect().await?;
    migration::Migrator::up(&db, None).await?;
    Ok(Some(db))
}

#[tokio::test]
async fn product_store_links_and_cascade() -> Result<()> {
    let Some(db) = setup_test_db().await? else { return Ok(()) };

    let p = product::create(&db, "Milk", 2500.0, ProductType::Perishable).await?;
    let s1 = store::create(&db, "Shop1", "BOG", "Main St").await?;
    let s2 = store::create(&db, "Shop2", "MDE", "Second St").await?;

    product_store::replace_for_product(&db, p.id, &[s1.id, s2.id]).await?;
    let linked = p.find_related(store::Entity).all(&db).await?;
    assert_eq!(linked.len(), 2);

    let from_store = s1.find_related(product::Entity).all(&db).await?;
    assert!(from_store.iter().any(|x| x.id == p.id));

    product_store::replace_for_product(&db, p.id, &[s2.id]).await?;
    let linked = p.find_related(store::Entity).all(&db).await?;
    assert_eq!(linked.iter().map(|s| s.id).collect::<Vec<_>>(), vec![s2.id]);

    // deleting a store drops its edges
    store::Entity::delete_by_id(s2.id).exec(&db).await?;
    let edges = product_store::Entity::find()
        .filter(product_store::Column::ProductId.eq(p.id))
        .all(&db)
        .await?;
    assert!(edges.is_empty());

    product::Entity::delete_by_id(p.id).exec(&db).await?;
    store::Entity::delete_by_id(s1.id).exec(&db).await?;
    Ok(())
}

#[tokio::test]
async fn single_edge_link_and_unlink() -> Result<()> {
    let Some(db) = setup_test_db().await? else { return Ok(()) };

    let p = product::create(&db, "Bread", 1200.0, ProductType::Perishable).await?;
    let s1 = store::create(&db, "Shop1", "BOG", "Main St").await?;
    let s2 = store::create(&db, "Shop2", "MDE", "Second St").await?;

    assert!(product_store::link(&db, p.id, s1.id).await?);
    // second insert of the same edge is absorbed by the conflict clause
    assert!(!product_store::link(&db, p.id, s1.id).await?);
    assert!(product_store::link(&db, p.id, s2.id).await?);
    assert_eq!(p.find_related(store::Entity).all(&db).await?.len(), 2);

    assert!(product_store::unlink(&db, p.id, s1.id).await?);
    assert!(!product_store::unlink(&db, p.id, s1.id).await?);
    let linked = p.find_related(store::Entity).all(&db).await?;
    assert_eq!(linked.iter().map(|s| s.id).collect::<Vec<_>>(), vec![s2.id]);

    product::Entity::delete_by_id(p.id).exec(&db).await?;
    store::Entity::delete_by_id(s1.id).exec(&db).await?;
    store::Entity::delete_by_id(s2.id).exec(&db).await?;
    Ok(())
}

#[tokio::test]
async fn store_create_rejects_bad_city() -> Result<()> {
    let Some(db) = setup_test_db().await? else { return Ok(()) };
    let err = store::create(&db, "Shop", "BOGX", "Main St").await.unwrap_err();
    assert!(matches!(err, crate::errors::ModelError::InvalidCity { .. }));
    Ok(())
}
