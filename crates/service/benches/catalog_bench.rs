use criterion::{criterion_group, criterion_main, Criterion};

use service::domain::{CreateProductInput, CreateStoreInput};
use service::Catalog;

fn bench_link_set(c: &mut Criterion) {
    let catalog = Catalog::memory();
    let rt = tokio::runtime::Runtime::new().unwrap();

    // seed outside of the measured loop
    let (product, store_ids) = rt.block_on(async {
        let p = catalog
            .products
            .create(CreateProductInput { name: "Milk".into(), price: 2500.0, product_type: Some("PERISHABLE".into()) })
            .await
            .unwrap();
        let mut ids = Vec::new();
        for i in 0..16 {
            let s = catalog
                .stores
                .create(CreateStoreInput { name: format!("Shop{i}"), city: "BOG".into(), address: "Main St".into() })
                .await
                .unwrap();
            ids.push(s.id);
        }
        (p, ids)
    });

    c.bench_function("update_stores_from_product_16", |b| {
        b.iter(|| {
            rt.block_on(catalog.links.update_stores_from_product(product.id, &store_ids)).unwrap();
        });
    });

    c.bench_function("find_store_from_product", |b| {
        let last = store_ids[store_ids.len() - 1];
        b.iter(|| {
            rt.block_on(catalog.links.find_store_from_product(product.id, last)).unwrap();
        });
    });
}

criterion_group!(benches, bench_link_set);
criterion_main!(benches);
