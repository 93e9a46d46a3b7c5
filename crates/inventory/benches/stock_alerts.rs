use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use stockroom_core::ProductId;
use stockroom_inventory::{InMemorySnapshotStore, InventoryStore, Product, derive_stock_alerts};

fn products(n: usize) -> Vec<Product> {
    (0..n)
        .map(|i| {
            let id = ProductId::parse(&format!("P{i}")).unwrap();
            // Every third product sits at or below the threshold.
            let quantity = if i % 3 == 0 { (i % 5) as u64 } else { 50 };
            Product::new(id, format!("Product {i}"), quantity)
        })
        .collect()
}

fn bench_derive(c: &mut Criterion) {
    let mut group = c.benchmark_group("derive_stock_alerts");
    for size in [10usize, 100, 1_000] {
        let list = products(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &list, |b, list| {
            b.iter(|| derive_stock_alerts(black_box(list)))
        });
    }
    group.finish();
}

fn bench_upsert_merge(c: &mut Criterion) {
    c.bench_function("upsert_merge_100_products", |b| {
        let mut store = InventoryStore::open(InMemorySnapshotStore::new()).unwrap();
        for i in 0..100 {
            store.upsert("Item", &format!("I{i}"), "10").unwrap();
        }
        b.iter(|| store.upsert("Item", black_box("I99"), "1").unwrap())
    });
}

criterion_group!(benches, bench_derive, bench_upsert_merge);
criterion_main!(benches);
