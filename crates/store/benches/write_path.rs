use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use chrono::Utc;
use corral_core::{CustomerId, SaleId, StockItemId, SupplierId};
use corral_parties::OperatorRef;
use corral_store::{CreateSale, Store};
use corral_trading::LineInput;

fn seeded_store(items: usize) -> (Store, CustomerId, Vec<StockItemId>) {
    let store = Store::new();
    let customer_id = CustomerId::new();
    store.create_customer(customer_id, "Tienda Sol").unwrap();
    store
        .create_supplier(SupplierId::new(), "Avicola Norte")
        .unwrap();

    let item_ids: Vec<StockItemId> = (0..items)
        .map(|i| {
            let id = StockItemId::new();
            store
                .create_stock_item(id, &format!("Grade {i}"), i64::MAX / 2)
                .unwrap();
            id
        })
        .collect();
    (store, customer_id, item_ids)
}

fn sale_with_lines(customer_id: CustomerId, item_ids: &[StockItemId]) -> CreateSale {
    CreateSale {
        sale_id: SaleId::new(),
        customer_id,
        operator: OperatorRef {
            id: corral_core::OperatorId::new(),
            username: "bench".to_string(),
        },
        occurred_at: Utc::now(),
        lines: item_ids
            .iter()
            .map(|&stock_item_id| LineInput {
                stock_item_id,
                quantity: 2,
                unit_price: 250,
                delete: false,
            })
            .collect(),
    }
}

/// Cost of one aggregate write as the line count grows. The clone-stage-swap
/// transaction copies the whole state, so this is the number to watch.
fn bench_create_sale(c: &mut Criterion) {
    let mut group = c.benchmark_group("create_sale");
    for lines in [1usize, 4, 16] {
        group.throughput(Throughput::Elements(lines as u64));
        group.bench_with_input(BenchmarkId::from_parameter(lines), &lines, |b, &lines| {
            let (store, customer_id, item_ids) = seeded_store(lines);
            b.iter(|| {
                let cmd = sale_with_lines(customer_id, &item_ids);
                black_box(store.create_sale(cmd).unwrap());
            });
        });
    }
    group.finish();
}

/// Balance derivation over a ledger that grows with every committed write.
fn bench_current_balance(c: &mut Criterion) {
    let (store, customer_id, item_ids) = seeded_store(1);
    for _ in 0..1_000 {
        store
            .create_sale(sale_with_lines(customer_id, &item_ids))
            .unwrap();
    }
    c.bench_function("current_balance_1k_entries", |b| {
        b.iter(|| black_box(store.current_balance().unwrap()));
    });
}

criterion_group!(benches, bench_create_sale, bench_current_balance);
criterion_main!(benches);
