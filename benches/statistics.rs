use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};

use tabular_records::processing::{descriptive_stats, filter_by_range};
use tabular_records::types::{DataSet, DataType, Field, Record, Schema, Value};
use tabular_records::vector::{angle, dot};

fn priced_dataset(rows: usize) -> DataSet {
    let schema = Schema::new(vec![
        Field::new("Name", DataType::Utf8),
        Field::new("Price", DataType::Float64),
    ]);
    let records = (0..rows)
        .map(|i| {
            let price = if i % 17 == 0 {
                Value::Absent
            } else {
                Value::Float64((i % 1_000) as f64 * 0.5)
            };
            Record::new(vec![Value::Utf8(format!("item-{i}")), price])
        })
        .collect();
    DataSet::new(schema, records)
}

fn bench_stats(c: &mut Criterion) {
    let ds = priced_dataset(100_000);
    c.bench_function("descriptive_stats_100k", |b| {
        b.iter(|| descriptive_stats(black_box(&ds), "Price").expect("stats"))
    });
    c.bench_function("filter_by_range_100k", |b| {
        b.iter(|| filter_by_range(black_box(&ds), "Price", 100.0, 250.0).expect("filter"))
    });

    let a: Vec<f64> = (0..10_000).map(|i| i as f64).collect();
    let v: Vec<f64> = (0..10_000).map(|i| (i % 7) as f64 - 3.0).collect();
    c.bench_function("dot_10k", |b| b.iter(|| dot(black_box(&a), black_box(&v)).expect("dot")));
    c.bench_function("angle_10k", |b| {
        b.iter(|| angle(black_box(&a), black_box(&v)).expect("angle"))
    });
}

criterion_group!(benches, bench_stats);
criterion_main!(benches);
