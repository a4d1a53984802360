use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use kvstream_core::{Pair, pair};
use std::collections::HashSet;

fn string_records(n: usize) -> Vec<Pair<Option<String>, String>> {
    (0..n)
        .map(|i| {
            // Every tenth record has no key, as with unkeyed topic messages.
            let key = (i % 10 != 0).then(|| format!("key-{i}"));
            pair(key, format!("value-{i}"))
        })
        .collect()
}

/// Construction cost for owned string pairs.
fn bench_construction(c: &mut Criterion) {
    c.bench_function("pair_construction", |b| {
        b.iter(|| pair(black_box(String::from("key")), black_box(String::from("value"))));
    });
}

/// Equality on equal, key-mismatched and absent-key pairs.
fn bench_equality(c: &mut Criterion) {
    let mut group = c.benchmark_group("pair_equality");

    let a = pair(Some(String::from("key")), String::from("value"));
    let same = a.clone();
    let other_key = pair(Some(String::from("other")), String::from("value"));
    let absent = pair(None::<String>, String::from("value"));

    group.bench_function("equal", |b| b.iter(|| black_box(&a) == black_box(&same)));
    group.bench_function("key_mismatch", |b| {
        b.iter(|| black_box(&a) == black_box(&other_key))
    });
    group.bench_function("absent_key", |b| {
        b.iter(|| black_box(&absent) == black_box(&absent))
    });

    group.finish();
}

/// Hashing throughput, and deduplicating a batch through a `HashSet`.
fn bench_hashing(c: &mut Criterion) {
    let mut group = c.benchmark_group("pair_hashing");

    for size in [100usize, 1_000, 10_000] {
        let records = string_records(size);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("hash_code", size), &records, |b, records| {
            b.iter(|| {
                records
                    .iter()
                    .fold(0u64, |acc, r| acc ^ black_box(r).hash_code())
            });
        });

        group.bench_with_input(BenchmarkId::new("dedupe", size), &records, |b, records| {
            b.iter(|| {
                let set: HashSet<_> = records.iter().map(Pair::as_ref).collect();
                black_box(set.len())
            });
        });
    }

    group.finish();
}

/// `Display` rendering, including the `null` path.
fn bench_rendering(c: &mut Criterion) {
    let mut group = c.benchmark_group("pair_rendering");

    let keyed = pair(Some(42u64), "value");
    let unkeyed = pair(None::<u64>, "value");

    group.bench_function("keyed", |b| b.iter(|| black_box(&keyed).to_string()));
    group.bench_function("unkeyed", |b| b.iter(|| black_box(&unkeyed).to_string()));

    group.finish();
}

criterion_group!(
    benches,
    bench_construction,
    bench_equality,
    bench_hashing,
    bench_rendering
);
criterion_main!(benches);
