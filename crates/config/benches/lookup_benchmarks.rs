//! Benchmarks for dotted-path lookups.
//!
//! Compares memoized `ConfigStore::get` against raw traversal on a
//! moderately deep document.

use std::hint::black_box;

use confkit_config::{ConfigStore, ConfigValue, Delimiter, Mapping, lookup};
use criterion::{Criterion, criterion_group, criterion_main};

fn generate_document(width: usize, depth: usize) -> Mapping {
    fn level(width: usize, depth: usize) -> ConfigValue {
        if depth == 0 {
            return ConfigValue::Sequence((0..width as i64).map(ConfigValue::from).collect());
        }
        ConfigValue::Mapping(
            (0..width)
                .map(|i| (format!("key{i}"), level(width, depth - 1)))
                .collect(),
        )
    }

    match level(width, depth) {
        ConfigValue::Mapping(map) => map,
        _ => Mapping::new(),
    }
}

fn bench_lookups(c: &mut Criterion) {
    let data = generate_document(8, 4);
    let key = "key7.key3.key5.key1.6";
    let config = ConfigStore::from_mapping(data.clone());
    config.get(key);

    c.bench_function("store_get_cached", |b| {
        b.iter(|| config.get(black_box(key)))
    });

    c.bench_function("lookup_uncached", |b| {
        b.iter(|| lookup(&data, black_box(key), Delimiter::default()).cloned())
    });

    c.bench_function("store_get_miss", |b| {
        b.iter(|| config.get_or(black_box("key7.key3.missing"), ConfigValue::Null))
    });
}

criterion_group!(benches, bench_lookups);
criterion_main!(benches);
