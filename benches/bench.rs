use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tuple_zip::prelude::*;
use tuple_zip::Tuple;

fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("tuple 10", |b| b.iter(|| tuple_test(black_box(10))));
    c.bench_function("tuple 100", |b| b.iter(|| tuple_test(black_box(100))));
    c.bench_function("tuple 1000", |b| b.iter(|| tuple_test(black_box(1000))));

    c.bench_function("zip 10", |b| b.iter(|| zip_test(black_box(10))));
    c.bench_function("zip 100", |b| b.iter(|| zip_test(black_box(100))));
    c.bench_function("zip 1000", |b| b.iter(|| zip_test(black_box(1000))));
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);

fn values(max: usize) -> Vec<u32> {
    let mut rng = StdRng::seed_from_u64(42);
    (0..max).map(|_| rng.gen_range(0..max as u32)).collect()
}

/// Build a tuple, hash it, and look every value up.
pub(crate) fn tuple_test(max: usize) {
    let items = values(max);
    let t = Tuple::from(items.clone());
    black_box(t.hash_code());
    for item in &items {
        assert!(t.contains(item));
    }
}

/// Zip four sequences of `max` items.
pub(crate) fn zip_test(max: usize) {
    let sources: Vec<_> = (0..4).map(|_| values(max)).collect();
    let mut counter = 0;
    for t in sources.zip() {
        counter += t.len();
    }
    assert_eq!(counter, 4 * max);
}
