use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use recset::{mix_u64, IdSet, KeyRng};

fn key_stream(start: u64, count: usize) -> Vec<i64> {
    (start..start + count as u64)
        .map(|c| mix_u64(c) as i64)
        .collect()
}

fn bench_insert_performance(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert_performance");
    group.sample_size(10);

    for count in [100_000usize, 1_000_000].iter() {
        group.bench_with_input(
            BenchmarkId::new("clear_refill", count),
            count,
            |b, &count| {
                let keys = key_stream(1, count);
                let mut set = IdSet::new();
                b.iter(|| {
                    set.clear();
                    for &id in &keys {
                        black_box(set.put(id));
                    }
                });
            },
        );
    }
    group.finish();
}

fn bench_lookup_performance(c: &mut Criterion) {
    let mut group = c.benchmark_group("lookup_performance");

    for count in [100_000usize, 1_000_000].iter() {
        let keys = key_stream(1, *count);
        let mut set = IdSet::new();
        for &id in &keys {
            set.put(id);
        }

        group.bench_with_input(BenchmarkId::new("hit", count), count, |b, _| {
            let mut rng = KeyRng::new(123);
            b.iter(|| {
                let id = keys[rng.below(keys.len() as u64) as usize];
                black_box(set.contains(black_box(id)))
            });
        });

        group.bench_with_input(BenchmarkId::new("miss", count), count, |b, _| {
            // Random 64-bit probes: overlap with the inserted stream is
            // vanishingly unlikely, so this measures the miss path.
            let mut rng = KeyRng::new(456);
            b.iter(|| black_box(set.contains(black_box(rng.next_i64()))));
        });
    }
    group.finish();
}

fn bench_duplicate_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("duplicate_insert");

    let keys = key_stream(1, 1_000_000);
    let mut set = IdSet::new();
    for &id in &keys {
        set.put(id);
    }

    group.bench_function("put_existing", |b| {
        let mut rng = KeyRng::new(789);
        b.iter(|| {
            let id = keys[rng.below(keys.len() as u64) as usize];
            black_box(set.put(black_box(id)))
        });
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_insert_performance,
    bench_lookup_performance,
    bench_duplicate_insert
);
criterion_main!(benches);
