use criterion::{black_box, criterion_group, criterion_main, Criterion};

use studydeck_core::distance::levenshtein;

fn bench_levenshtein(c: &mut Criterion) {
    let mut group = c.benchmark_group("levenshtein");

    group.bench_function("short", |b| {
        b.iter(|| levenshtein(black_box("kitten"), black_box("sitting")))
    });

    group.bench_function("reply_vs_dataset_entry", |b| {
        b.iter(|| levenshtein(black_box("absolutely"), black_box("absolutely not")))
    });

    let long_a = "the quick brown fox jumps over the lazy dog".repeat(4);
    let long_b = "the quick brown cat leaps over the lazy dog".repeat(4);
    group.bench_function("long", |b| {
        b.iter(|| levenshtein(black_box(&long_a), black_box(&long_b)))
    });

    group.finish();
}

criterion_group!(benches, bench_levenshtein);
criterion_main!(benches);
