//! Benchmark for traversals vs equivalent iterator pipelines.
//!
//! Compares reading and updating through composed traversals against the
//! hand-written loops they replace.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use traverso::optics::Traversal;
use traverso::text::{Text, groups_of, lines, title_case, words};

fn rows() -> Traversal<Vec<Vec<u64>>, u64> {
    Traversal::identity()
        .flat_map(|rows: &mut Vec<Vec<u64>>| rows)
        .flat_map(|row: &mut Vec<u64>| row)
}

fn table(size: u64) -> Vec<Vec<u64>> {
    (0..size).map(|row| (0..16).map(|cell| row * 16 + cell).collect()).collect()
}

fn csv(size: usize) -> Text {
    let mut text = Text::from("id,name");
    for row in 0..size {
        text.push_str(&format!("\n{row},first{row} last{row}"));
    }
    text
}

// =============================================================================
// Read Benchmark
// =============================================================================

fn benchmark_fold(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("fold");

    for size in [100, 1000, 10000] {
        group.bench_with_input(BenchmarkId::new("Traversal", size), &size, |bencher, &size| {
            let mut root = table(size);
            let traversal = rows().filter(|cell| cell % 3 == 0);
            bencher.iter(|| black_box(traversal.fold(&mut root, 0_u64, |sum, cell| sum + cell)));
        });

        group.bench_with_input(BenchmarkId::new("Iterator", size), &size, |bencher, &size| {
            let root = table(size);
            bencher.iter(|| {
                black_box(
                    root.iter()
                        .flatten()
                        .filter(|cell| *cell % 3 == 0)
                        .sum::<u64>(),
                )
            });
        });
    }

    group.finish();
}

// =============================================================================
// Update Benchmark
// =============================================================================

fn benchmark_indexed_update(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("indexed_update");

    for size in [100, 1000, 10000] {
        group.bench_with_input(BenchmarkId::new("Traversal", size), &size, |bencher, &size| {
            let mut root = table(size);
            let traversal = rows().only_at_where(|index| index % 2 == 0);
            bencher.iter(|| traversal.traverse(&mut root, |cell| *cell = cell.wrapping_add(1)));
        });

        group.bench_with_input(BenchmarkId::new("Loop", size), &size, |bencher, &size| {
            let mut root = table(size);
            bencher.iter(|| {
                for (index, cell) in root.iter_mut().flatten().enumerate() {
                    if index % 2 == 0 {
                        *cell = cell.wrapping_add(1);
                    }
                }
            });
        });
    }

    group.finish();
}

// =============================================================================
// Text Benchmark
// =============================================================================

fn benchmark_csv_title_case(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("csv_title_case");
    let name_words = lines()
        .except_at(0)
        .compose(&groups_of(",").only_at(1))
        .compose(&words());

    for size in [10, 100, 1000] {
        group.bench_with_input(BenchmarkId::new("Traversal", size), &size, |bencher, &size| {
            let text = csv(size);
            bencher.iter(|| {
                let mut text = text.clone();
                name_words.traverse(&mut text, |word| {
                    word.map_at(0, title_case);
                });
                black_box(text)
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_fold,
    benchmark_indexed_update,
    benchmark_csv_title_case
);
criterion_main!(benches);
