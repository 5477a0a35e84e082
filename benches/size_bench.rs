// Size calculation benchmarks

use std::hint::black_box;

use cacheinfo::model::Target;
use cacheinfo::scanner::{Aggregator, ScanOptions, SizeCalculator};
use criterion::async_executor::AsyncExecutor;
use criterion::{Criterion, criterion_group, criterion_main};
use tokio::runtime::Runtime;

mod common;

struct TokioExecutor(Runtime);

impl AsyncExecutor for TokioExecutor {
    fn block_on<T>(&self, future: impl std::future::Future<Output = T>) -> T {
        self.0.block_on(future)
    }
}

fn bench_measure_tree(c: &mut Criterion) {
    let mut group = c.benchmark_group("measure_tree");
    group.sample_size(10);

    // ~2000 files across 100 directories
    let dir = common::create_bench_tree(100, 20, 256);

    for concurrency in [1, 16, 64] {
        group.bench_function(format!("2000_files_concurrency_{}", concurrency), |b| {
            let calc = SizeCalculator::new(ScanOptions { concurrency });
            b.to_async(TokioExecutor(Runtime::new().unwrap()))
                .iter(|| async { black_box(calc.measure(dir.path()).await.unwrap()) });
        });
    }

    group.finish();
}

fn bench_aggregate_targets(c: &mut Criterion) {
    let mut group = c.benchmark_group("aggregate_targets");
    group.sample_size(10);

    let trees: Vec<_> = (0..8).map(|_| common::create_bench_tree(20, 20, 128)).collect();

    group.bench_function("8_targets_400_files_each", |b| {
        b.to_async(TokioExecutor(Runtime::new().unwrap())).iter(|| async {
            let targets = trees
                .iter()
                .enumerate()
                .map(|(i, t)| Target::new(format!("t{}", i), t.path()).unwrap());
            let report = Aggregator::new(ScanOptions::default())
                .run(targets)
                .into_report()
                .await;
            black_box(report)
        });
    });

    group.finish();
}

criterion_group!(benches, bench_measure_tree, bench_aggregate_targets);
criterion_main!(benches);
