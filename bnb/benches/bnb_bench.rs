use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};

use bnb::config::{BnBConfig, BoundConfig, SearchMode};
use bnb::opt::BnBOptimizer;

use crate::util::{N_RANDOM_ITEMS, hiking_instance, random_instance};

mod util;

criterion_main!(benches);
criterion_group!(benches, hiking_bench, random_bench);

fn configs() -> [(&'static str, BnBConfig); 4] {
    let with = |bound, search| BnBConfig {
        bound,
        search,
        ..BnBConfig::default()
    };
    [
        ("no_bound", with(BoundConfig::None, SearchMode::Sequential)),
        ("trivial", with(BoundConfig::Trivial, SearchMode::Sequential)),
        ("lp", with(BoundConfig::LinearRelaxation, SearchMode::Sequential)),
        (
            "lp_parallel",
            with(BoundConfig::LinearRelaxation, SearchMode::Parallel { split_depth: 3 }),
        ),
    ]
}

fn hiking_bench(c: &mut Criterion) {
    let instance = hiking_instance();
    let mut group = c.benchmark_group("hiking");
    for (name, config) in configs() {
        let mut optimizer = BnBOptimizer::new(instance.clone(), config);
        group.bench_function(BenchmarkId::from_parameter(name), |b| {
            b.iter(|| optimizer.solve())
        });
    }
    group.finish();
}

fn random_bench(c: &mut Criterion) {
    let instance = random_instance(N_RANDOM_ITEMS, 0);
    let mut group = c.benchmark_group(format!("random_{N_RANDOM_ITEMS}"));
    group.sample_size(10);
    for (name, config) in configs() {
        let mut optimizer = BnBOptimizer::new(instance.clone(), config);
        group.bench_function(BenchmarkId::from_parameter(name), |b| {
            b.iter(|| optimizer.solve())
        });
    }
    group.finish();
}
