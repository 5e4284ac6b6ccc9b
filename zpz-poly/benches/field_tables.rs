use criterion::BenchmarkId;
use criterion::Criterion;
use criterion::criterion_group;
use criterion::criterion_main;
use zpz_poly::prelude::*;

criterion_main!(benches);
criterion_group!(
    name = benches;
    config = Criterion::default();
    targets = build_tables,
);

fn build_tables(c: &mut Criterion) {
    let mut group = c.benchmark_group("Building Arithmetic Tables");

    for modulus in [2, 7, 64, 97, P_MAX] {
        let id = BenchmarkId::new("build", modulus);
        group.bench_function(id, |b| b.iter(|| FieldTables::build(modulus)));
    }

    group.finish();
}
