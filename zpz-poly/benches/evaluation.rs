use criterion::BenchmarkId;
use criterion::Criterion;
use criterion::Throughput;
use criterion::criterion_group;
use criterion::criterion_main;
use zpz_poly::math::other::random_polynomial;
use zpz_poly::prelude::*;

criterion_main!(benches);
criterion_group!(
    name = benches;
    config = Criterion::default();
    targets = evaluation<{ 1 << 10 }>,
              evaluation<{ 1 << 14 }>,
              self_check,
);

fn evaluation<const SIZE: usize>(c: &mut Criterion) {
    let log2_of_size = SIZE.ilog2();
    let mut group = c.benchmark_group(format!("Evaluations in 2^{log2_of_size} Points"));
    group.throughput(Throughput::Elements(u64::try_from(SIZE).unwrap()));

    let tables = FieldTables::build(97).unwrap();
    let poly = random_polynomial(&tables, N_MAX);
    let eval_points = (0..SIZE as i64).collect::<Vec<_>>();

    group.bench_with_input(
        BenchmarkId::new("Sequential evaluate", log2_of_size),
        &log2_of_size,
        |b, _| b.iter(|| poly.batch_evaluate(&tables, &eval_points)),
    );

    group.bench_with_input(
        BenchmarkId::new("Parallel evaluate", log2_of_size),
        &log2_of_size,
        |b, _| b.iter(|| poly.par_batch_evaluate(&tables, &eval_points)),
    );

    group.finish();
}

fn self_check(c: &mut Criterion) {
    let mut group = c.benchmark_group("Self-Check by Evaluation");

    for modulus in [7, P_MAX] {
        let tables = FieldTables::build(modulus).unwrap();
        let a = random_polynomial(&tables, 200);
        let b = random_polynomial(&tables, 100);
        let results = ArithmeticResults::compute(&tables, &a, &b, 3);

        let id = BenchmarkId::new("Sequential", modulus);
        group.bench_function(id, |bencher| {
            bencher.iter(|| results.check_by_evaluation(&tables))
        });

        let id = BenchmarkId::new("Parallel", modulus);
        group.bench_function(id, |bencher| {
            bencher.iter(|| results.par_check_by_evaluation(&tables))
        });
    }

    group.finish();
}
