use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use duosql::{MySql, SelectBuilder, mysql};

/// Build a SELECT with `n` columns and `n` WHERE conditions:
/// SELECT col0, col1, ... FROM t WHERE col0 = 0 AND col1 = 1 ...
fn build_select(n: usize) -> SelectBuilder<MySql> {
    let mut qb = mysql().from("t");
    for i in 0..n {
        let col = format!("col{i}");
        qb = qb.select(&[col.as_str()]);
        qb = qb.where_eq(&[(col.as_str(), i.to_string().as_str())]);
    }
    qb
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("select_builder/build");

    for n in [1, 5, 10, 50, 100] {
        let qb = build_select(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &qb, |b, qb| {
            b.iter(|| black_box(qb.build().unwrap()));
        });
    }

    group.finish();
}

fn bench_chain_and_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("select_builder/chain_and_build");

    for n in [1, 5, 10, 50, 100] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| {
                let qb = build_select(n);
                black_box(qb.build().unwrap());
            });
        });
    }

    group.finish();
}

fn bench_placeholder_substitution(c: &mut Criterion) {
    let mut group = c.benchmark_group("select_builder/placeholder_substitution");

    for n in [5, 20, 100] {
        let mut qb = mysql().from("t");
        for i in 0..n {
            let col = format!("col{i}");
            let token = format!("?p{i}");
            qb = qb
                .where_placeholder(&[(col.as_str(), token.as_str())])
                .set_value(&token, i as i64);
        }
        group.bench_with_input(BenchmarkId::from_parameter(n), &qb, |b, qb| {
            b.iter(|| black_box(qb.build().unwrap()));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_build,
    bench_chain_and_build,
    bench_placeholder_substitution
);
criterion_main!(benches);
