use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use sqlgen::{Builder, Condition, Query, SortOrder, ident};

/// An AND group of `n` equality comparisons: col0=$1 AND col1=$2 AND ...
fn wide_condition(n: usize) -> Condition {
    Condition::and(
        (0..n)
            .map(|i| Condition::eq(ident(format!("col{i}")), i as i64))
            .collect(),
    )
}

/// A SELECT with a join, `n` WHERE comparisons, grouping, and ordering.
fn wide_query(n: usize) -> Query {
    Query::new("orders")
        .join("users", Condition::eq(ident("users.id"), ident("orders.user_id")))
        .and_where(wide_condition(n))
        .group(&["users.id"])
        .and_having(Condition::gt(ident("total"), 100))
        .order([SortOrder::desc("created_at")])
        .limit(50)
}

fn bench_condition(c: &mut Criterion) {
    let mut group = c.benchmark_group("builder/condition");

    for n in [1, 5, 10, 50] {
        let cond = wide_condition(n);
        let builder = Builder::new("$", true);
        group.bench_with_input(BenchmarkId::from_parameter(n), &cond, |b, cond| {
            b.iter(|| black_box(builder.condition(cond)));
        });
    }

    group.finish();
}

fn bench_find(c: &mut Criterion) {
    let mut group = c.benchmark_group("builder/find");

    for n in [1, 5, 10, 50] {
        let query = wide_query(n);
        let anonymous = Builder::new("?", false);
        let ordinal = Builder::new("$", true);
        group.bench_with_input(BenchmarkId::new("anonymous", n), &query, |b, query| {
            b.iter(|| black_box(anonymous.find(query)));
        });
        group.bench_with_input(BenchmarkId::new("ordinal", n), &query, |b, query| {
            b.iter(|| black_box(ordinal.find(query)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_condition, bench_find);
criterion_main!(benches);
