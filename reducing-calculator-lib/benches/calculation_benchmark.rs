use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use reducing_calculator::interpreter::calculate;

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("calculate");
    let expressions = [
        "1+2".to_string(),
        "1+2*3+4/2-5".to_string(),
        "(1+2)*(3+4)".to_string(),
        "2*(3+(4-(1+1)))/-0.5".to_string(),
        "((((((1.5+2.25)*3)-4)/5)+6)*7)-8*9/10+11".to_string(),
    ];
    for expression in expressions {
        group.throughput(Throughput::Elements(expression.len() as u64));

        group.bench_with_input(
            BenchmarkId::from_parameter(&expression),
            &expression,
            |bencher, expression| {
                bencher.iter(|| calculate(expression));
            },
        );
    }
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
