use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use graphdot::{export_dot, export_json, sanitize_label, Graph, Record};

fn build_chain(size: usize) -> Graph {
    let mut graph = Graph::new();

    for i in 0..size {
        graph.add_node(
            format!("node_{i}"),
            Record::new()
                .with("name", format!("func_{i}"))
                .with("line", i as i64),
        );
        if i > 0 {
            graph.add_edge(
                format!("node_{}", i - 1),
                format!("node_{i}"),
                Record::new().with("kind", "calls"),
            );
        }
    }

    graph
}

fn bench_export_dot(c: &mut Criterion) {
    let mut group = c.benchmark_group("export_dot");

    for size in [100, 1000, 10_000].iter() {
        let graph = build_chain(*size);

        group.bench_with_input(BenchmarkId::new("chain", size), size, |b, _| {
            b.iter(|| {
                black_box(export_dot(&graph).unwrap());
            });
        });
    }

    group.finish();
}

fn bench_export_json(c: &mut Criterion) {
    let mut group = c.benchmark_group("export_json");

    for size in [100, 1000].iter() {
        let graph = build_chain(*size);

        group.bench_with_input(BenchmarkId::new("chain", size), size, |b, _| {
            b.iter(|| {
                black_box(export_json(&graph).unwrap());
            });
        });
    }

    group.finish();
}

fn bench_sanitize_label(c: &mut Criterion) {
    let mut group = c.benchmark_group("sanitize_label");

    let multiline = "some label line\n".repeat(50);
    group.bench_function("multiline_50", |b| {
        b.iter(|| {
            black_box(sanitize_label(&multiline));
        });
    });

    let plain = "plain label without breaks".repeat(50);
    group.bench_function("plain", |b| {
        b.iter(|| {
            black_box(sanitize_label(&plain));
        });
    });

    group.finish();
}

criterion_group!(benches, bench_export_dot, bench_export_json, bench_sanitize_label);
criterion_main!(benches);
