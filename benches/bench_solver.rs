use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use xcolor::graph::ConstraintGraph;
use xcolor::solver::solve;

fn complete_graph(n: usize) -> ConstraintGraph {
    let mut graph = ConstraintGraph::new();
    for i in 0..n {
        for j in (i + 1)..n {
            graph.add_edge(i.to_string(), j.to_string()).unwrap();
        }
    }
    graph
}

fn cycle_graph(n: usize) -> ConstraintGraph {
    let mut graph = ConstraintGraph::new();
    for i in 0..n {
        graph
            .add_edge(i.to_string(), ((i + 1) % n).to_string())
            .unwrap();
    }
    graph
}

fn numbered_palette(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("c{}", i)).collect()
}

fn bench_complete_graphs(c: &mut Criterion) {
    let mut group = c.benchmark_group("solver/complete");
    for n in [4usize, 5, 6] {
        let graph = complete_graph(n);
        let colors = numbered_palette(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            b.iter(|| {
                let assignment = solve(&graph, &colors).unwrap();
                black_box(assignment);
            });
        });
    }
    group.finish();
}

fn bench_even_cycles(c: &mut Criterion) {
    let mut group = c.benchmark_group("solver/even_cycle_2_colors");
    let colors = numbered_palette(2);
    for n in [8usize, 16, 32] {
        let graph = cycle_graph(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            b.iter(|| {
                let assignment = solve(&graph, &colors).unwrap();
                black_box(assignment);
            });
        });
    }
    group.finish();
}

fn bench_demo_graph(c: &mut Criterion) {
    let graph = ConstraintGraph::from_edges([
        ("0", "1"),
        ("0", "2"),
        ("0", "3"),
        ("0", "4"),
        ("1", "2"),
        ("1", "3"),
        ("2", "3"),
        ("2", "4"),
        ("3", "4"),
    ])
    .unwrap();
    let colors = vec![
        "violet".to_string(),
        "coral".to_string(),
        "cyan".to_string(),
        "limegreen".to_string(),
    ];

    c.bench_function("solver/demo_graph_4_colors", |b| {
        b.iter(|| {
            let assignment = solve(&graph, &colors).unwrap();
            black_box(assignment);
        });
    });
}

criterion_group!(
    benches,
    bench_complete_graphs,
    bench_even_cycles,
    bench_demo_graph
);
criterion_main!(benches);
