use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use path_enumeration::{enumerate_all_paths, AdjacencyGraph};

/// Complete DAG on `n` vertices (every i -> j with i < j): 2^(n-2) paths from 0 to n-1.
fn complete_dag(n: usize) -> AdjacencyGraph {
    let edges: Vec<(usize, usize)> = (0..n)
        .flat_map(|i| (i + 1..n).map(move |j| (i, j)))
        .collect();
    AdjacencyGraph::from_edges(n, &edges).unwrap()
}

fn bench_enumerate(c: &mut Criterion) {
    let mut group = c.benchmark_group("enumerate_all_paths");
    for n in [8, 12, 16] {
        let graph = complete_dag(n);
        group.bench_with_input(BenchmarkId::new("complete_dag", n), &graph, |b, g| {
            b.iter(|| black_box(enumerate_all_paths(g)))
        });
    }
    group.finish();
}

fn bench_structure(c: &mut Criterion) {
    let graph = complete_dag(256);
    c.bench_function("sources_and_sinks_256", |b| {
        b.iter(|| black_box((graph.source_vertices(), graph.sink_vertices())))
    });
}

criterion_group!(benches, bench_enumerate, bench_structure);
criterion_main!(benches);
