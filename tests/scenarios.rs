use path_enumeration::{
    enumerate_all_paths, load_graph_from_file, parse_graph, AdjacencyGraph, LoadError,
};

fn as_vecs(graph: &AdjacencyGraph) -> Vec<Vec<usize>> {
    enumerate_all_paths(graph)
        .into_iter()
        .map(|p| p.into_vertices())
        .collect()
}

#[test]
fn chain_of_three() {
    let graph = parse_graph("3\n0 1 0\n0 0 1\n0 0 0\n", "chain").unwrap();
    assert_eq!(graph.source_vertices(), vec![0]);
    assert_eq!(graph.sink_vertices(), vec![2]);
    assert_eq!(as_vecs(&graph), vec![vec![0, 1, 2]]);
}

#[test]
fn diamond_visits_lower_successor_first() {
    let graph = parse_graph("4\n0 1 1 0\n0 0 0 1\n0 0 0 1\n0 0 0 0\n", "diamond").unwrap();
    assert_eq!(graph.source_vertices(), vec![0]);
    assert_eq!(graph.sink_vertices(), vec![3]);
    assert_eq!(as_vecs(&graph), vec![vec![0, 1, 3], vec![0, 2, 3]]);
}

#[test]
fn disconnected_vertices_are_their_own_paths() {
    let graph = parse_graph("2\n0 0\n0 0\n", "isolated").unwrap();
    assert_eq!(graph.source_vertices(), vec![0, 1]);
    assert_eq!(graph.sink_vertices(), vec![0, 1]);
    assert_eq!(as_vecs(&graph), vec![vec![0], vec![1]]);
}

#[test]
fn lone_self_loop_has_no_paths() {
    let graph = parse_graph("1\n1\n", "loop").unwrap();
    assert!(graph.source_vertices().is_empty());
    assert!(graph.sink_vertices().is_empty());
    assert!(as_vecs(&graph).is_empty());
}

#[test]
fn complete_graph_has_no_sources() {
    let graph = parse_graph("3  0 1 1  1 0 1  1 1 0", "complete").unwrap();
    assert!(graph.source_vertices().is_empty());
    assert!(as_vecs(&graph).is_empty());
}

#[test]
fn layered_graph_in_pair_order() {
    // Sources 0, 1; sinks 4, 5.
    // 0 -> 2, 1 -> 2, 1 -> 3, 2 -> 4, 2 -> 5, 3 -> 5
    let graph =
        AdjacencyGraph::from_edges(6, &[(0, 2), (1, 2), (1, 3), (2, 4), (2, 5), (3, 5)]).unwrap();
    assert_eq!(
        as_vecs(&graph),
        vec![
            vec![0, 2, 4],
            vec![0, 2, 5],
            vec![1, 2, 4],
            vec![1, 2, 5],
            vec![1, 3, 5],
        ]
    );
}

#[test]
fn loads_from_disk() {
    let path = std::env::temp_dir().join(format!("path-enumeration-scenario-{}.txt", std::process::id()));
    std::fs::write(&path, "3\n0 1 1\n0 0 1\n0 0 0\n").unwrap();

    let graph = load_graph_from_file(&path).unwrap();
    assert_eq!(as_vecs(&graph), vec![vec![0, 1, 2], vec![0, 2]]);
    std::fs::remove_file(&path).unwrap();
}

#[test]
fn load_errors_name_the_file() {
    let err = parse_graph("2 0 1", "short.txt").unwrap_err();
    assert!(matches!(err, LoadError::TooFewEntries { .. }));
    assert!(err.to_string().contains("short.txt"));
}
