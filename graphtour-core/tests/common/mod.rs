use graphtour_core::Graph;

#[must_use]
pub fn triangle() -> Graph {
    Graph::from_edges(3, [(0, 1), (1, 2), (2, 0)]).expect("triangle is valid")
}

/// Edge `0-1` plus isolated vertex 2.
#[must_use]
pub fn edge_with_isolated_vertex() -> Graph {
    Graph::from_adjacency(vec![vec![1], vec![0], vec![]]).expect("adjacency is symmetric")
}

#[must_use]
pub fn complete(n: usize) -> Graph {
    let pairs = (0..n).flat_map(|u| (u + 1..n).map(move |v| (u, v)));
    Graph::from_edges(n, pairs).expect("complete graph is valid")
}
