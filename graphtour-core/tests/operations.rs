mod common;

use graphtour_core::{Graph, GraphOperations, Parity};
use rstest::rstest;

use common::{complete, edge_with_isolated_vertex, triangle};

#[rstest]
fn triangle_has_both_tours() {
    let operations = GraphOperations::new(triangle());

    let hamilton = operations.find_hamilton_cycle().expect("triangle is Hamiltonian");
    assert_eq!(hamilton.vertices(), &[0, 1, 2, 0]);

    assert!(operations.has_euler_cycle());
    let euler = operations.find_euler_cycle().expect("triangle is Eulerian");
    assert_eq!(euler.steps(), 3);
    assert!(euler.is_euler_circuit_of(operations.graph()));
}

#[rstest]
fn isolated_vertex_blocks_both_tours() {
    let operations = GraphOperations::new(edge_with_isolated_vertex());
    assert_eq!(operations.find_hamilton_cycle(), None);
    assert!(!operations.has_euler_cycle());
    assert_eq!(operations.find_euler_cycle(), None);
}

#[rstest]
fn edgeless_graph_has_no_euler_circuit() {
    let operations = GraphOperations::new(Graph::empty(5));
    assert!(!operations.has_euler_cycle());
    assert_eq!(operations.find_euler_cycle(), None);
}

#[rstest]
#[case(3)]
#[case(5)]
#[case(7)]
fn odd_complete_graphs_are_eulerian(#[case] n: usize) {
    let operations = GraphOperations::new(complete(n));
    let euler = operations.find_euler_cycle().expect("all degrees even");
    assert_eq!(euler.steps(), n * (n - 1) / 2);
    assert!(euler.is_euler_circuit_of(operations.graph()));
}

#[rstest]
#[case(4)]
#[case(6)]
fn even_complete_graphs_are_not_eulerian(#[case] n: usize) {
    let operations = GraphOperations::new(complete(n));
    assert_eq!(operations.find_euler_cycle(), None);
    assert!(operations.find_hamilton_cycle().is_some());
}

#[rstest]
fn repeated_calls_are_idempotent() {
    let operations = GraphOperations::new(complete(5));
    let report = operations.report();
    assert_eq!(operations.find_euler_cycle(), operations.find_euler_cycle());
    assert_eq!(operations.find_hamilton_cycle(), operations.find_hamilton_cycle());
    assert_eq!(operations.report(), report);
    assert_eq!(operations.graph(), &complete(5));
}

#[rstest]
fn report_counts_odd_vertices_and_edges() {
    let report = GraphOperations::new(edge_with_isolated_vertex()).report();
    assert_eq!(report.vertex_count(), 3);
    assert_eq!(report.edge_count(), 1);
    assert_eq!(report.odd_vertex_count(), 2);
    let parities: Vec<Parity> = report.rows().iter().map(|row| row.parity).collect();
    assert_eq!(parities, vec![Parity::Odd, Parity::Odd, Parity::Even]);
}

#[rstest]
fn print_graph_renders_isolated_example() {
    let mut out = Vec::new();
    GraphOperations::new(edge_with_isolated_vertex())
        .print_graph(&mut out)
        .expect("write to vec");
    let rendered = String::from_utf8(out).expect("utf-8 output");
    assert!(rendered.starts_with("Graph representation (adjacency list):\n"));
    assert!(rendered.contains("0: [1] (degree: 1, odd)"));
    assert!(rendered.contains("Vertices with odd degree: 2"));
}
