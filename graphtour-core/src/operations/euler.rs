//! Euler circuit detection and Hierholzer construction.

use std::collections::BTreeSet;

use tracing::{debug, instrument};

use crate::{Cycle, Graph};

/// Returns `true` when `graph` has at least one edge, its non-isolated
/// vertices are connected, and every degree is even.
pub(super) fn has_circuit(graph: &Graph) -> bool {
    let active: Vec<usize> = (0..graph.vertex_count())
        .filter(|&vertex| graph.degree(vertex).is_some_and(|degree| degree > 0))
        .collect();
    let Some(&first) = active.first() else {
        return false;
    };
    reachable_from(graph, first) == active.len() && graph.all_degrees_even()
}

/// Counts the vertices reachable from `start` with an explicit stack.
///
/// Neighbours of a non-isolated vertex are non-isolated themselves, so the
/// traversal never leaves the active vertex set.
fn reachable_from(graph: &Graph, start: usize) -> usize {
    let mut visited = vec![false; graph.vertex_count()];
    let mut stack = vec![start];
    let mut count = 0_usize;
    while let Some(vertex) = stack.pop() {
        match visited.get_mut(vertex) {
            Some(seen) if !*seen => *seen = true,
            _ => continue,
        }
        count += 1;
        stack.extend(
            graph
                .neighbours(vertex)
                .filter(|&next| visited.get(next).is_some_and(|seen| !seen)),
        );
    }
    count
}

#[instrument(
    name = "operations.euler",
    skip_all,
    fields(vertices = graph.vertex_count(), edges = graph.edge_count()),
)]
pub(super) fn find_circuit(graph: &Graph) -> Option<Cycle> {
    if !has_circuit(graph) {
        debug!("graph fails the euler circuit precondition");
        return None;
    }

    let mut remaining = graph.adjacency_snapshot();
    let start = remaining.iter().position(|set| !set.is_empty())?;
    let mut stack = vec![start];
    let mut circuit = Vec::with_capacity(graph.edge_count() + 1);

    while let Some(&current) = stack.last() {
        match remaining.get_mut(current).and_then(BTreeSet::pop_last) {
            Some(next) => {
                if let Some(reverse) = remaining.get_mut(next) {
                    reverse.remove(&current);
                }
                stack.push(next);
            }
            None => {
                stack.pop();
                circuit.push(current);
            }
        }
    }

    circuit.reverse();
    debug!(steps = circuit.len().saturating_sub(1), "euler circuit built");
    (circuit.len() > 1).then(|| Cycle::new(circuit))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn graph(n: usize, edges: &[(usize, usize)]) -> Graph {
        Graph::from_edges(n, edges.iter().copied()).expect("edges valid")
    }

    #[rstest]
    #[case::edgeless(graph(4, &[]), false)]
    #[case::triangle(graph(3, &[(0, 1), (1, 2), (2, 0)]), true)]
    #[case::triangle_with_isolated(graph(4, &[(1, 2), (2, 3), (3, 1)]), true)]
    #[case::odd_path(graph(3, &[(0, 1), (1, 2)]), false)]
    #[case::two_triangles(graph(6, &[(0, 1), (1, 2), (2, 0), (3, 4), (4, 5), (5, 3)]), false)]
    fn precondition_checks_edges_parity_and_connectivity(
        #[case] subject: Graph,
        #[case] expected: bool,
    ) {
        assert_eq!(has_circuit(&subject), expected);
    }

    #[test]
    fn reachable_from_counts_component_only() {
        let graph = graph(5, &[(0, 1), (1, 2), (3, 4)]);
        assert_eq!(reachable_from(&graph, 0), 3);
        assert_eq!(reachable_from(&graph, 4), 2);
    }

    #[test]
    fn hierholzer_takes_highest_neighbour_first() {
        let triangle = graph(3, &[(0, 1), (1, 2), (2, 0)]);
        let circuit = find_circuit(&triangle).expect("triangle has a circuit");
        assert_eq!(circuit.vertices(), &[0, 2, 1, 0]);
    }

    #[test]
    fn hierholzer_splices_sub_tours() {
        // Bowtie: two triangles sharing vertex 0.
        let bowtie = graph(5, &[(0, 1), (1, 2), (2, 0), (0, 3), (3, 4), (4, 0)]);
        let circuit = find_circuit(&bowtie).expect("bowtie has a circuit");
        assert_eq!(circuit.steps(), 6);
        assert!(circuit.is_euler_circuit_of(&bowtie));
        assert_eq!(circuit.vertices().first(), Some(&0));
    }

    #[test]
    fn circuit_starts_at_lowest_active_vertex() {
        let graph = graph(5, &[(2, 3), (3, 4), (4, 2)]);
        let circuit = find_circuit(&graph).expect("triangle has a circuit");
        assert_eq!(circuit.vertices().first(), Some(&2));
        assert_eq!(circuit.vertices().last(), Some(&2));
    }
}
