//! Exhaustive Hamilton cycle search.
//!
//! The search is a depth-first backtracking walk from vertex 0 that tries
//! neighbours in ascending id order. Recursion is replaced by a stack of
//! neighbour iterators so deep paths cannot overflow the call stack.
//!
//! A candidate is only skipped when it is already on the path, so the cost is
//! exponential in the worst case. Graphs without a Hamilton cycle, such as
//! those with an isolated vertex, are refuted by exhausting the search.

use std::collections::btree_set;

use tracing::{debug, instrument};

use crate::{Cycle, Graph};

const START: usize = 0;

/// Partial path state: the current walk and which vertices it covers.
struct Walk {
    path: Vec<usize>,
    visited: Vec<bool>,
}

impl Walk {
    fn new(vertex_count: usize) -> Self {
        let mut visited = vec![false; vertex_count];
        if let Some(seen) = visited.get_mut(START) {
            *seen = true;
        }
        let mut path = Vec::with_capacity(vertex_count + 1);
        path.push(START);
        Self { path, visited }
    }

    fn is_free(&self, vertex: usize) -> bool {
        self.visited.get(vertex).is_some_and(|seen| !seen)
    }

    fn advance(&mut self, vertex: usize) {
        if let Some(seen) = self.visited.get_mut(vertex) {
            *seen = true;
        }
        self.path.push(vertex);
    }

    fn retreat(&mut self) {
        if let Some(vertex) = self.path.pop()
            && let Some(seen) = self.visited.get_mut(vertex)
        {
            *seen = false;
        }
    }

    fn is_complete(&self) -> bool {
        self.path.len() == self.visited.len()
    }

    fn tail(&self) -> usize {
        self.path.last().copied().unwrap_or(START)
    }
}

#[instrument(
    name = "operations.hamilton",
    skip_all,
    fields(vertices = graph.vertex_count()),
)]
pub(super) fn find_cycle(graph: &Graph) -> Option<Cycle> {
    let n = graph.vertex_count();
    if n == 0 {
        return None;
    }

    let mut walk = Walk::new(n);
    let mut frames: Vec<btree_set::Iter<'_, usize>> = vec![graph.neighbour_set(START)?.iter()];
    let mut expansions = 0_usize;

    while let Some(frame) = frames.last_mut() {
        if walk.is_complete() {
            if graph.contains_edge(walk.tail(), START) {
                let mut vertices = walk.path;
                vertices.push(START);
                debug!(expansions, "hamilton cycle found");
                return Some(Cycle::new(vertices));
            }
            frames.pop();
            walk.retreat();
            continue;
        }

        match frame.find(|&&next| walk.is_free(next)) {
            Some(&next) => {
                expansions += 1;
                walk.advance(next);
                frames.push(graph.neighbour_set(next)?.iter());
            }
            None => {
                frames.pop();
                walk.retreat();
            }
        }
    }

    debug!(expansions, "search space exhausted without a hamilton cycle");
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use graphtour_test_support::tracing::RecordingLayer;
    use rstest::rstest;

    fn graph(n: usize, edges: &[(usize, usize)]) -> Graph {
        Graph::from_edges(n, edges.iter().copied()).expect("edges valid")
    }

    #[test]
    fn empty_graph_has_no_cycle() {
        assert_eq!(find_cycle(&Graph::empty(0)), None);
    }

    #[test]
    fn single_vertex_has_no_cycle() {
        assert_eq!(find_cycle(&Graph::empty(1)), None);
    }

    #[test]
    fn single_edge_closes_on_itself() {
        let cycle = find_cycle(&graph(2, &[(0, 1)])).expect("walk 0-1-0 is accepted");
        assert_eq!(cycle.vertices(), &[0, 1, 0]);
    }

    #[rstest]
    #[case::square(graph(4, &[(0, 1), (1, 2), (2, 3), (3, 0)]), vec![0, 1, 2, 3, 0])]
    #[case::square_with_chord(graph(4, &[(0, 1), (1, 2), (2, 3), (3, 0), (0, 2)]), vec![0, 1, 2, 3, 0])]
    #[case::backtracks_past_dead_end(
        graph(5, &[(0, 1), (1, 2), (1, 3), (3, 2), (2, 4), (4, 0)]),
        vec![0, 1, 3, 2, 4, 0],
    )]
    fn finds_lexicographically_first_cycle(#[case] subject: Graph, #[case] expected: Vec<usize>) {
        let cycle = find_cycle(&subject).expect("graph is Hamiltonian");
        assert_eq!(cycle.vertices(), expected.as_slice());
        assert!(cycle.is_hamilton_cycle_of(&subject));
    }

    #[rstest]
    #[case::path(graph(4, &[(0, 1), (1, 2), (2, 3)]))]
    #[case::isolated(graph(3, &[(0, 1)]))]
    #[case::star(graph(4, &[(0, 1), (0, 2), (0, 3)]))]
    fn rejects_non_hamiltonian_graphs(#[case] subject: Graph) {
        assert_eq!(find_cycle(&subject), None);
    }

    #[test]
    fn isolated_vertex_is_refuted_by_exhausting_every_path() {
        // K5 on 0..5 plus isolated vertex 5: every simple path from 0 is tried.
        let n = 6;
        let pairs = (0..5).flat_map(|u| (u + 1..5).map(move |v| (u, v)));
        let subject = Graph::from_edges(n, pairs).expect("complete graph on 0..5");

        let (cycle, layer) = RecordingLayer::capture(|| find_cycle(&subject));
        assert_eq!(cycle, None);
        let exhausted = layer
            .events()
            .into_iter()
            .find(|event| {
                event.message() == Some("search space exhausted without a hamilton cycle")
            })
            .expect("search must run to exhaustion");
        // 4 + 4*3 + 4*3*2 + 4*3*2*1 simple extensions of the start vertex.
        assert_eq!(exhausted.field("expansions"), Some("64"));
    }

    #[test]
    fn petersen_graph_is_not_hamiltonian() {
        let outer = (0..5).map(|i| (i, (i + 1) % 5));
        let spokes = (0..5).map(|i| (i, i + 5));
        let inner = (0..5).map(|i| (i + 5, (i + 2) % 5 + 5));
        let petersen =
            Graph::from_edges(10, outer.chain(spokes).chain(inner)).expect("petersen graph");
        assert_eq!(find_cycle(&petersen), None);
    }
}
