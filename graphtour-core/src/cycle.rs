//! Closed vertex sequences returned by the cycle searches.

use std::{collections::BTreeSet, fmt};

use crate::Graph;

/// A closed walk: the first and last vertices coincide.
///
/// Produced by [`crate::GraphOperations::find_euler_cycle`] and
/// [`crate::GraphOperations::find_hamilton_cycle`].
///
/// # Examples
/// ```
/// use graphtour_core::{Graph, GraphOperations};
///
/// let triangle = Graph::from_edges(3, [(0, 1), (1, 2), (2, 0)])?;
/// let cycle = GraphOperations::new(triangle)
///     .find_hamilton_cycle()
///     .expect("triangle is Hamiltonian");
/// assert_eq!(cycle.vertices(), &[0, 1, 2, 0]);
/// assert_eq!(cycle.steps(), 3);
/// assert_eq!(cycle.to_string(), "0 -> 1 -> 2 -> 0");
/// # Ok::<(), graphtour_core::GraphError>(())
/// ```
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Cycle {
    vertices: Vec<usize>,
}

impl Cycle {
    pub(crate) fn new(vertices: Vec<usize>) -> Self {
        debug_assert!(
            vertices.first() == vertices.last(),
            "cycles must return to their start vertex"
        );
        Self { vertices }
    }

    /// Returns the visited vertices, including the closing repeat of the start.
    #[must_use]
    #[rustfmt::skip]
    pub fn vertices(&self) -> &[usize] { &self.vertices }

    /// Consumes the cycle and returns its vertex sequence.
    #[must_use]
    #[rustfmt::skip]
    pub fn into_vertices(self) -> Vec<usize> { self.vertices }

    /// Returns the number of vertices in the sequence.
    #[must_use]
    #[rustfmt::skip]
    pub fn len(&self) -> usize { self.vertices.len() }

    /// Returns `true` for an empty sequence.
    #[must_use]
    #[rustfmt::skip]
    pub fn is_empty(&self) -> bool { self.vertices.is_empty() }

    /// Returns the number of traversed edges.
    #[must_use]
    pub fn steps(&self) -> usize {
        self.vertices.len().saturating_sub(1)
    }

    /// Iterates consecutive vertex pairs, i.e. the traversed edges.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.vertices.windows(2).filter_map(|pair| match pair {
            [u, v] => Some((*u, *v)),
            _ => None,
        })
    }

    /// Checks that the sequence visits every vertex of `graph` exactly once
    /// along existing edges before returning to its start.
    #[must_use]
    pub fn is_hamilton_cycle_of(&self, graph: &Graph) -> bool {
        let n = graph.vertex_count();
        if n == 0 || self.vertices.len() != n + 1 || self.vertices.first() != self.vertices.last() {
            return false;
        }
        let distinct: BTreeSet<usize> = self.vertices.iter().take(n).copied().collect();
        distinct.len() == n
            && distinct.iter().all(|&vertex| vertex < n)
            && self.edges().all(|(u, v)| graph.contains_edge(u, v))
    }

    /// Checks that the sequence is a closed walk using every edge of `graph`
    /// exactly once.
    #[must_use]
    pub fn is_euler_circuit_of(&self, graph: &Graph) -> bool {
        if self.steps() != graph.edge_count() || self.vertices.first() != self.vertices.last() {
            return false;
        }
        let mut used = BTreeSet::new();
        self.edges().all(|(u, v)| {
            let key = (u.min(v), u.max(v));
            graph.contains_edge(u, v) && used.insert(key)
        })
    }
}

impl fmt::Display for Cycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut iter = self.vertices.iter();
        if let Some(first) = iter.next() {
            write!(f, "{first}")?;
        }
        for vertex in iter {
            write!(f, " -> {vertex}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Graph {
        Graph::from_edges(4, [(0, 1), (1, 2), (2, 3), (3, 0)]).expect("square is valid")
    }

    #[test]
    fn hamilton_check_accepts_valid_tour() {
        assert!(Cycle::new(vec![0, 1, 2, 3, 0]).is_hamilton_cycle_of(&square()));
    }

    #[test]
    fn hamilton_check_rejects_repeated_vertex() {
        assert!(!Cycle::new(vec![0, 1, 0, 3, 0]).is_hamilton_cycle_of(&square()));
    }

    #[test]
    fn hamilton_check_rejects_missing_edge() {
        assert!(!Cycle::new(vec![0, 2, 1, 3, 0]).is_hamilton_cycle_of(&square()));
    }

    #[test]
    fn euler_check_requires_every_edge_once() {
        let graph = square();
        assert!(Cycle::new(vec![0, 3, 2, 1, 0]).is_euler_circuit_of(&graph));
        assert!(!Cycle::new(vec![0, 1, 0, 1, 0]).is_euler_circuit_of(&graph));
    }

    #[test]
    fn display_joins_with_arrows() {
        assert_eq!(Cycle::new(vec![4, 2, 4]).to_string(), "4 -> 2 -> 4");
    }
}
