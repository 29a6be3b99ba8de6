//! Undirected simple graph stored as per-vertex ordered neighbour sets.
//!
//! Vertices are the dense range `0..n`. Adjacency is symmetric at every
//! observable point: crate-internal mutators always touch both endpoints, and
//! the public constructors reject asymmetric input.

mod invariants;

use std::{collections::BTreeSet, fmt};

use crate::error::GraphError;

use self::invariants::{check_range, check_self_loops, check_symmetry};

/// Degree parity of a vertex.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Parity {
    /// The vertex has an even number of neighbours.
    Even,
    /// The vertex has an odd number of neighbours.
    Odd,
}

impl Parity {
    /// Classifies `degree`.
    #[must_use]
    pub const fn of(degree: usize) -> Self {
        if degree % 2 == 0 { Self::Even } else { Self::Odd }
    }
}

impl fmt::Display for Parity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Even => f.write_str("even"),
            Self::Odd => f.write_str("odd"),
        }
    }
}

/// An undirected graph without self-loops or parallel edges.
///
/// # Examples
/// ```
/// use graphtour_core::Graph;
///
/// let graph = Graph::from_edges(3, [(0, 1), (1, 2), (2, 0)])?;
/// assert_eq!(graph.vertex_count(), 3);
/// assert_eq!(graph.edge_count(), 3);
/// assert!(graph.contains_edge(2, 1));
/// # Ok::<(), graphtour_core::GraphError>(())
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Graph {
    adjacency: Vec<BTreeSet<usize>>,
}

impl Graph {
    /// Creates a graph with `vertex_count` vertices and no edges.
    #[must_use]
    pub fn empty(vertex_count: usize) -> Self {
        Self {
            adjacency: vec![BTreeSet::new(); vertex_count],
        }
    }

    /// Builds a graph from one neighbour list per vertex.
    ///
    /// The list at position `v` names the neighbours of vertex `v`; duplicates
    /// collapse.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexOutOfRange`] when a neighbour id is not a
    /// vertex, [`GraphError::SelfLoop`] when a vertex lists itself, and
    /// [`GraphError::AsymmetricEdge`] when `v` lists `u` but `u` does not list
    /// `v`.
    ///
    /// # Examples
    /// ```
    /// use graphtour_core::{Graph, GraphError};
    ///
    /// let triangle = Graph::from_adjacency(vec![vec![1, 2], vec![0, 2], vec![0, 1]])?;
    /// assert_eq!(triangle.edge_count(), 3);
    ///
    /// let err = Graph::from_adjacency(vec![vec![1], vec![]]).unwrap_err();
    /// assert_eq!(err, GraphError::AsymmetricEdge { from: 0, to: 1 });
    /// # Ok::<(), GraphError>(())
    /// ```
    pub fn from_adjacency<I, N>(lists: I) -> Result<Self, GraphError>
    where
        I: IntoIterator<Item = N>,
        N: IntoIterator<Item = usize>,
    {
        let adjacency: Vec<BTreeSet<usize>> = lists
            .into_iter()
            .map(|neighbours| neighbours.into_iter().collect())
            .collect();
        check_range(&adjacency)?;
        check_self_loops(&adjacency)?;
        check_symmetry(&adjacency)?;
        Ok(Self { adjacency })
    }

    /// Builds a graph on `vertex_count` vertices from undirected edges.
    ///
    /// Each pair is inserted in both directions and repeated pairs collapse.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexOutOfRange`] or [`GraphError::SelfLoop`] for
    /// invalid pairs.
    pub fn from_edges(
        vertex_count: usize,
        edges: impl IntoIterator<Item = (usize, usize)>,
    ) -> Result<Self, GraphError> {
        let mut graph = Self::empty(vertex_count);
        for (u, v) in edges {
            for vertex in [u, v] {
                if vertex >= vertex_count {
                    return Err(GraphError::VertexOutOfRange {
                        vertex,
                        vertex_count,
                    });
                }
            }
            if u == v {
                return Err(GraphError::SelfLoop { vertex: u });
            }
            graph.insert_edge(u, v);
        }
        Ok(graph)
    }

    /// Returns the number of vertices.
    #[must_use]
    #[rustfmt::skip]
    pub fn vertex_count(&self) -> usize { self.adjacency.len() }

    /// Returns `true` when the graph has no vertices.
    #[must_use]
    #[rustfmt::skip]
    pub fn is_empty(&self) -> bool { self.adjacency.is_empty() }

    /// Returns the number of undirected edges, each counted once.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(BTreeSet::len).sum::<usize>() / 2
    }

    /// Returns the largest edge count a simple graph on this vertex set can
    /// hold, `n(n-1)/2`.
    #[must_use]
    pub fn max_edges(&self) -> usize {
        max_edges(self.vertex_count())
    }

    /// Returns the realised edge density as a percentage of [`Self::max_edges`].
    ///
    /// Graphs with fewer than two vertices report `0.0`.
    #[must_use]
    pub fn saturation_percent(&self) -> f64 {
        let max = self.max_edges();
        if max == 0 {
            return 0.0;
        }
        self.edge_count() as f64 * 100.0 / max as f64
    }

    /// Returns the degree of `vertex`, or `None` when it is not a vertex.
    #[must_use]
    pub fn degree(&self, vertex: usize) -> Option<usize> {
        self.adjacency.get(vertex).map(BTreeSet::len)
    }

    /// Iterates the neighbours of `vertex` in ascending order.
    ///
    /// Yields nothing when `vertex` is not part of the graph.
    pub fn neighbours(&self, vertex: usize) -> impl Iterator<Item = usize> + '_ {
        self.adjacency
            .get(vertex)
            .into_iter()
            .flat_map(|set| set.iter().copied())
    }

    /// Returns `true` when `u` and `v` are adjacent.
    #[must_use]
    pub fn contains_edge(&self, u: usize, v: usize) -> bool {
        self.adjacency
            .get(u)
            .is_some_and(|neighbours| neighbours.contains(&v))
    }

    /// Iterates every undirected edge once as `(u, v)` with `u < v`, in
    /// ascending lexicographic order.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.adjacency.iter().enumerate().flat_map(|(u, set)| {
            set.range(u.saturating_add(1)..)
                .map(move |&v| (u, v))
        })
    }

    /// Returns the vertices with odd degree in ascending order.
    #[must_use]
    pub fn odd_vertices(&self) -> Vec<usize> {
        self.vertices_where(|set| set.len() % 2 == 1)
    }

    /// Returns the vertices with degree zero in ascending order.
    #[must_use]
    pub fn isolated_vertices(&self) -> Vec<usize> {
        self.vertices_where(BTreeSet::is_empty)
    }

    /// Returns `true` when every vertex has even degree.
    #[must_use]
    pub fn all_degrees_even(&self) -> bool {
        self.adjacency.iter().all(|set| set.len() % 2 == 0)
    }

    fn vertices_where(&self, predicate: impl Fn(&BTreeSet<usize>) -> bool) -> Vec<usize> {
        self.adjacency
            .iter()
            .enumerate()
            .filter(|(_, set)| predicate(set))
            .map(|(vertex, _)| vertex)
            .collect()
    }

    pub(crate) fn neighbour_set(&self, vertex: usize) -> Option<&BTreeSet<usize>> {
        self.adjacency.get(vertex)
    }

    /// Clones the raw adjacency for algorithms that consume edges.
    pub(crate) fn adjacency_snapshot(&self) -> Vec<BTreeSet<usize>> {
        self.adjacency.clone()
    }

    /// Inserts `u–v` in both directions, returning `false` when the edge was
    /// already present.
    ///
    /// Callers guarantee `u != v` and both ids are in range.
    pub(crate) fn insert_edge(&mut self, u: usize, v: usize) -> bool {
        debug_assert_ne!(u, v, "self-loops are not permitted");
        let inserted = self.adjacency[u].insert(v);
        self.adjacency[v].insert(u);
        inserted
    }

    /// Removes `u–v` in both directions, returning `false` when it was absent.
    pub(crate) fn remove_edge(&mut self, u: usize, v: usize) -> bool {
        let removed = self.adjacency[u].remove(&v);
        self.adjacency[v].remove(&u);
        removed
    }
}

/// Returns `n(n-1)/2`, the edge count of the complete graph on `n` vertices.
#[must_use]
pub const fn max_edges(vertex_count: usize) -> usize {
    vertex_count.saturating_mul(vertex_count.saturating_sub(1)) / 2
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, Parity::Even)]
    #[case(1, Parity::Odd)]
    #[case(4, Parity::Even)]
    #[case(7, Parity::Odd)]
    fn parity_classifies_degree(#[case] degree: usize, #[case] expected: Parity) {
        assert_eq!(Parity::of(degree), expected);
    }

    #[test]
    fn from_edges_symmetrises_and_deduplicates() {
        let graph = Graph::from_edges(4, [(0, 1), (1, 0), (2, 3)]).expect("edges valid");
        assert_eq!(graph.edge_count(), 2);
        assert!(graph.contains_edge(1, 0));
        assert!(graph.contains_edge(3, 2));
        assert_eq!(graph.edges().collect::<Vec<_>>(), vec![(0, 1), (2, 3)]);
    }

    #[rstest]
    #[case::out_of_range((0, 4), GraphError::VertexOutOfRange { vertex: 4, vertex_count: 4 })]
    #[case::self_loop((2, 2), GraphError::SelfLoop { vertex: 2 })]
    fn from_edges_rejects_invalid_pairs(#[case] edge: (usize, usize), #[case] expected: GraphError) {
        let err = Graph::from_edges(4, [edge]).expect_err("pair must be rejected");
        assert_eq!(err, expected);
    }

    #[test]
    fn degree_queries_report_parity_sets() {
        let graph = Graph::from_edges(5, [(0, 1), (1, 2), (2, 0), (2, 3)]).expect("edges valid");
        assert_eq!(graph.degree(2), Some(3));
        assert_eq!(graph.degree(9), None);
        assert_eq!(graph.odd_vertices(), vec![2, 3]);
        assert_eq!(graph.isolated_vertices(), vec![4]);
        assert!(!graph.all_degrees_even());
    }

    #[test]
    fn neighbours_are_ascending_and_empty_for_unknown_vertices() {
        let graph = Graph::from_edges(4, [(0, 3), (0, 1), (0, 2)]).expect("edges valid");
        assert_eq!(graph.neighbours(0).collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!(graph.neighbours(7).count(), 0);
    }

    #[rstest]
    #[case(0, 0)]
    #[case(1, 0)]
    #[case(2, 1)]
    #[case(11, 55)]
    fn max_edges_matches_complete_graph(#[case] n: usize, #[case] expected: usize) {
        assert_eq!(max_edges(n), expected);
    }

    #[test]
    fn saturation_is_zero_for_trivial_graphs() {
        assert!(Graph::empty(1).saturation_percent().abs() < f64::EPSILON);
    }

    #[test]
    fn saturation_reports_density() {
        let graph = Graph::from_edges(4, [(0, 1), (1, 2), (2, 3)]).expect("edges valid");
        assert!((graph.saturation_percent() - 50.0).abs() < 1e-9);
    }

    #[test]
    fn remove_edge_clears_both_directions() {
        let mut graph = Graph::from_edges(3, [(0, 1), (1, 2)]).expect("edges valid");
        assert!(graph.remove_edge(1, 0));
        assert!(!graph.contains_edge(0, 1));
        assert!(!graph.contains_edge(1, 0));
        assert!(!graph.remove_edge(0, 1));
    }
}
