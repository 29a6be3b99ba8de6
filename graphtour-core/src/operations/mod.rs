//! Analysis and cycle searches over an owned [`Graph`].

mod euler;
mod hamilton;
mod report;

use std::io::{self, Write};

use crate::{Cycle, Graph};

pub use self::report::{GraphReport, VertexRow};

/// Runs read-only analyses over a graph it owns.
///
/// None of the operations mutate the wrapped graph; the Euler search works on
/// its own copy of the adjacency. Results are deterministic for a given graph.
///
/// # Examples
/// ```
/// use graphtour_core::{Graph, GraphOperations};
///
/// let graph = Graph::from_adjacency(vec![vec![1], vec![0], vec![]])?;
/// let operations = GraphOperations::new(graph);
/// assert!(operations.find_hamilton_cycle().is_none());
/// assert!(operations.find_euler_cycle().is_none());
/// assert_eq!(operations.report().odd_vertex_count(), 2);
/// # Ok::<(), graphtour_core::GraphError>(())
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GraphOperations {
    graph: Graph,
}

impl GraphOperations {
    /// Takes ownership of `graph`.
    #[must_use]
    pub fn new(graph: Graph) -> Self {
        Self { graph }
    }

    /// Returns the wrapped graph.
    #[must_use]
    #[rustfmt::skip]
    pub fn graph(&self) -> &Graph { &self.graph }

    /// Releases the wrapped graph.
    #[must_use]
    #[rustfmt::skip]
    pub fn into_graph(self) -> Graph { self.graph }

    /// Returns `true` when an Euler circuit exists: the graph has an edge,
    /// its non-isolated vertices are connected and every degree is even.
    #[must_use]
    pub fn has_euler_cycle(&self) -> bool {
        euler::has_circuit(&self.graph)
    }

    /// Builds an Euler circuit with Hierholzer's algorithm.
    ///
    /// The circuit starts and ends at the lowest-id vertex with an edge.
    /// Returns `None` when [`Self::has_euler_cycle`] is `false`.
    #[must_use]
    pub fn find_euler_cycle(&self) -> Option<Cycle> {
        euler::find_circuit(&self.graph)
    }

    /// Searches exhaustively for a Hamilton cycle starting at vertex 0.
    ///
    /// Neighbours are tried in ascending order, so the first cycle found in
    /// that order is returned. The search is exponential in the worst case.
    #[must_use]
    pub fn find_hamilton_cycle(&self) -> Option<Cycle> {
        hamilton::find_cycle(&self.graph)
    }

    /// Summarises adjacency, degrees and parity per vertex.
    #[must_use]
    pub fn report(&self) -> GraphReport {
        GraphReport::of(&self.graph)
    }

    /// Writes [`Self::report`] to `writer`.
    ///
    /// # Errors
    /// Propagates failures from `writer`.
    pub fn print_graph<W: Write>(&self, mut writer: W) -> io::Result<()> {
        write!(writer, "{}", self.report())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn print_graph_writes_report() {
        let operations =
            GraphOperations::new(Graph::from_edges(2, [(0, 1)]).expect("single edge"));
        let mut buffer = Vec::new();
        operations.print_graph(&mut buffer).expect("write to vec");
        let rendered = String::from_utf8(buffer).expect("utf-8 output");
        assert_eq!(rendered, operations.report().to_string());
    }

    #[test]
    fn searches_leave_graph_untouched() {
        let graph = Graph::from_edges(3, [(0, 1), (1, 2), (2, 0)]).expect("triangle");
        let operations = GraphOperations::new(graph.clone());
        let _euler = operations.find_euler_cycle();
        let _hamilton = operations.find_hamilton_cycle();
        assert_eq!(operations.graph(), &graph);
        assert_eq!(operations.into_graph(), graph);
    }
}
