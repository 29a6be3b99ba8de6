//! Read-only diagnostic summary of a graph.

use std::fmt;

use crate::{Graph, Parity};

/// Adjacency details for one vertex.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VertexRow {
    /// Vertex id.
    pub vertex: usize,
    /// Neighbours in ascending order.
    pub neighbours: Vec<usize>,
    /// Number of neighbours.
    pub degree: usize,
    /// Parity of [`Self::degree`].
    pub parity: Parity,
}

/// Per-vertex adjacency listing plus graph totals.
///
/// The [`fmt::Display`] rendering pads columns so rows line up:
///
/// ```text
/// Graph representation (adjacency list):
/// 0: [1, 2] (degree: 2, even)
/// 1: [0, 2] (degree: 2, even)
/// 2: [0, 1] (degree: 2, even)
///
/// Total vertices: 3
/// Total edges: 3
/// Vertices with odd degree: 0
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GraphReport {
    rows: Vec<VertexRow>,
    edge_count: usize,
    odd_vertex_count: usize,
}

impl GraphReport {
    pub(crate) fn of(graph: &Graph) -> Self {
        let rows: Vec<VertexRow> = (0..graph.vertex_count())
            .map(|vertex| {
                let neighbours: Vec<usize> = graph.neighbours(vertex).collect();
                let degree = neighbours.len();
                VertexRow {
                    vertex,
                    neighbours,
                    degree,
                    parity: Parity::of(degree),
                }
            })
            .collect();
        let odd_vertex_count = rows
            .iter()
            .filter(|row| row.parity == Parity::Odd)
            .count();
        Self {
            rows,
            edge_count: graph.edge_count(),
            odd_vertex_count,
        }
    }

    /// Returns one row per vertex in ascending id order.
    #[must_use]
    #[rustfmt::skip]
    pub fn rows(&self) -> &[VertexRow] { &self.rows }

    /// Returns the number of vertices.
    #[must_use]
    #[rustfmt::skip]
    pub fn vertex_count(&self) -> usize { self.rows.len() }

    /// Returns the number of undirected edges.
    #[must_use]
    #[rustfmt::skip]
    pub fn edge_count(&self) -> usize { self.edge_count }

    /// Returns how many vertices have odd degree.
    #[must_use]
    #[rustfmt::skip]
    pub fn odd_vertex_count(&self) -> usize { self.odd_vertex_count }
}

fn bracketed(values: &[usize]) -> String {
    let joined: Vec<String> = values.iter().map(ToString::to_string).collect();
    format!("[{}]", joined.join(", "))
}

fn widest<I: Iterator<Item = usize>>(lengths: I) -> usize {
    lengths.max().unwrap_or(1)
}

impl fmt::Display for GraphReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Graph representation (adjacency list):")?;

        let lists: Vec<String> = self.rows.iter().map(|row| bracketed(&row.neighbours)).collect();
        let vertex_width = widest(self.rows.iter().map(|row| row.vertex.to_string().len()));
        let list_width = widest(lists.iter().map(String::len));
        let degree_width = widest(self.rows.iter().map(|row| row.degree.to_string().len()));

        for (row, list) in self.rows.iter().zip(&lists) {
            writeln!(
                f,
                "{vertex:<vertex_width$}: {list:<list_width$} (degree: {degree:<degree_width$}, {parity})",
                vertex = row.vertex,
                degree = row.degree,
                parity = row.parity,
            )?;
        }

        writeln!(f)?;
        writeln!(f, "Total vertices: {}", self.vertex_count())?;
        writeln!(f, "Total edges: {}", self.edge_count)?;
        writeln!(f, "Vertices with odd degree: {}", self.odd_vertex_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_follow_vertex_order_with_sorted_neighbours() {
        let graph = Graph::from_edges(4, [(2, 0), (0, 1), (3, 0)]).expect("edges valid");
        let report = GraphReport::of(&graph);
        let first = report.rows().first().expect("vertex 0 row");
        assert_eq!(first.neighbours, vec![1, 2, 3]);
        assert_eq!(first.parity, Parity::Odd);
        assert_eq!(report.odd_vertex_count(), 4);
        assert_eq!(report.edge_count(), 3);
    }

    #[test]
    fn renders_triangle_without_padding() {
        let graph = Graph::from_edges(3, [(0, 1), (1, 2), (2, 0)]).expect("triangle");
        let expected = "\
Graph representation (adjacency list):
0: [1, 2] (degree: 2, even)
1: [0, 2] (degree: 2, even)
2: [0, 1] (degree: 2, even)

Total vertices: 3
Total edges: 3
Vertices with odd degree: 0
";
        assert_eq!(GraphReport::of(&graph).to_string(), expected);
    }

    #[test]
    fn pads_columns_to_the_widest_entry() {
        let graph = Graph::from_edges(3, [(0, 1)]).expect("single edge");
        let rendered = GraphReport::of(&graph).to_string();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.get(1), Some(&"0: [1] (degree: 1, odd)"));
        assert_eq!(lines.get(3), Some(&"2: []  (degree: 0, even)"));
    }

    #[test]
    fn empty_graph_renders_totals_only() {
        let rendered = GraphReport::of(&Graph::empty(0)).to_string();
        assert!(rendered.contains("Total vertices: 0"));
        assert!(rendered.contains("Total edges: 0"));
    }
}
