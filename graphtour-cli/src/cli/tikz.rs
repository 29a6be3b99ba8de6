//! TikZ export with vertices evenly spaced on a circle.

use std::{
    f64::consts::TAU,
    io::{self, Write},
};

use graphtour_core::Graph;
use thiserror::Error;

/// Circle radius used when none is given.
pub const DEFAULT_RADIUS: f64 = 3.0;

/// Errors raised while rendering a TikZ picture.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The graph has no vertices to place.
    #[error("graph is empty, nothing to export")]
    EmptyGraph,
    /// Writing the picture failed.
    #[error("failed to write TikZ output: {0}")]
    Write(#[from] io::Error),
}

/// Writes `graph` as a `tikzpicture`.
///
/// Vertex `i` of `n` sits at angle `2πi/n` on a circle of `radius`. Each
/// undirected edge is drawn once.
///
/// # Errors
/// Returns [`ExportError::EmptyGraph`] for a graph without vertices and
/// [`ExportError::Write`] when `writer` fails.
///
/// # Examples
/// ```
/// use graphtour_cli::cli::{DEFAULT_RADIUS, write_tikz};
/// use graphtour_core::Graph;
///
/// let graph = Graph::from_edges(2, [(0, 1)])?;
/// let mut out = Vec::new();
/// write_tikz(&graph, DEFAULT_RADIUS, &mut out)?;
/// let tex = String::from_utf8(out)?;
/// assert!(tex.contains(r"\node (N1) at (-3.00,0.00) {1};"));
/// assert!(tex.contains(r"\draw (N0) -- (N1);"));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn write_tikz<W: Write>(graph: &Graph, radius: f64, mut writer: W) -> Result<(), ExportError> {
    if graph.is_empty() {
        return Err(ExportError::EmptyGraph);
    }

    writeln!(
        writer,
        r"\begin{{tikzpicture}}[scale=1, every node/.style={{circle,draw}}]"
    )?;
    let count = graph.vertex_count() as f64;
    for vertex in 0..graph.vertex_count() {
        let angle = TAU * vertex as f64 / count;
        let (sin, cos) = angle.sin_cos();
        writeln!(
            writer,
            r"  \node (N{vertex}) at ({x:.2},{y:.2}) {{{vertex}}};",
            x = radius * cos,
            y = radius * sin,
        )?;
    }
    writeln!(writer)?;
    for (u, v) in graph.edges() {
        writeln!(writer, r"  \draw (N{u}) -- (N{v});")?;
    }
    writeln!(writer, r"\end{{tikzpicture}}")?;
    Ok(())
}
