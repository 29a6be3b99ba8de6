//! Structural checks applied to caller-supplied adjacency lists.
//!
//! Each checker walks every directed entry once and reports the first
//! violation so [`super::Graph::from_adjacency`] can reject malformed input
//! before any algorithm observes it.

use std::collections::BTreeSet;

use tracing::debug;

use crate::error::GraphError;

fn for_each_entry(
    adjacency: &[BTreeSet<usize>],
    mut visitor: impl FnMut(usize, usize) -> Result<(), GraphError>,
) -> Result<(), GraphError> {
    for (source, neighbours) in adjacency.iter().enumerate() {
        for &target in neighbours {
            visitor(source, target)?;
        }
    }
    Ok(())
}

pub(super) fn check_range(adjacency: &[BTreeSet<usize>]) -> Result<(), GraphError> {
    let vertex_count = adjacency.len();
    for_each_entry(adjacency, |_, target| {
        if target < vertex_count {
            Ok(())
        } else {
            Err(GraphError::VertexOutOfRange {
                vertex: target,
                vertex_count,
            })
        }
    })
}

pub(super) fn check_self_loops(adjacency: &[BTreeSet<usize>]) -> Result<(), GraphError> {
    for_each_entry(adjacency, |source, target| {
        if source == target {
            Err(GraphError::SelfLoop { vertex: source })
        } else {
            Ok(())
        }
    })
}

/// Requires every `source -> target` entry to have its `target -> source`
/// counterpart. Must run after [`check_range`].
pub(super) fn check_symmetry(adjacency: &[BTreeSet<usize>]) -> Result<(), GraphError> {
    for_each_entry(adjacency, |source, target| {
        let reverse = adjacency
            .get(target)
            .is_some_and(|neighbours| neighbours.contains(&source));
        if reverse {
            Ok(())
        } else {
            debug!(source, target, "missing reverse adjacency entry");
            Err(GraphError::AsymmetricEdge {
                from: source,
                to: target,
            })
        }
    })
}
