//! Non-Hamiltonian graph construction around a single isolated vertex.

use rand::{Rng, rngs::SmallRng, seq::SliceRandom};
use tracing::{debug, instrument};

use crate::{
    Graph,
    error::{GeneratorError, Result},
};

use super::{
    GeneratedGraph, GenerationStats,
    params::{GeneratorParams, target_edges},
};

/// Smallest vertex count accepted for non-Hamiltonian generation.
pub const MIN_NON_HAMILTONIAN_VERTICES: usize = 2;

#[instrument(name = "generator.non_hamiltonian", err, skip_all, fields(vertices = n))]
pub(super) fn build(
    rng: &mut SmallRng,
    params: &GeneratorParams,
    n: usize,
) -> Result<GeneratedGraph> {
    if n < MIN_NON_HAMILTONIAN_VERTICES {
        return Err(GeneratorError::VertexCountTooSmall {
            got: n,
            minimum: MIN_NON_HAMILTONIAN_VERTICES,
        });
    }

    let mut graph = Graph::empty(n);
    // The target is measured against all `n` vertices even though the
    // isolated one never receives edges.
    let target = target_edges(graph.max_edges(), params.non_hamiltonian_saturation());
    let isolated = rng.gen_range(0..n);

    let mut candidates = candidate_pairs(n, isolated);
    candidates.shuffle(rng);

    let mut attempts = 0_usize;
    for (u, v) in candidates {
        graph.insert_edge(u, v);
        attempts += 1;
        if graph.edge_count() >= target {
            break;
        }
    }

    let sampled_edges = graph.edge_count();
    debug!(
        isolated,
        target_edges = target,
        edges = sampled_edges,
        "non-hamiltonian graph ready"
    );

    Ok(GeneratedGraph {
        graph,
        stats: GenerationStats {
            target_edges: target,
            sampled_edges,
            attempts,
            budget_exhausted: sampled_edges < target,
            repair_edges_added: 0,
            repair_edges_removed: 0,
        },
    })
}

/// Lists every unordered pair of vertices other than `isolated`.
fn candidate_pairs(n: usize, isolated: usize) -> Vec<(usize, usize)> {
    let others: Vec<usize> = (0..n).filter(|&vertex| vertex != isolated).collect();
    others
        .iter()
        .enumerate()
        .flat_map(|(index, &u)| {
            others
                .get(index + 1..)
                .unwrap_or_default()
                .iter()
                .map(move |&v| (u, v))
        })
        .collect()
}
