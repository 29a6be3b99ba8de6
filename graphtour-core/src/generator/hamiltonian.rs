//! Hamiltonian graph construction: seed cycle, random densification, parity
//! repair.

use rand::{rngs::SmallRng, seq::SliceRandom, seq::index::sample};
use tracing::{debug, instrument, warn};

use crate::{
    Graph,
    error::{GeneratorError, Result},
};

use super::{
    GeneratedGraph, GenerationStats,
    params::{GeneratorParams, target_edges, validate_saturation},
    parity::{ProtectedEdges, ensure_even_degrees},
};

/// Smallest vertex count accepted for Hamiltonian generation.
pub const MIN_HAMILTONIAN_VERTICES: usize = 11;

#[instrument(
    name = "generator.hamiltonian",
    err,
    skip_all,
    fields(vertices = n, saturation = saturation),
)]
pub(super) fn build(
    rng: &mut SmallRng,
    params: &GeneratorParams,
    n: usize,
    saturation: u8,
) -> Result<GeneratedGraph> {
    if n < MIN_HAMILTONIAN_VERTICES {
        return Err(GeneratorError::VertexCountTooSmall {
            got: n,
            minimum: MIN_HAMILTONIAN_VERTICES,
        });
    }
    validate_saturation(saturation)?;

    let mut graph = Graph::empty(n);
    let protected = lay_seed_cycle(rng, &mut graph);
    let target = target_edges(graph.max_edges(), saturation);
    let (sampled_edges, attempts) = densify(rng, &mut graph, target, params.attempt_multiplier());

    let budget_exhausted = sampled_edges < target;
    if budget_exhausted {
        warn!(
            target_edges = target,
            sampled_edges, attempts, "attempt budget exhausted before reaching target"
        );
    }

    let repair = ensure_even_degrees(rng, &mut graph, &protected);
    debug!(
        edges = graph.edge_count(),
        added = repair.added,
        removed = repair.removed,
        "hamiltonian graph ready"
    );

    Ok(GeneratedGraph {
        graph,
        stats: GenerationStats {
            target_edges: target,
            sampled_edges,
            attempts,
            budget_exhausted,
            repair_edges_added: repair.added,
            repair_edges_removed: repair.removed,
        },
    })
}

/// Connects a random permutation of all vertices into a closed tour and
/// returns its edges.
fn lay_seed_cycle(rng: &mut SmallRng, graph: &mut Graph) -> ProtectedEdges {
    let mut order: Vec<usize> = (0..graph.vertex_count()).collect();
    order.shuffle(rng);

    let mut protected = ProtectedEdges::default();
    let successors = order.iter().cycle().skip(1);
    for (&u, &v) in order.iter().zip(successors) {
        graph.insert_edge(u, v);
        protected.insert(u, v);
    }
    protected
}

/// Adds random edges until `target` is met or the attempt budget runs out.
///
/// Returns the edge count reached and the number of draws consumed.
fn densify(
    rng: &mut SmallRng,
    graph: &mut Graph,
    target: usize,
    attempt_multiplier: usize,
) -> (usize, usize) {
    let n = graph.vertex_count();
    let mut current = graph.edge_count();
    let budget = target.saturating_sub(current).saturating_mul(attempt_multiplier);
    let mut attempts = 0_usize;

    while current < target && attempts < budget {
        let pair = sample(rng, n, 2);
        if graph.insert_edge(pair.index(0), pair.index(1)) {
            current += 1;
        }
        attempts += 1;
    }
    (current, attempts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rstest::rstest;

    fn rng(seed: u64) -> SmallRng {
        SmallRng::seed_from_u64(seed)
    }

    #[rstest]
    #[case(0)]
    #[case(1)]
    #[case(10)]
    fn rejects_small_vertex_counts(#[case] n: usize) {
        let err = build(&mut rng(1), &GeneratorParams::default(), n, 30)
            .expect_err("small graphs must be rejected");
        assert_eq!(
            err,
            GeneratorError::VertexCountTooSmall {
                got: n,
                minimum: MIN_HAMILTONIAN_VERTICES,
            }
        );
    }

    #[test]
    fn rejects_saturation_above_hundred() {
        let err = build(&mut rng(1), &GeneratorParams::default(), 11, 101)
            .expect_err("saturation must be validated");
        assert_eq!(err, GeneratorError::SaturationOutOfRange { got: 101 });
    }

    #[test]
    fn seed_cycle_touches_every_vertex_twice() {
        let mut graph = Graph::empty(15);
        let protected = lay_seed_cycle(&mut rng(3), &mut graph);
        assert_eq!(graph.edge_count(), 15);
        assert_eq!(protected.len(), 15);
        assert!((0..15).all(|vertex| graph.degree(vertex) == Some(2)));
        assert!(protected.iter().all(|(u, v)| graph.contains_edge(u, v)));
    }

    #[rstest]
    #[case(11, 30)]
    #[case(11, 70)]
    #[case(20, 30)]
    #[case(20, 70)]
    fn densify_reaches_target_with_default_budget(#[case] n: usize, #[case] saturation: u8) {
        let mut graph = Graph::empty(n);
        let mut rng = rng(11);
        lay_seed_cycle(&mut rng, &mut graph);
        let target = target_edges(graph.max_edges(), saturation);
        let (reached, attempts) = densify(&mut rng, &mut graph, target, 20);
        assert_eq!(reached, target);
        assert_eq!(graph.edge_count(), target);
        assert!(attempts >= target - n);
    }

    #[test]
    fn densify_stops_when_budget_is_tiny() {
        let mut graph = Graph::empty(30);
        let mut rng = rng(5);
        lay_seed_cycle(&mut rng, &mut graph);
        let target = target_edges(graph.max_edges(), 100);
        let (reached, attempts) = densify(&mut rng, &mut graph, target, 1);
        assert_eq!(attempts, target - 30);
        assert!(reached < target);
    }

    #[test]
    fn densify_is_a_no_op_when_seed_cycle_meets_target() {
        let mut graph = Graph::empty(12);
        let mut rng = rng(9);
        lay_seed_cycle(&mut rng, &mut graph);
        let (reached, attempts) = densify(&mut rng, &mut graph, 0, 20);
        assert_eq!((reached, attempts), (12, 0));
    }

    #[test]
    fn build_reports_stats_and_even_degrees() {
        let generated = build(&mut rng(21), &GeneratorParams::default(), 14, 70)
            .expect("valid request");
        let stats = generated.stats();
        assert_eq!(stats.target_edges, 63);
        assert!(!stats.budget_exhausted);
        assert_eq!(stats.sampled_edges, 63);
        assert!(generated.graph().all_degrees_even());
        assert_eq!(
            generated.graph().edge_count(),
            stats.sampled_edges + stats.repair_edges_added - stats.repair_edges_removed
        );
    }
}
