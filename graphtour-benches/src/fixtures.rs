//! Seeded graph fixtures shared by the benchmarks.

use graphtour_core::{GeneratorParams, Graph, GraphGenerator, GraphOperations};

use crate::{
    error::BenchSetupError,
    params::{FixtureKind, GraphBenchParams},
};

/// Seed used for every fixture unless a benchmark overrides it.
pub const SEED: u64 = 42;

/// Builds a generator seeded with `seed`.
#[must_use]
pub fn seeded_generator(seed: u64) -> GraphGenerator {
    GraphGenerator::new(GeneratorParams::default().with_rng_seed(seed))
}

/// Generates the graph described by `params`.
///
/// # Errors
/// Returns [`BenchSetupError::Generator`] when the parameters are rejected.
pub fn build_graph(params: GraphBenchParams, seed: u64) -> Result<Graph, BenchSetupError> {
    let mut generator = seeded_generator(seed);
    let graph = match params.kind {
        FixtureKind::Hamiltonian => {
            generator.generate_hamiltonian_graph(params.vertices, params.saturation)?
        }
        FixtureKind::NonHamiltonian => generator.generate_non_hamiltonian_graph(params.vertices)?,
    };
    Ok(graph)
}

/// Generates the graph described by `params` and wraps it for searching.
///
/// # Errors
/// Returns [`BenchSetupError::Generator`] when the parameters are rejected.
pub fn build_operations(
    params: GraphBenchParams,
    seed: u64,
) -> Result<GraphOperations, BenchSetupError> {
    build_graph(params, seed).map(GraphOperations::new)
}
