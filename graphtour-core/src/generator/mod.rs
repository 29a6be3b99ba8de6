//! Randomised construction of graphs with controlled structure.
//!
//! Two modes are supported:
//!
//! - Hamiltonian graphs: a random seed cycle guarantees a Hamilton cycle,
//!   random pairs raise density towards the requested saturation, and a
//!   parity-repair pass leaves every degree even so an Euler circuit exists.
//! - Non-Hamiltonian graphs: one vertex stays isolated, which rules out any
//!   Hamilton cycle, while the remaining vertices are wired densely.
//!
//! Randomness flows through a single [`SmallRng`]; seeding it through
//! [`GeneratorParams::with_rng_seed`] makes output reproducible.

mod hamiltonian;
mod non_hamiltonian;
mod params;
mod parity;


use rand::{SeedableRng, rngs::SmallRng};

use crate::{Graph, error::Result};

pub use self::params::{
    DEFAULT_ATTEMPT_MULTIPLIER, DEFAULT_NON_HAMILTONIAN_SATURATION, GeneratorParams,
};
pub use self::{
    hamiltonian::MIN_HAMILTONIAN_VERTICES, non_hamiltonian::MIN_NON_HAMILTONIAN_VERTICES,
};

/// Bookkeeping gathered while generating a graph.
///
/// Sampling is bounded by an attempt budget, so the realised density can fall
/// short of the target. These figures make that approximation observable.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct GenerationStats {
    /// Edge count requested by the saturation target.
    pub target_edges: usize,
    /// Edge count reached before parity repair.
    pub sampled_edges: usize,
    /// Random draws (Hamiltonian) or candidate pairs (non-Hamiltonian) consumed.
    pub attempts: usize,
    /// `true` when sampling stopped before reaching `target_edges`.
    pub budget_exhausted: bool,
    /// Edges inserted by parity repair.
    pub repair_edges_added: usize,
    /// Non-seed edges removed by parity repair when no insertion could help.
    pub repair_edges_removed: usize,
}

/// A generated graph together with its [`GenerationStats`].
#[derive(Clone, Debug)]
pub struct GeneratedGraph {
    graph: Graph,
    stats: GenerationStats,
}

impl GeneratedGraph {
    /// Returns the generated graph.
    #[must_use]
    #[rustfmt::skip]
    pub fn graph(&self) -> &Graph { &self.graph }

    /// Returns the generation statistics.
    #[must_use]
    #[rustfmt::skip]
    pub fn stats(&self) -> GenerationStats { self.stats }

    /// Consumes the wrapper and returns the graph.
    #[must_use]
    #[rustfmt::skip]
    pub fn into_graph(self) -> Graph { self.graph }
}

/// Produces random graphs with guaranteed structural properties.
///
/// # Examples
/// ```
/// use graphtour_core::{GraphGenerator, GraphOperations};
///
/// let mut generator = GraphGenerator::with_seed(42);
/// let graph = generator.generate_hamiltonian_graph(12, 30)?;
/// assert!(graph.all_degrees_even());
///
/// let operations = GraphOperations::new(graph);
/// assert!(operations.find_hamilton_cycle().is_some());
/// assert!(operations.find_euler_cycle().is_some());
/// # Ok::<(), graphtour_core::GeneratorError>(())
/// ```
#[derive(Clone, Debug)]
pub struct GraphGenerator {
    params: GeneratorParams,
    rng: SmallRng,
}

impl Default for GraphGenerator {
    fn default() -> Self {
        Self::new(GeneratorParams::default())
    }
}

impl GraphGenerator {
    /// Creates a generator from `params`, seeding from OS entropy when no seed
    /// is configured.
    #[must_use]
    pub fn new(params: GeneratorParams) -> Self {
        let rng = match params.rng_seed() {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };
        Self { params, rng }
    }

    /// Creates a deterministic generator with default parameters.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::new(GeneratorParams::default().with_rng_seed(seed))
    }

    /// Returns the parameters this generator was built with.
    #[must_use]
    pub fn params(&self) -> &GeneratorParams {
        &self.params
    }

    /// Generates a Hamiltonian graph on `n` vertices whose degrees are all
    /// even.
    ///
    /// # Errors
    /// Returns [`crate::GeneratorError::VertexCountTooSmall`] when `n <= 10`
    /// and [`crate::GeneratorError::SaturationOutOfRange`] when
    /// `saturation > 100`.
    pub fn generate_hamiltonian_graph(&mut self, n: usize, saturation: u8) -> Result<Graph> {
        self.generate_hamiltonian(n, saturation)
            .map(GeneratedGraph::into_graph)
    }

    /// Like [`Self::generate_hamiltonian_graph`] but also reports
    /// [`GenerationStats`].
    ///
    /// # Errors
    /// See [`Self::generate_hamiltonian_graph`].
    pub fn generate_hamiltonian(&mut self, n: usize, saturation: u8) -> Result<GeneratedGraph> {
        hamiltonian::build(&mut self.rng, &self.params, n, saturation)
    }

    /// Generates a graph on `n` vertices with one isolated vertex, which
    /// therefore has no Hamilton cycle.
    ///
    /// # Errors
    /// Returns [`crate::GeneratorError::VertexCountTooSmall`] when `n <= 1`.
    pub fn generate_non_hamiltonian_graph(&mut self, n: usize) -> Result<Graph> {
        self.generate_non_hamiltonian(n)
            .map(GeneratedGraph::into_graph)
    }

    /// Like [`Self::generate_non_hamiltonian_graph`] but also reports
    /// [`GenerationStats`].
    ///
    /// # Errors
    /// See [`Self::generate_non_hamiltonian_graph`].
    pub fn generate_non_hamiltonian(&mut self, n: usize) -> Result<GeneratedGraph> {
        non_hamiltonian::build(&mut self.rng, &self.params, n)
    }
}
