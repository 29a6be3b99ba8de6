//! Benchmark parameter types.

use std::fmt;

use graphtour_core::DEFAULT_NON_HAMILTONIAN_SATURATION;

/// Which generator a fixture comes from.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FixtureKind {
    /// Hamiltonian graph with all-even degrees.
    Hamiltonian,
    /// Graph with one isolated vertex.
    NonHamiltonian,
}

/// Parameters for one benchmarked graph.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct GraphBenchParams {
    /// Generator used to build the fixture.
    pub kind: FixtureKind,
    /// Number of vertices.
    pub vertices: usize,
    /// Saturation in percent.
    pub saturation: u8,
}

impl GraphBenchParams {
    /// Hamiltonian fixture with `vertices` vertices at `saturation` percent.
    #[must_use]
    pub const fn hamiltonian(vertices: usize, saturation: u8) -> Self {
        Self {
            kind: FixtureKind::Hamiltonian,
            vertices,
            saturation,
        }
    }

    /// Non-Hamiltonian fixture with `vertices` vertices.
    #[must_use]
    pub const fn non_hamiltonian(vertices: usize) -> Self {
        Self {
            kind: FixtureKind::NonHamiltonian,
            vertices,
            saturation: DEFAULT_NON_HAMILTONIAN_SATURATION,
        }
    }
}

impl fmt::Display for GraphBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            FixtureKind::Hamiltonian => write!(f, "n={},s={}", self.vertices, self.saturation),
            FixtureKind::NonHamiltonian => write!(f, "n={},isolated", self.vertices),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(GraphBenchParams::hamiltonian(12, 30), "n=12,s=30")]
    #[case(GraphBenchParams::non_hamiltonian(20), "n=20,isolated")]
    fn labels_identify_fixture(#[case] params: GraphBenchParams, #[case] expected: &str) {
        assert_eq!(params.to_string(), expected);
    }
}
