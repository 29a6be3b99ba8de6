//! Parameter handling for the graph generator.

use crate::error::GeneratorError;

/// Multiplier applied to the number of missing edges to bound random
/// sampling attempts.
pub const DEFAULT_ATTEMPT_MULTIPLIER: usize = 20;

/// Target saturation used by non-Hamiltonian generation.
pub const DEFAULT_NON_HAMILTONIAN_SATURATION: u8 = 50;

/// Configuration for [`crate::GraphGenerator`].
///
/// # Examples
/// ```
/// use graphtour_core::GeneratorParams;
///
/// let params = GeneratorParams::default()
///     .with_rng_seed(7)
///     .with_attempt_multiplier(40)?;
/// assert_eq!(params.rng_seed(), Some(7));
/// assert_eq!(params.attempt_multiplier(), 40);
/// # Ok::<(), graphtour_core::GeneratorError>(())
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GeneratorParams {
    rng_seed: Option<u64>,
    attempt_multiplier: usize,
    non_hamiltonian_saturation: u8,
}

impl Default for GeneratorParams {
    fn default() -> Self {
        Self {
            rng_seed: None,
            attempt_multiplier: DEFAULT_ATTEMPT_MULTIPLIER,
            non_hamiltonian_saturation: DEFAULT_NON_HAMILTONIAN_SATURATION,
        }
    }
}

impl GeneratorParams {
    /// Seeds the generator RNG so output is reproducible.
    #[must_use]
    pub fn with_rng_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }

    /// Overrides the sampling attempt multiplier.
    ///
    /// # Errors
    /// Returns [`GeneratorError::InvalidParameters`] when `multiplier` is zero.
    pub fn with_attempt_multiplier(mut self, multiplier: usize) -> Result<Self, GeneratorError> {
        if multiplier == 0 {
            return Err(GeneratorError::InvalidParameters {
                reason: "attempt_multiplier must be greater than zero".into(),
            });
        }
        self.attempt_multiplier = multiplier;
        Ok(self)
    }

    /// Overrides the edge density targeted by non-Hamiltonian generation.
    ///
    /// # Errors
    /// Returns [`GeneratorError::SaturationOutOfRange`] above 100 percent.
    pub fn with_non_hamiltonian_saturation(mut self, saturation: u8) -> Result<Self, GeneratorError> {
        validate_saturation(saturation)?;
        self.non_hamiltonian_saturation = saturation;
        Ok(self)
    }

    /// Returns the configured RNG seed, if any.
    #[must_use]
    pub fn rng_seed(&self) -> Option<u64> {
        self.rng_seed
    }

    /// Returns the sampling attempt multiplier.
    #[must_use]
    pub fn attempt_multiplier(&self) -> usize {
        self.attempt_multiplier
    }

    /// Returns the saturation targeted by non-Hamiltonian generation.
    #[must_use]
    pub fn non_hamiltonian_saturation(&self) -> u8 {
        self.non_hamiltonian_saturation
    }
}

pub(super) fn validate_saturation(saturation: u8) -> Result<(), GeneratorError> {
    if saturation > 100 {
        return Err(GeneratorError::SaturationOutOfRange { got: saturation });
    }
    Ok(())
}

/// Computes `floor(max_edges * saturation / 100)` without overflowing.
pub(super) fn target_edges(max_edges: usize, saturation: u8) -> usize {
    let saturation = usize::from(saturation);
    (max_edges / 100) * saturation + (max_edges % 100) * saturation / 100
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn defaults_match_documented_constants() {
        let params = GeneratorParams::default();
        assert_eq!(params.rng_seed(), None);
        assert_eq!(params.attempt_multiplier(), DEFAULT_ATTEMPT_MULTIPLIER);
        assert_eq!(
            params.non_hamiltonian_saturation(),
            DEFAULT_NON_HAMILTONIAN_SATURATION
        );
    }

    #[test]
    fn zero_attempt_multiplier_is_rejected() {
        let err = GeneratorParams::default()
            .with_attempt_multiplier(0)
            .expect_err("zero multiplier must fail");
        assert!(matches!(err, GeneratorError::InvalidParameters { .. }));
    }

    #[test]
    fn non_hamiltonian_saturation_above_hundred_is_rejected() {
        let err = GeneratorParams::default()
            .with_non_hamiltonian_saturation(101)
            .expect_err("saturation above 100 must fail");
        assert_eq!(err, GeneratorError::SaturationOutOfRange { got: 101 });
    }

    #[rstest]
    #[case(55, 30, 16)]
    #[case(55, 70, 38)]
    #[case(55, 50, 27)]
    #[case(45, 100, 45)]
    #[case(1, 50, 0)]
    #[case(1_225, 30, 367)]
    fn target_edges_floors_the_percentage(
        #[case] max_edges: usize,
        #[case] saturation: u8,
        #[case] expected: usize,
    ) {
        assert_eq!(target_edges(max_edges, saturation), expected);
        assert_eq!(expected, max_edges * usize::from(saturation) / 100);
    }
}
