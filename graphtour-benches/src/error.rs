//! Benchmark setup error type.
//!
//! Lets setup functions propagate failures with `?` instead of using
//! `.expect()`.

use graphtour_core::GeneratorError;

/// Errors that may occur during benchmark setup.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// Graph generation rejected the fixture parameters.
    #[error("graph generation failed: {0}")]
    Generator(#[from] GeneratorError),
}
