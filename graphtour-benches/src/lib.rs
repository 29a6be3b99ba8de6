//! Benchmark support crate for graphtour.
//!
//! Provides seeded graph fixtures and parameter types used by the Criterion
//! benchmarks for generation, the Euler circuit search and the Hamilton
//! cycle search.

pub mod error;
pub mod fixtures;
pub mod params;
