//! Shared test utilities used across graphtour crates.

pub mod ci;
pub mod tracing;
