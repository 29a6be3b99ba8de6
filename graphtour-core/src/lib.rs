//! Graphtour core library.
//!
//! Generates random graphs with a guaranteed Hamilton cycle and all-even
//! degrees, or with an isolated vertex that rules one out, and analyses them
//! with Hierholzer's Euler circuit construction and an exhaustive Hamilton
//! cycle search.

mod cycle;
mod error;
mod generator;
mod graph;
mod operations;

#[cfg(test)]
mod test_utils;

pub use crate::{
    cycle::Cycle,
    error::{GeneratorError, GeneratorErrorCode, GraphError, GraphErrorCode, Result},
    generator::{
        DEFAULT_ATTEMPT_MULTIPLIER, DEFAULT_NON_HAMILTONIAN_SATURATION, GeneratedGraph,
        GenerationStats, GeneratorParams, GraphGenerator, MIN_HAMILTONIAN_VERTICES,
        MIN_NON_HAMILTONIAN_VERTICES,
    },
    graph::{Graph, Parity, max_edges},
    operations::{GraphOperations, GraphReport, VertexRow},
};
