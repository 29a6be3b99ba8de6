//! Error types for the graphtour core library.
//!
//! Defines the error enums exposed by the public API together with stable,
//! machine-readable codes for logging surfaces.

use std::fmt;

use thiserror::Error;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// An error produced while building a [`crate::Graph`] from caller-supplied
/// adjacency data.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum GraphError {
    /// A neighbour id referenced a vertex outside `0..vertex_count`.
    #[error("vertex {vertex} is out of range for a graph with {vertex_count} vertices")]
    VertexOutOfRange {
        /// The offending vertex id.
        vertex: usize,
        /// Number of vertices in the graph.
        vertex_count: usize,
    },
    /// A vertex listed itself as a neighbour.
    #[error("vertex {vertex} has a self-loop")]
    SelfLoop {
        /// Vertex carrying the loop.
        vertex: usize,
    },
    /// `to` appears in the adjacency of `from` but not the other way round.
    #[error("edge {from}->{to} is missing the reverse link")]
    AsymmetricEdge {
        /// Vertex listing the one-way neighbour.
        from: usize,
        /// Neighbour lacking the reverse entry.
        to: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`GraphError`] variants.
    enum GraphErrorCode for GraphError {
        /// A neighbour id referenced a vertex outside the graph.
        VertexOutOfRange => VertexOutOfRange { .. } => "GRAPH_VERTEX_OUT_OF_RANGE",
        /// A vertex listed itself as a neighbour.
        SelfLoop => SelfLoop { .. } => "GRAPH_SELF_LOOP",
        /// Adjacency was not symmetric.
        AsymmetricEdge => AsymmetricEdge { .. } => "GRAPH_ASYMMETRIC_EDGE",
    }
}

/// Error type produced when validating generator requests.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum GeneratorError {
    /// The requested vertex count is below the minimum for the chosen mode.
    #[error("vertex count must be at least {minimum} (got {got})")]
    VertexCountTooSmall {
        /// Vertex count supplied by the caller.
        got: usize,
        /// Smallest accepted vertex count.
        minimum: usize,
    },
    /// Saturation percentages must lie within `0..=100`.
    #[error("saturation must be between 0 and 100 percent (got {got})")]
    SaturationOutOfRange {
        /// Saturation supplied by the caller.
        got: u8,
    },
    /// Generator parameters failed validation.
    #[error("invalid generator parameters: {reason}")]
    InvalidParameters {
        /// Human-readable explanation.
        reason: String,
    },
}

define_error_codes! {
    /// Stable codes describing [`GeneratorError`] variants.
    enum GeneratorErrorCode for GeneratorError {
        /// The requested vertex count is below the minimum for the chosen mode.
        VertexCountTooSmall => VertexCountTooSmall { .. } => "GENERATOR_VERTEX_COUNT_TOO_SMALL",
        /// Saturation percentages must lie within `0..=100`.
        SaturationOutOfRange => SaturationOutOfRange { .. } => "GENERATOR_SATURATION_OUT_OF_RANGE",
        /// Generator parameters failed validation.
        InvalidParameters => InvalidParameters { .. } => "GENERATOR_INVALID_PARAMETERS",
    }
}

/// Convenient alias for results returned by the generator API.
pub type Result<T> = core::result::Result<T, GeneratorError>;
