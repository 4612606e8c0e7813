//! Error types for the ergraph core library.
//!
//! Generator construction validates its configuration up front; sampling
//! itself never fails. Every error carries a stable machine-readable code.

use std::fmt;

use thiserror::Error;

use crate::graph::NodeId;

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
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// Error produced when a generator configuration is rejected at construction.
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum GeneratorError {
    /// Edge probability was not a finite value in `[0, 1]`.
    #[error("edge probability must lie in [0, 1] (got {got})")]
    InvalidProbability {
        /// The rejected probability.
        got: f64,
    },
    /// Expected out-degree was negative or not finite.
    #[error("expected out-degree must be finite and non-negative (got {got})")]
    InvalidExpectedDegree {
        /// The rejected expected degree.
        got: f64,
    },
    /// Node-count bounds were inverted.
    #[error("node range is inverted: min={min}, max={max}")]
    InvertedNodeRange {
        /// Lower node-count bound.
        min: usize,
        /// Upper node-count bound.
        max: usize,
    },
    /// Probability bounds were inverted.
    #[error("probability range is inverted: min={min}, max={max}")]
    InvertedProbabilityRange {
        /// Lower probability bound.
        min: f64,
        /// Upper probability bound.
        max: f64,
    },
    /// Expected-degree bounds were inverted.
    #[error("expected-degree range is inverted: min={min}, max={max}")]
    InvertedExpectedDegreeRange {
        /// Lower expected-degree bound.
        min: f64,
        /// Upper expected-degree bound.
        max: f64,
    },
    /// A sinkless model could be asked to draw a positive degree from a
    /// zero-density distribution, which never terminates.
    #[error("sinkless model `{model}` requires a strictly positive density")]
    SinklessWithoutEdges {
        /// Name of the offending model.
        model: &'static str,
    },
    /// A weight distribution had unusable parameters.
    #[error("invalid weight distribution: {reason}")]
    InvalidWeightDistribution {
        /// Human-readable description of the problem.
        reason: String,
    },
}

define_error_codes! {
    /// Stable codes describing [`GeneratorError`] variants.
    enum GeneratorErrorCode for GeneratorError {
        /// Edge probability was not a finite value in `[0, 1]`.
        InvalidProbability => InvalidProbability { .. } => "GENERATOR_INVALID_PROBABILITY",
        /// Expected out-degree was negative or not finite.
        InvalidExpectedDegree => InvalidExpectedDegree { .. } => "GENERATOR_INVALID_EXPECTED_DEGREE",
        /// Node-count bounds were inverted.
        InvertedNodeRange => InvertedNodeRange { .. } => "GENERATOR_INVERTED_NODE_RANGE",
        /// Probability bounds were inverted.
        InvertedProbabilityRange => InvertedProbabilityRange { .. } => "GENERATOR_INVERTED_PROBABILITY_RANGE",
        /// Expected-degree bounds were inverted.
        InvertedExpectedDegreeRange => InvertedExpectedDegreeRange { .. } => "GENERATOR_INVERTED_EXPECTED_DEGREE_RANGE",
        /// A sinkless model had zero density.
        SinklessWithoutEdges => SinklessWithoutEdges { .. } => "GENERATOR_SINKLESS_WITHOUT_EDGES",
        /// A weight distribution had unusable parameters.
        InvalidWeightDistribution => InvalidWeightDistribution { .. } => "GENERATOR_INVALID_WEIGHT_DISTRIBUTION",
    }
}

/// Error produced when assembling a graph from raw parts.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum GraphError {
    /// A neighbour id fell outside `[0, nodes)`.
    #[error("node {node} lists neighbour {neighbour} but the graph has {nodes} nodes")]
    NeighbourOutOfRange {
        /// Node whose neighbour set was invalid.
        node: NodeId,
        /// The out-of-range neighbour id.
        neighbour: NodeId,
        /// Number of nodes in the graph.
        nodes: usize,
    },
    /// The number of weights did not match the number of edges.
    #[error("graph has {edges} edges but {weights} weights were supplied")]
    WeightCountMismatch {
        /// Edges in the skeleton.
        edges: usize,
        /// Weights supplied.
        weights: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`GraphError`] variants.
    enum GraphErrorCode for GraphError {
        /// A neighbour id fell outside the node range.
        NeighbourOutOfRange => NeighbourOutOfRange { .. } => "GRAPH_NEIGHBOUR_OUT_OF_RANGE",
        /// Weights and edges differed in number.
        WeightCountMismatch => WeightCountMismatch { .. } => "GRAPH_WEIGHT_COUNT_MISMATCH",
    }
}

/// Convenient alias for results returned by generator constructors.
pub type Result<T> = core::result::Result<T, GeneratorError>;
