//! Seeded random directed graph generators.
//!
//! Generators sample Erdős–Rényi style digraphs (self-loops allowed) and
//! optionally attach edge weights. Every generator owns a private engine
//! seeded once at construction, so its output sequence is a pure function of
//! its configuration and seed. Composite generators derive their children's
//! seeds from their own engine, one draw per child in a fixed order, which
//! keeps a whole pipeline reproducible from one top-level seed.
//!
//! # Examples
//! ```
//! use ergraph_core::{GraphGenerator, GraphModel, ModelGenerator};
//!
//! let model = GraphModel::Gnc { nodes: 100, expected_degree: 4.0 };
//! let mut first = ModelGenerator::new(model, 7).expect("valid model");
//! let mut second = ModelGenerator::new(model, 7).expect("valid model");
//! assert_eq!(first.generate(), second.generate());
//! ```
//!
//! # Metrics
//!
//! When the `metrics` feature is enabled the samplers emit:
//!
//! - `ergraph_graphs_generated` (counter)
//! - `ergraph_edges_generated` (counter)
//! - `ergraph_sinkless_degree_redraws` (counter)
#![cfg_attr(docsrs, feature(doc_cfg))]

mod choice;
mod error;
mod generator;
mod graph;
mod model;
mod sampling;
mod seed;
#[cfg(test)]
mod test_utils;
mod weight;
mod weighted;

pub use crate::{
    choice::choose,
    error::{GeneratorError, GeneratorErrorCode, GraphError, GraphErrorCode, Result},
    generator::{GraphGenerator, ModelGenerator},
    graph::{Graph, NodeId, WeightedGraph},
    model::{DensityRange, GraphModel, MinDegree, NodeRange, Probability},
    seed::{
        EntropySeedSource, GeneratorRng, Seed, SeedSource, Seedable, SequenceSeedSource,
        derive_child_seeds,
    },
    weight::{DistributionWeightGenerator, WeightDistribution, WeightGenerator},
    weighted::{DefaultWeightedGraphGenerator, WeightedGraphConfig, WeightedGraphGenerator},
};
