//! Unweighted graph generators.

use rand::Rng;
use tracing::{debug, instrument};

use crate::{
    error::Result,
    graph::Graph,
    model::{DensityRange, GraphModel, MinDegree, NodeRange, Probability},
    sampling::GnpSampler,
    seed::{GeneratorRng, Seed, SeedSource, Seedable},
};

/// Produces a fresh graph on every call.
///
/// Each call consumes randomness from the generator's own engine, so
/// successive calls yield independent samples.
pub trait GraphGenerator {
    /// Draws the next graph.
    fn generate(&mut self) -> Graph;
}

#[derive(Clone, Debug)]
enum Plan {
    Fixed(GnpSampler),
    Stochastic {
        nodes: NodeRange,
        density: DensityRange,
        by_degree: bool,
    },
}

/// Generator for any [`GraphModel`].
///
/// # Examples
/// ```
/// use ergraph_core::{GraphGenerator, ModelGenerator};
///
/// let mut generator = ModelGenerator::sinkless_gnp(5, 1.0, 42).expect("valid model");
/// let graph = generator.generate();
/// assert_eq!(graph.edge_count(), 25);
/// ```
#[derive(Clone, Debug)]
pub struct ModelGenerator {
    model: GraphModel,
    plan: Plan,
    rng: GeneratorRng,
}

impl ModelGenerator {
    /// Builds a generator for `model` seeded with `seed`.
    ///
    /// # Errors
    /// Returns [`crate::GeneratorError`] when the model fails validation.
    pub fn new(model: GraphModel, seed: Seed) -> Result<Self> {
        model.validate()?;
        let plan = match model {
            GraphModel::Gnp { nodes, probability }
            | GraphModel::SinklessGnp { nodes, probability } => Plan::Fixed(GnpSampler::new(
                nodes,
                Probability::new(probability)?,
                model.min_degree(),
            )),
            GraphModel::Gnc {
                nodes,
                expected_degree,
            }
            | GraphModel::SinklessGnc {
                nodes,
                expected_degree,
            } => Plan::Fixed(GnpSampler::new(
                nodes,
                Probability::from_expected_degree(nodes, expected_degree),
                model.min_degree(),
            )),
            GraphModel::UniformlyStochasticSinklessGnp { nodes, probability } => {
                Plan::Stochastic {
                    nodes,
                    density: probability,
                    by_degree: false,
                }
            }
            GraphModel::UniformlyStochasticSinklessGnc {
                nodes,
                expected_degree,
            } => Plan::Stochastic {
                nodes,
                density: expected_degree,
                by_degree: true,
            },
        };
        Ok(Self {
            model,
            plan,
            rng: GeneratorRng::new(seed),
        })
    }

    /// Gnp generator over `nodes` nodes with edge probability `probability`.
    ///
    /// # Errors
    /// Returns [`crate::GeneratorError::InvalidProbability`] when
    /// `probability` is outside `[0, 1]`.
    pub fn gnp(nodes: usize, probability: f64, seed: Seed) -> Result<Self> {
        Self::new(GraphModel::Gnp { nodes, probability }, seed)
    }

    /// Gnp generator in which no node has out-degree zero.
    ///
    /// # Errors
    /// Returns [`crate::GeneratorError`] when `probability` is outside
    /// `[0, 1]`, or zero while `nodes > 0`.
    pub fn sinkless_gnp(nodes: usize, probability: f64, seed: Seed) -> Result<Self> {
        Self::new(GraphModel::SinklessGnp { nodes, probability }, seed)
    }

    /// Gnp generator parametrized by expected out-degree.
    ///
    /// # Errors
    /// Returns [`crate::GeneratorError::InvalidExpectedDegree`] when
    /// `expected_degree` is negative or not finite.
    pub fn gnc(nodes: usize, expected_degree: f64, seed: Seed) -> Result<Self> {
        Self::new(
            GraphModel::Gnc {
                nodes,
                expected_degree,
            },
            seed,
        )
    }

    /// Sinkless Gnp generator parametrized by expected out-degree.
    ///
    /// # Errors
    /// Returns [`crate::GeneratorError`] when `expected_degree` is invalid, or
    /// zero while `nodes > 0`.
    pub fn sinkless_gnc(nodes: usize, expected_degree: f64, seed: Seed) -> Result<Self> {
        Self::new(
            GraphModel::SinklessGnc {
                nodes,
                expected_degree,
            },
            seed,
        )
    }

    /// Sinkless Gnp generator whose node count and probability are redrawn
    /// for every graph.
    ///
    /// # Errors
    /// Returns [`crate::GeneratorError`] when a range is inverted or the
    /// probability bounds are invalid.
    pub fn uniformly_stochastic_sinkless_gnp(
        nodes: NodeRange,
        probability: DensityRange,
        seed: Seed,
    ) -> Result<Self> {
        Self::new(
            GraphModel::UniformlyStochasticSinklessGnp { nodes, probability },
            seed,
        )
    }

    /// Sinkless Gnc generator whose node count and expected degree are
    /// redrawn for every graph.
    ///
    /// # Errors
    /// Returns [`crate::GeneratorError`] when a range is inverted or the
    /// expected-degree bounds are invalid.
    pub fn uniformly_stochastic_sinkless_gnc(
        nodes: NodeRange,
        expected_degree: DensityRange,
        seed: Seed,
    ) -> Result<Self> {
        Self::new(
            GraphModel::UniformlyStochasticSinklessGnc {
                nodes,
                expected_degree,
            },
            seed,
        )
    }

    /// Builds a generator for `model` with a seed drawn from `source`.
    ///
    /// # Errors
    /// Returns [`crate::GeneratorError`] when the model fails validation.
    pub fn from_source<S>(model: GraphModel, source: &mut S) -> Result<Self>
    where
        S: SeedSource + ?Sized,
    {
        <Self as Seedable>::from_source(&model, source)
    }

    /// Returns the model this generator samples.
    #[must_use]
    pub const fn model(&self) -> &GraphModel {
        &self.model
    }

    /// Returns the seed this generator was built from.
    #[must_use]
    pub const fn seed(&self) -> Seed {
        self.rng.seed()
    }
}

/// Draws the parameters of one stochastic round and the seed of the sinkless
/// generator that runs it, in that order.
fn sample_stochastic_round(
    rng: &mut GeneratorRng,
    nodes: NodeRange,
    density: DensityRange,
    by_degree: bool,
) -> Graph {
    let engine = rng.engine();
    let node_count = engine.gen_range(nodes.min..=nodes.max);
    let drawn: f64 = engine.gen_range(density.min..=density.max);
    let child_seed = rng.derive_seed();
    let probability = if by_degree {
        Probability::from_expected_degree(node_count, drawn)
    } else {
        Probability::saturating(drawn)
    };
    debug_assert!(
        node_count == 0 || !probability.is_zero(),
        "validated ranges never map a round to zero density"
    );
    debug!(
        nodes = node_count,
        density = drawn,
        child_seed,
        "drew stochastic model parameters"
    );
    let mut child_rng = GeneratorRng::new(child_seed);
    GnpSampler::new(node_count, probability, MinDegree::One).sample(child_rng.engine())
}

impl GraphGenerator for ModelGenerator {
    #[instrument(
        name = "generate_graph",
        level = "debug",
        skip(self),
        fields(model = self.model.name(), seed = self.rng.seed())
    )]
    fn generate(&mut self) -> Graph {
        let graph = match &self.plan {
            Plan::Fixed(sampler) => {
                debug!(
                    nodes = sampler.nodes(),
                    probability = sampler.probability().get(),
                    "sampling gnp graph"
                );
                sampler.sample(self.rng.engine())
            }
            &Plan::Stochastic {
                nodes,
                density,
                by_degree,
            } => sample_stochastic_round(&mut self.rng, nodes, density, by_degree),
        };
        debug!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "graph generated"
        );
        graph
    }
}

impl Seedable for ModelGenerator {
    type Config = GraphModel;

    fn from_seed(config: &Self::Config, seed: Seed) -> Result<Self> {
        Self::new(*config, seed)
    }

    fn seed(&self) -> Seed {
        self.rng.seed()
    }
}

#[cfg(test)]
mod tests;
