//! Composition of a graph generator with an edge-weight generator.

use tracing::{debug, instrument};

use crate::{
    error::Result,
    generator::{GraphGenerator, ModelGenerator},
    graph::WeightedGraph,
    seed::{GeneratorRng, Seed, SeedSource, Seedable},
    weight::{DistributionWeightGenerator, WeightGenerator},
};

/// Configuration of a [`WeightedGraphGenerator`]: one configuration per child.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WeightedGraphConfig<G, W> {
    /// Configuration of the graph child.
    pub graph: G,
    /// Configuration of the weight child.
    pub weights: W,
}

/// Generates weighted graphs by attaching one weight to every edge of a
/// freshly generated graph.
///
/// Child seeds are drawn from this generator's engine at construction time:
/// first the graph child's, then the weight child's.
///
/// # Examples
/// ```
/// use ergraph_core::{
///     DefaultWeightedGraphGenerator, GraphModel, WeightDistribution,
/// };
///
/// let mut generator = DefaultWeightedGraphGenerator::new(
///     &GraphModel::SinklessGnc { nodes: 8, expected_degree: 2.0 },
///     &WeightDistribution::DiscreteUniform { low: -5, high: 5 },
///     42,
/// )
/// .expect("valid configuration");
/// let weighted = generator.generate();
/// assert_eq!(weighted.node_count(), 8);
/// assert!(weighted.skeleton().is_sinkless());
/// ```
#[derive(Clone, Debug)]
pub struct WeightedGraphGenerator<G, W> {
    graph_generator: G,
    weight_generator: W,
    rng: GeneratorRng,
}

/// Weighted generator over a [`crate::GraphModel`] and a
/// [`crate::WeightDistribution`].
pub type DefaultWeightedGraphGenerator =
    WeightedGraphGenerator<ModelGenerator, DistributionWeightGenerator>;

impl<G, W> WeightedGraphGenerator<G, W>
where
    G: GraphGenerator + Seedable,
    W: WeightGenerator + Seedable,
{
    /// Builds both children from seeds derived from `seed`.
    ///
    /// # Errors
    /// Returns [`crate::GeneratorError`] when either child configuration is
    /// invalid.
    pub fn new(graph: &G::Config, weights: &W::Config, seed: Seed) -> Result<Self> {
        let mut rng = GeneratorRng::new(seed);
        let graph_seed = rng.derive_seed();
        let weight_seed = rng.derive_seed();
        debug!(seed, graph_seed, weight_seed, "derived child generator seeds");
        Ok(Self {
            graph_generator: G::from_seed(graph, graph_seed)?,
            weight_generator: W::from_seed(weights, weight_seed)?,
            rng,
        })
    }

    /// Builds the generator with a top-level seed drawn from `source`.
    ///
    /// # Errors
    /// Returns [`crate::GeneratorError`] when either child configuration is
    /// invalid.
    pub fn from_source<S>(graph: &G::Config, weights: &W::Config, source: &mut S) -> Result<Self>
    where
        S: SeedSource + ?Sized,
    {
        let seed = source.next_seed();
        debug!(seed, "drew generator seed from seed source");
        Self::new(graph, weights, seed)
    }

    /// Returns the top-level seed.
    #[must_use]
    pub const fn seed(&self) -> Seed {
        self.rng.seed()
    }

    /// Returns the seeds handed to the graph and weight children.
    #[must_use]
    pub fn child_seeds(&self) -> (Seed, Seed) {
        (self.graph_generator.seed(), self.weight_generator.seed())
    }

    /// Runs the graph child, then the weight child once per edge.
    #[instrument(
        name = "generate_weighted_graph",
        level = "debug",
        skip(self),
        fields(seed = self.rng.seed())
    )]
    pub fn generate(&mut self) -> WeightedGraph {
        let skeleton = self.graph_generator.generate();
        let weights = &mut self.weight_generator;
        let weighted = WeightedGraph::from_skeleton(&skeleton, |_, _| weights.generate());
        debug!(
            nodes = weighted.node_count(),
            edges = weighted.edge_count(),
            "weighted graph generated"
        );
        weighted
    }
}

impl<G, W> Seedable for WeightedGraphGenerator<G, W>
where
    G: GraphGenerator + Seedable,
    W: WeightGenerator + Seedable,
{
    type Config = WeightedGraphConfig<G::Config, W::Config>;

    fn from_seed(config: &Self::Config, seed: Seed) -> Result<Self> {
        Self::new(&config.graph, &config.weights, seed)
    }

    fn seed(&self) -> Seed {
        self.rng.seed()
    }
}
