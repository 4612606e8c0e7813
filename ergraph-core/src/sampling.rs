//! The Gnp sampling routine shared by every graph model.

use rand::Rng;
use rand_distr::{Binomial, Distribution};

use crate::{
    choice::choose,
    graph::Graph,
    model::{MinDegree, Probability},
};

/// Samples Gnp graphs with a fixed node count, probability and degree floor.
#[derive(Clone, Debug)]
pub(crate) struct GnpSampler {
    nodes: usize,
    probability: Probability,
    min_degree: MinDegree,
    degrees: Binomial,
}

impl GnpSampler {
    pub(crate) fn new(nodes: usize, probability: Probability, min_degree: MinDegree) -> Self {
        let degrees = Binomial::new(nodes as u64, probability.get())
            .expect("validated probability lies in [0, 1]");
        Self {
            nodes,
            probability,
            min_degree,
            degrees,
        }
    }

    pub(crate) const fn nodes(&self) -> usize {
        self.nodes
    }

    pub(crate) const fn probability(&self) -> Probability {
        self.probability
    }

    /// Draws one graph.
    ///
    /// For each node in ascending order an out-degree is drawn (redrawn while
    /// below the degree floor) and that many distinct neighbours are chosen
    /// from all nodes, the node itself included.
    ///
    /// A positive floor with zero probability never terminates; models reject
    /// that combination before a sampler is built.
    pub(crate) fn sample<R>(&self, rng: &mut R) -> Graph
    where
        R: Rng + ?Sized,
    {
        let floor = self.min_degree.floor();
        let mut graph = Graph::empty(self.nodes);
        let mut redraws = 0_u64;
        for node in 0..self.nodes {
            let mut degree = self.degrees.sample(rng);
            while degree < floor {
                redraws += 1;
                degree = self.degrees.sample(rng);
            }
            let degree = usize::try_from(degree).unwrap_or(usize::MAX);
            graph.set_neighbours(node, choose(self.nodes, degree, rng));
        }
        record_sample(graph.edge_count(), redraws);
        graph
    }
}

#[cfg(feature = "metrics")]
fn record_sample(edges: usize, redraws: u64) {
    metrics::counter!("ergraph_graphs_generated").increment(1);
    metrics::counter!("ergraph_edges_generated").increment(edges as u64);
    metrics::counter!("ergraph_sinkless_degree_redraws").increment(redraws);
}

#[cfg(not(feature = "metrics"))]
fn record_sample(_edges: usize, _redraws: u64) {}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::SmallRng};
    use rstest::rstest;

    fn sampler(nodes: usize, probability: f64, min_degree: MinDegree) -> GnpSampler {
        GnpSampler::new(
            nodes,
            Probability::new(probability).expect("probability is valid"),
            min_degree,
        )
    }

    #[rstest]
    #[case(MinDegree::Zero)]
    #[case(MinDegree::One)]
    fn probability_one_gives_complete_digraph(#[case] min_degree: MinDegree) {
        let mut rng = SmallRng::seed_from_u64(42);
        let graph = sampler(5, 1.0, min_degree).sample(&mut rng);
        let everyone: std::collections::BTreeSet<usize> = (0..5).collect();
        for node in 0..5 {
            assert_eq!(graph.neighbours(node), Some(&everyone));
        }
    }

    #[test]
    fn probability_zero_gives_empty_graph() {
        let mut rng = SmallRng::seed_from_u64(42);
        let graph = sampler(5, 0.0, MinDegree::Zero).sample(&mut rng);
        assert_eq!(graph, Graph::empty(5));
    }

    #[test]
    fn zero_nodes_gives_empty_graph_even_when_sinkless() {
        let mut rng = SmallRng::seed_from_u64(1);
        let graph = sampler(0, 0.0, MinDegree::One).sample(&mut rng);
        assert_eq!(graph.node_count(), 0);
    }

    #[test]
    fn degree_floor_removes_sinks() {
        let mut rng = SmallRng::seed_from_u64(7);
        let sinkless = sampler(200, 0.002, MinDegree::One);
        for _ in 0..5 {
            assert!(sinkless.sample(&mut rng).is_sinkless());
        }
    }

    #[test]
    fn sparse_unfloored_graphs_keep_sinks() {
        let mut rng = SmallRng::seed_from_u64(7);
        let graph = sampler(200, 0.002, MinDegree::Zero).sample(&mut rng);
        assert!(!graph.is_sinkless());
    }

    #[test]
    fn mean_degree_tracks_binomial_expectation() {
        let nodes = 2_000;
        let probability = 0.01;
        let mut rng = SmallRng::seed_from_u64(2024);
        let graph = sampler(nodes, probability, MinDegree::Zero).sample(&mut rng);
        let expected = nodes as f64 * probability;
        // Standard error of the mean is sqrt(n p (1 - p) / n), about 0.1 here.
        let tolerance = 5.0 * (expected * (1.0 - probability) / nodes as f64).sqrt();
        let observed = graph.mean_out_degree();
        assert!(
            (observed - expected).abs() < tolerance,
            "mean out-degree {observed} should be within {tolerance} of {expected}",
        );
    }
}
