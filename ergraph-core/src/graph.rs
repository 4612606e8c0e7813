//! Directed graph values produced by the generators.
//!
//! A [`Graph`] stores one ordered out-neighbour set per node; the position in
//! the adjacency list is the node id. Self-loops are allowed and duplicate
//! edges are impossible by construction. A [`WeightedGraph`] is always built
//! from a [`Graph`] skeleton and carries exactly one weight per edge.

use std::collections::{BTreeMap, BTreeSet};

use crate::error::GraphError;

/// Identifier of a node, always in `[0, node_count)`.
pub type NodeId = usize;

/// Directed graph stored as per-node out-neighbour sets.
///
/// # Examples
/// ```
/// use ergraph_core::Graph;
///
/// let graph = Graph::from_adjacency(vec![[1].into(), [0, 1].into()])
///     .expect("neighbours are in range");
/// assert_eq!(graph.node_count(), 2);
/// assert_eq!(graph.edge_count(), 3);
/// assert!(graph.is_sinkless());
/// ```
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct Graph {
    adjacency: Vec<BTreeSet<NodeId>>,
}

impl Graph {
    /// Creates a graph with `nodes` nodes and no edges.
    #[must_use]
    pub fn empty(nodes: usize) -> Self {
        Self {
            adjacency: vec![BTreeSet::new(); nodes],
        }
    }

    /// Builds a graph from raw adjacency sets.
    ///
    /// # Errors
    /// Returns [`GraphError::NeighbourOutOfRange`] when a set names a node id
    /// outside `[0, adjacency.len())`.
    pub fn from_adjacency(adjacency: Vec<BTreeSet<NodeId>>) -> Result<Self, GraphError> {
        let nodes = adjacency.len();
        for (node, neighbours) in adjacency.iter().enumerate() {
            // Sets are ordered, so only the largest id can be out of range.
            if let Some(&neighbour) = neighbours.last() {
                if neighbour >= nodes {
                    return Err(GraphError::NeighbourOutOfRange {
                        node,
                        neighbour,
                        nodes,
                    });
                }
            }
        }
        Ok(Self { adjacency })
    }

    pub(crate) fn set_neighbours(&mut self, node: NodeId, neighbours: BTreeSet<NodeId>) {
        if let Some(slot) = self.adjacency.get_mut(node) {
            *slot = neighbours;
        }
    }

    /// Returns the number of nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Returns the total number of directed edges, self-loops included.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(BTreeSet::len).sum()
    }

    /// Returns the out-neighbours of `node`, or `None` when it does not exist.
    #[must_use]
    pub fn neighbours(&self, node: NodeId) -> Option<&BTreeSet<NodeId>> {
        self.adjacency.get(node)
    }

    /// Returns the out-degree of `node`, or `None` when it does not exist.
    #[must_use]
    pub fn out_degree(&self, node: NodeId) -> Option<usize> {
        self.adjacency.get(node).map(BTreeSet::len)
    }

    /// Returns `true` when `(from, to)` is an edge.
    #[must_use]
    pub fn contains_edge(&self, from: NodeId, to: NodeId) -> bool {
        self.adjacency
            .get(from)
            .is_some_and(|neighbours| neighbours.contains(&to))
    }

    /// Iterates over every edge, by ascending source then ascending target.
    pub fn edges(&self) -> impl Iterator<Item = (NodeId, NodeId)> + '_ {
        self.adjacency
            .iter()
            .enumerate()
            .flat_map(|(from, neighbours)| neighbours.iter().map(move |&to| (from, to)))
    }

    /// Returns `true` when every node has at least one out-neighbour.
    ///
    /// The empty graph is vacuously sinkless.
    #[must_use]
    pub fn is_sinkless(&self) -> bool {
        self.adjacency.iter().all(|neighbours| !neighbours.is_empty())
    }

    /// Mean out-degree over all nodes, `0.0` for the empty graph.
    #[must_use]
    pub fn mean_out_degree(&self) -> f64 {
        if self.adjacency.is_empty() {
            return 0.0;
        }
        self.edge_count() as f64 / self.adjacency.len() as f64
    }

    /// Consumes the graph and returns its adjacency sets.
    #[must_use]
    pub fn into_adjacency(self) -> Vec<BTreeSet<NodeId>> {
        self.adjacency
    }
}

/// Directed graph carrying one real-valued weight per edge.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WeightedGraph {
    adjacency: Vec<BTreeMap<NodeId, f64>>,
}

impl WeightedGraph {
    /// Attaches weights to every edge of `skeleton`.
    ///
    /// `weight` is called exactly once per edge, in the order of
    /// [`Graph::edges`].
    ///
    /// # Examples
    /// ```
    /// use ergraph_core::{Graph, WeightedGraph};
    ///
    /// let skeleton = Graph::from_adjacency(vec![[0, 1].into(), [].into()])
    ///     .expect("neighbours are in range");
    /// let weighted = WeightedGraph::from_skeleton(&skeleton, |from, to| (from + to) as f64);
    /// assert_eq!(weighted.weight(0, 1), Some(1.0));
    /// assert_eq!(weighted.skeleton(), skeleton);
    /// ```
    pub fn from_skeleton<F>(skeleton: &Graph, mut weight: F) -> Self
    where
        F: FnMut(NodeId, NodeId) -> f64,
    {
        let adjacency = skeleton
            .adjacency
            .iter()
            .enumerate()
            .map(|(from, neighbours)| {
                neighbours
                    .iter()
                    .map(|&to| (to, weight(from, to)))
                    .collect::<BTreeMap<_, _>>()
            })
            .collect();
        Self { adjacency }
    }

    /// Pairs `weights` with the edges of `skeleton` in edge order.
    ///
    /// Inverse of splitting a weighted graph into [`WeightedGraph::skeleton`]
    /// and its weights.
    ///
    /// # Errors
    /// Returns [`GraphError::WeightCountMismatch`] unless there is exactly
    /// one weight per edge.
    pub fn from_parts(skeleton: &Graph, weights: Vec<f64>) -> Result<Self, GraphError> {
        let edges = skeleton.edge_count();
        if weights.len() != edges {
            return Err(GraphError::WeightCountMismatch {
                edges,
                weights: weights.len(),
            });
        }
        let mut weights = weights.into_iter();
        Ok(Self::from_skeleton(skeleton, |_, _| {
            weights.next().unwrap_or_default()
        }))
    }

    /// Returns the number of nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Returns the total number of weighted edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(BTreeMap::len).sum()
    }

    /// Returns the weighted out-neighbours of `node`.
    #[must_use]
    pub fn neighbours(&self, node: NodeId) -> Option<&BTreeMap<NodeId, f64>> {
        self.adjacency.get(node)
    }

    /// Returns the weight of `(from, to)`, or `None` when it is not an edge.
    #[must_use]
    pub fn weight(&self, from: NodeId, to: NodeId) -> Option<f64> {
        self.adjacency
            .get(from)
            .and_then(|neighbours| neighbours.get(&to))
            .copied()
    }

    /// Iterates over `(from, to, weight)` triples in edge order.
    pub fn edges(&self) -> impl Iterator<Item = (NodeId, NodeId, f64)> + '_ {
        self.adjacency.iter().enumerate().flat_map(|(from, neighbours)| {
            neighbours
                .iter()
                .map(move |(&to, &weight)| (from, to, weight))
        })
    }

    /// Sum of all edge weights.
    #[must_use]
    pub fn total_weight(&self) -> f64 {
        self.edges().map(|(_, _, weight)| weight).sum()
    }

    /// Drops the weights and returns the underlying unweighted graph.
    #[must_use]
    pub fn skeleton(&self) -> Graph {
        Graph {
            adjacency: self
                .adjacency
                .iter()
                .map(|neighbours| neighbours.keys().copied().collect())
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn sample_graph() -> Graph {
        Graph::from_adjacency(vec![[0, 2].into(), BTreeSet::new(), [1].into()])
            .expect("neighbours are in range")
    }

    #[test]
    fn rejects_out_of_range_neighbour() {
        let err = Graph::from_adjacency(vec![[0].into(), [2].into()])
            .expect_err("neighbour 2 is out of range");
        assert_eq!(
            err,
            GraphError::NeighbourOutOfRange {
                node: 1,
                neighbour: 2,
                nodes: 2,
            }
        );
        assert_eq!(err.code().as_str(), "GRAPH_NEIGHBOUR_OUT_OF_RANGE");
    }

    #[test]
    fn edges_are_ordered_by_source_then_target() {
        let edges: Vec<_> = sample_graph().edges().collect();
        assert_eq!(edges, vec![(0, 0), (0, 2), (2, 1)]);
    }

    #[rstest]
    #[case(0, Some(2))]
    #[case(1, Some(0))]
    #[case(2, Some(1))]
    #[case(3, None)]
    fn reports_out_degree(#[case] node: NodeId, #[case] expected: Option<usize>) {
        assert_eq!(sample_graph().out_degree(node), expected);
    }

    #[test]
    fn sinkless_detection() {
        assert!(!sample_graph().is_sinkless());
        assert!(Graph::empty(0).is_sinkless());
        assert!(!Graph::empty(3).is_sinkless());
    }

    #[test]
    fn mean_out_degree_of_empty_graph_is_zero() {
        assert!(Graph::empty(0).mean_out_degree().abs() < f64::EPSILON);
        assert!((sample_graph().mean_out_degree() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn weighted_graph_preserves_skeleton() {
        let skeleton = sample_graph();
        let mut calls = 0_u32;
        let weighted = WeightedGraph::from_skeleton(&skeleton, |_, _| {
            calls += 1;
            f64::from(calls)
        });
        assert_eq!(calls as usize, skeleton.edge_count());
        assert_eq!(weighted.skeleton(), skeleton);
        assert_eq!(weighted.weight(0, 0), Some(1.0));
        assert_eq!(weighted.weight(0, 2), Some(2.0));
        assert_eq!(weighted.weight(2, 1), Some(3.0));
        assert_eq!(weighted.weight(1, 0), None);
        assert!((weighted.total_weight() - 6.0).abs() < f64::EPSILON);
    }

    #[test]
    fn from_parts_pairs_weights_in_edge_order() {
        let skeleton = sample_graph();
        let weighted = WeightedGraph::from_parts(&skeleton, vec![0.5, -1.0, 4.0])
            .expect("one weight per edge");
        let triples: Vec<_> = weighted.edges().collect();
        assert_eq!(triples, vec![(0, 0, 0.5), (0, 2, -1.0), (2, 1, 4.0)]);
        let weights = triples.iter().map(|&(_, _, w)| w).collect();
        assert_eq!(
            WeightedGraph::from_parts(&weighted.skeleton(), weights),
            Ok(weighted)
        );
    }

    #[rstest]
    #[case(vec![])]
    #[case(vec![1.0, 2.0])]
    #[case(vec![1.0, 2.0, 3.0, 4.0])]
    fn from_parts_rejects_weight_count_mismatch(#[case] weights: Vec<f64>) {
        let supplied = weights.len();
        let err = WeightedGraph::from_parts(&sample_graph(), weights)
            .expect_err("weight count must match edge count");
        assert_eq!(
            err,
            GraphError::WeightCountMismatch {
                edges: 3,
                weights: supplied,
            }
        );
        assert_eq!(err.code().as_str(), "GRAPH_WEIGHT_COUNT_MISMATCH");
    }
}
