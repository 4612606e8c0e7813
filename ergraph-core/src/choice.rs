//! Uniform selection of distinct neighbour ids.

use std::collections::BTreeSet;

use rand::{Rng, seq::index};

use crate::graph::NodeId;

/// Draws `min(count, nodes)` distinct ids uniformly from `[0, nodes)`.
///
/// The caller's engine is used so that the chosen ids are part of the
/// caller's deterministic stream.
///
/// # Examples
/// ```
/// use ergraph_core::choose;
/// use rand::{SeedableRng, rngs::SmallRng};
///
/// let mut rng = SmallRng::seed_from_u64(1);
/// let picked = choose(10, 4, &mut rng);
/// assert_eq!(picked.len(), 4);
/// assert!(picked.iter().all(|&id| id < 10));
/// ```
pub fn choose<R>(nodes: usize, count: usize, rng: &mut R) -> BTreeSet<NodeId>
where
    R: Rng + ?Sized,
{
    index::sample(rng, nodes, count.min(nodes))
        .into_iter()
        .collect()
}
