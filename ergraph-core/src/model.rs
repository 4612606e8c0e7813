//! Random graph model descriptions and their validation.
//!
//! The models form a closed set. All of them run through one Gnp sampling
//! routine; they differ only in how the edge probability is obtained and in
//! the minimum out-degree enforced per node.

use crate::error::{GeneratorError, Result};

/// Edge probability validated to lie in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Probability(f64);

impl Probability {
    /// Validates `value` as an edge probability.
    ///
    /// # Errors
    /// Returns [`GeneratorError::InvalidProbability`] when `value` is not a
    /// finite number in `[0, 1]`.
    pub fn new(value: f64) -> Result<Self> {
        if value.is_finite() && (0.0..=1.0).contains(&value) {
            Ok(Self(value))
        } else {
            Err(GeneratorError::InvalidProbability { got: value })
        }
    }

    /// Maps an expected out-degree to `min(degree / nodes, 1)`.
    ///
    /// An empty graph has no candidates, so `nodes == 0` maps to zero.
    #[must_use]
    pub fn from_expected_degree(nodes: usize, degree: f64) -> Self {
        if nodes == 0 {
            return Self(0.0);
        }
        Self::saturating(degree / nodes as f64)
    }

    /// Clamps `value` into `[0, 1]`, mapping NaN to zero.
    pub(crate) fn saturating(value: f64) -> Self {
        if value.is_nan() {
            Self(0.0)
        } else {
            Self(value.clamp(0.0, 1.0))
        }
    }

    /// Returns the raw probability.
    #[must_use]
    pub const fn get(self) -> f64 {
        self.0
    }

    /// Returns `true` when no edge can ever be drawn.
    #[must_use]
    pub fn is_zero(self) -> bool {
        self.0 <= 0.0
    }
}

/// Lower bound on every node's out-degree.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MinDegree {
    /// Nodes may have no out-neighbours.
    Zero,
    /// Every node has at least one out-neighbour.
    One,
}

impl MinDegree {
    pub(crate) const fn floor(self) -> u64 {
        match self {
            Self::Zero => 0,
            Self::One => 1,
        }
    }
}

/// Inclusive node-count range for the uniformly stochastic models.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct NodeRange {
    /// Smallest node count that may be drawn.
    pub min: usize,
    /// Largest node count that may be drawn.
    pub max: usize,
}

impl NodeRange {
    /// Creates a range covering `min..=max`.
    #[must_use]
    pub const fn new(min: usize, max: usize) -> Self {
        Self { min, max }
    }

    fn validate(self) -> Result<()> {
        if self.min > self.max {
            return Err(GeneratorError::InvertedNodeRange {
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }
}

/// Inclusive real-valued range for probabilities or expected degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DensityRange {
    /// Smallest value that may be drawn.
    pub min: f64,
    /// Largest value that may be drawn.
    pub max: f64,
}

impl DensityRange {
    /// Creates a range covering `[min, max]`.
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }
}

/// A random directed graph model.
///
/// Self-loops are candidate edges in every model.
///
/// # Examples
/// ```
/// use ergraph_core::{GraphModel, MinDegree};
///
/// let model = GraphModel::SinklessGnc { nodes: 10, expected_degree: 3.0 };
/// assert_eq!(model.name(), "sinkless_gnc");
/// assert_eq!(model.min_degree(), MinDegree::One);
/// assert!(model.validate().is_ok());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GraphModel {
    /// Each node draws a `Binomial(nodes, probability)` out-degree.
    Gnp {
        /// Number of nodes.
        nodes: usize,
        /// Probability of each candidate edge.
        probability: f64,
    },
    /// [`GraphModel::Gnp`] with the degree redrawn until positive.
    SinklessGnp {
        /// Number of nodes.
        nodes: usize,
        /// Probability of each candidate edge.
        probability: f64,
    },
    /// [`GraphModel::Gnp`] parametrized by expected out-degree.
    Gnc {
        /// Number of nodes.
        nodes: usize,
        /// Target expected out-degree; saturates at `nodes`.
        expected_degree: f64,
    },
    /// [`GraphModel::SinklessGnp`] parametrized by expected out-degree.
    SinklessGnc {
        /// Number of nodes.
        nodes: usize,
        /// Target expected out-degree; saturates at `nodes`.
        expected_degree: f64,
    },
    /// Draws the node count and probability anew for every graph, then runs
    /// [`GraphModel::SinklessGnp`].
    UniformlyStochasticSinklessGnp {
        /// Node-count bounds.
        nodes: NodeRange,
        /// Probability bounds.
        probability: DensityRange,
    },
    /// Draws the node count and expected degree anew for every graph, then
    /// runs [`GraphModel::SinklessGnc`].
    UniformlyStochasticSinklessGnc {
        /// Node-count bounds.
        nodes: NodeRange,
        /// Expected-degree bounds.
        expected_degree: DensityRange,
    },
}

impl GraphModel {
    /// Stable snake-case name used in diagnostics.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Gnp { .. } => "gnp",
            Self::SinklessGnp { .. } => "sinkless_gnp",
            Self::Gnc { .. } => "gnc",
            Self::SinklessGnc { .. } => "sinkless_gnc",
            Self::UniformlyStochasticSinklessGnp { .. } => "uniformly_stochastic_sinkless_gnp",
            Self::UniformlyStochasticSinklessGnc { .. } => "uniformly_stochastic_sinkless_gnc",
        }
    }

    /// Minimum out-degree the model guarantees.
    #[must_use]
    pub const fn min_degree(&self) -> MinDegree {
        match self {
            Self::Gnp { .. } | Self::Gnc { .. } => MinDegree::Zero,
            _ => MinDegree::One,
        }
    }

    /// Returns `true` when node count and density are redrawn per graph.
    #[must_use]
    pub const fn is_stochastic(&self) -> bool {
        matches!(
            self,
            Self::UniformlyStochasticSinklessGnp { .. } | Self::UniformlyStochasticSinklessGnc { .. }
        )
    }

    /// Checks every parameter of the model.
    ///
    /// # Errors
    /// Returns [`GeneratorError`] when a probability or expected degree is out
    /// of range, a range is inverted, or a sinkless model has zero density.
    pub fn validate(&self) -> Result<()> {
        match *self {
            Self::Gnp { probability, .. } => Probability::new(probability).map(|_| ()),
            Self::SinklessGnp { nodes, probability } => {
                let probability = Probability::new(probability)?;
                self.require_positive(nodes > 0 && probability.is_zero())
            }
            Self::Gnc {
                expected_degree, ..
            } => validate_expected_degree(expected_degree),
            Self::SinklessGnc {
                nodes,
                expected_degree,
            } => {
                validate_expected_degree(expected_degree)?;
                let probability = Probability::from_expected_degree(nodes, expected_degree);
                self.require_positive(nodes > 0 && probability.is_zero())
            }
            Self::UniformlyStochasticSinklessGnp { nodes, probability } => {
                nodes.validate()?;
                Probability::new(probability.min)?;
                Probability::new(probability.max)?;
                if probability.min > probability.max {
                    return Err(GeneratorError::InvertedProbabilityRange {
                        min: probability.min,
                        max: probability.max,
                    });
                }
                self.require_positive(nodes.max > 0 && probability.min <= 0.0)
            }
            Self::UniformlyStochasticSinklessGnc {
                nodes,
                expected_degree,
            } => {
                nodes.validate()?;
                validate_expected_degree(expected_degree.min)?;
                validate_expected_degree(expected_degree.max)?;
                if expected_degree.min > expected_degree.max {
                    return Err(GeneratorError::InvertedExpectedDegreeRange {
                        min: expected_degree.min,
                        max: expected_degree.max,
                    });
                }
                // `c / n` is smallest at the largest node count and lowest
                // degree; every other draw maps to at least this probability.
                let floor = Probability::from_expected_degree(nodes.max, expected_degree.min);
                self.require_positive(nodes.max > 0 && floor.is_zero())
            }
        }
    }

    fn require_positive(&self, zero_density: bool) -> Result<()> {
        if zero_density {
            return Err(GeneratorError::SinklessWithoutEdges { model: self.name() });
        }
        Ok(())
    }
}

fn validate_expected_degree(degree: f64) -> Result<()> {
    if degree.is_finite() && degree >= 0.0 {
        Ok(())
    } else {
        Err(GeneratorError::InvalidExpectedDegree { got: degree })
    }
}
