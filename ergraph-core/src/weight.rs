//! Edge-weight generators.

use rand::distributions::{Distribution, Uniform};
use rand_distr::Normal;

use crate::{
    error::{GeneratorError, Result},
    seed::{GeneratorRng, Seed, Seedable},
};

/// Produces one real-valued weight per call.
pub trait WeightGenerator {
    /// Draws the next weight.
    fn generate(&mut self) -> f64;
}

/// Distribution of edge weights.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum WeightDistribution {
    /// Real weights drawn uniformly from `[low, high]`.
    Uniform {
        /// Lower bound.
        low: f64,
        /// Upper bound.
        high: f64,
    },
    /// Integer weights drawn uniformly from `low..=high`.
    DiscreteUniform {
        /// Lower bound.
        low: i64,
        /// Upper bound.
        high: i64,
    },
    /// Normally distributed weights.
    Normal {
        /// Mean of the distribution.
        mean: f64,
        /// Standard deviation, non-negative.
        std_dev: f64,
    },
    /// Every edge gets the same weight.
    Constant(f64),
}

impl WeightDistribution {
    /// Checks the distribution parameters.
    ///
    /// # Errors
    /// Returns [`GeneratorError::InvalidWeightDistribution`] for non-finite
    /// parameters, inverted bounds, a uniform range too wide to represent, or
    /// a negative standard deviation.
    pub fn validate(&self) -> Result<()> {
        match *self {
            Self::Uniform { low, high } => {
                require_finite("uniform bounds", &[low, high])?;
                require_ordered(low <= high, || format!("uniform low {low} exceeds high {high}"))?;
                // The sampler scales the width by `1 / (1 - EPSILON)`.
                require_finite("uniform range width", &[(high - low) / (1.0 - f64::EPSILON)])
            }
            Self::DiscreteUniform { low, high } => require_ordered(low <= high, || {
                format!("discrete uniform low {low} exceeds high {high}")
            }),
            Self::Normal { mean, std_dev } => {
                require_finite("normal parameters", &[mean, std_dev])?;
                require_ordered(std_dev >= 0.0, || {
                    format!("standard deviation {std_dev} is negative")
                })
            }
            Self::Constant(value) => require_finite("constant weight", &[value]),
        }
    }
}

fn require_finite(what: &str, values: &[f64]) -> Result<()> {
    if values.iter().all(|value| value.is_finite()) {
        Ok(())
    } else {
        Err(GeneratorError::InvalidWeightDistribution {
            reason: format!("{what} must be finite"),
        })
    }
}

fn require_ordered(ok: bool, reason: impl FnOnce() -> String) -> Result<()> {
    if ok {
        Ok(())
    } else {
        Err(GeneratorError::InvalidWeightDistribution { reason: reason() })
    }
}

#[derive(Clone, Copy, Debug)]
enum WeightSampler {
    Uniform(Uniform<f64>),
    DiscreteUniform(Uniform<i64>),
    Normal(Normal<f64>),
    Constant(f64),
}

/// Seedable weight generator over a [`WeightDistribution`].
///
/// # Examples
/// ```
/// use ergraph_core::{DistributionWeightGenerator, WeightDistribution, WeightGenerator};
///
/// let mut weights = DistributionWeightGenerator::new(
///     WeightDistribution::DiscreteUniform { low: -3, high: 3 },
///     7,
/// )
/// .expect("valid distribution");
/// let weight = weights.generate();
/// assert!((-3.0..=3.0).contains(&weight));
/// assert_eq!(weight.fract(), 0.0);
/// ```
#[derive(Clone, Debug)]
pub struct DistributionWeightGenerator {
    distribution: WeightDistribution,
    sampler: WeightSampler,
    rng: GeneratorRng,
}

impl DistributionWeightGenerator {
    /// Builds a weight generator seeded with `seed`.
    ///
    /// # Errors
    /// Returns [`GeneratorError::InvalidWeightDistribution`] when the
    /// distribution fails validation.
    pub fn new(distribution: WeightDistribution, seed: Seed) -> Result<Self> {
        distribution.validate()?;
        let sampler = match distribution {
            WeightDistribution::Uniform { low, high } => {
                WeightSampler::Uniform(Uniform::new_inclusive(low, high))
            }
            WeightDistribution::DiscreteUniform { low, high } => {
                WeightSampler::DiscreteUniform(Uniform::new_inclusive(low, high))
            }
            WeightDistribution::Normal { mean, std_dev } => WeightSampler::Normal(
                Normal::new(mean, std_dev).map_err(|err| {
                    GeneratorError::InvalidWeightDistribution {
                        reason: err.to_string(),
                    }
                })?,
            ),
            WeightDistribution::Constant(value) => WeightSampler::Constant(value),
        };
        Ok(Self {
            distribution,
            sampler,
            rng: GeneratorRng::new(seed),
        })
    }

    /// Returns the distribution weights are drawn from.
    #[must_use]
    pub const fn distribution(&self) -> &WeightDistribution {
        &self.distribution
    }
}

impl WeightGenerator for DistributionWeightGenerator {
    fn generate(&mut self) -> f64 {
        let engine = self.rng.engine();
        match self.sampler {
            WeightSampler::Uniform(uniform) => uniform.sample(engine),
            WeightSampler::DiscreteUniform(uniform) => uniform.sample(engine) as f64,
            WeightSampler::Normal(normal) => normal.sample(engine),
            WeightSampler::Constant(value) => value,
        }
    }
}

impl Seedable for DistributionWeightGenerator {
    type Config = WeightDistribution;

    fn from_seed(config: &Self::Config, seed: Seed) -> Result<Self> {
        Self::new(*config, seed)
    }

    fn seed(&self) -> Seed {
        self.rng.seed()
    }
}
