//! Seed sources and the seed-derivation protocol shared by all generators.
//!
//! Every generator owns a [`GeneratorRng`] seeded exactly once at
//! construction. A generator that owns child generators derives each child's
//! seed with [`GeneratorRng::derive_seed`], one draw per child in a fixed
//! order, so a single top-level seed reproduces the whole composite while
//! keeping the children's streams disjoint.

use rand::{RngCore, SeedableRng, rngs::OsRng, rngs::SmallRng};
use tracing::{debug, trace};

use crate::error::Result;

/// Seed fully determining a generator's random stream.
pub type Seed = u64;

/// SplitMix64 increment (the 64-bit golden ratio) used to space sequence
/// seeds apart.
const SEQUENCE_SPACING: u64 = 0x9E37_79B9_7F4A_7C15;
const SPLITMIX_MULT_A: u64 = 0xBF58_476D_1CE4_E5B9;
const SPLITMIX_MULT_B: u64 = 0x94D0_49BB_1331_11EB;

#[inline]
fn splitmix64(mut state: u64) -> u64 {
    state = state.wrapping_add(SEQUENCE_SPACING);
    state = (state ^ (state >> 30)).wrapping_mul(SPLITMIX_MULT_A);
    state = (state ^ (state >> 27)).wrapping_mul(SPLITMIX_MULT_B);
    state ^ (state >> 31)
}

/// Supplies seeds to generators constructed without an explicit one.
///
/// Closures returning a [`Seed`] are seed sources, which lets tests pass a
/// deterministic stub.
///
/// # Examples
/// ```
/// use ergraph_core::SeedSource;
///
/// let mut stub = || 7_u64;
/// assert_eq!(stub.next_seed(), 7);
/// ```
pub trait SeedSource {
    /// Returns a fresh seed. Reusing the returned value reproduces the output
    /// of whichever generator consumed it.
    fn next_seed(&mut self) -> Seed;
}

impl<F> SeedSource for F
where
    F: FnMut() -> Seed,
{
    fn next_seed(&mut self) -> Seed {
        self()
    }
}

/// Seed source backed by operating-system entropy.
#[derive(Clone, Copy, Debug, Default)]
pub struct EntropySeedSource;

impl SeedSource for EntropySeedSource {
    fn next_seed(&mut self) -> Seed {
        OsRng.next_u64()
    }
}

/// Deterministic seed stream mixing a base seed with a running counter.
///
/// Useful for fanning one base seed out to many independently seeded
/// generators, for example one per worker thread.
///
/// # Examples
/// ```
/// use ergraph_core::{SeedSource, SequenceSeedSource};
///
/// let mut first = SequenceSeedSource::new(11);
/// let mut second = SequenceSeedSource::new(11);
/// assert_eq!(first.next_seed(), second.next_seed());
/// assert_ne!(first.next_seed(), SequenceSeedSource::new(11).next_seed());
/// ```
#[derive(Clone, Debug)]
pub struct SequenceSeedSource {
    base: Seed,
    issued: u64,
}

impl SequenceSeedSource {
    /// Creates a stream rooted at `base`.
    #[must_use]
    pub const fn new(base: Seed) -> Self {
        Self { base, issued: 0 }
    }

    /// Number of seeds handed out so far.
    #[must_use]
    pub const fn issued(&self) -> u64 {
        self.issued
    }
}

impl SeedSource for SequenceSeedSource {
    fn next_seed(&mut self) -> Seed {
        self.issued = self.issued.wrapping_add(1);
        splitmix64(self.base ^ self.issued.wrapping_mul(SEQUENCE_SPACING))
    }
}

/// Random engine owned by a single generator.
///
/// Remembers the seed it was built from so a run can be replayed.
#[derive(Clone, Debug)]
pub struct GeneratorRng {
    seed: Seed,
    engine: SmallRng,
}

impl GeneratorRng {
    /// Seeds a new engine.
    #[must_use]
    pub fn new(seed: Seed) -> Self {
        Self {
            seed,
            engine: SmallRng::seed_from_u64(seed),
        }
    }

    /// Returns the seed this engine was built from.
    #[must_use]
    pub const fn seed(&self) -> Seed {
        self.seed
    }

    /// Draws one seed for a child generator, consuming exactly one `u64`.
    pub fn derive_seed(&mut self) -> Seed {
        let seed = self.engine.next_u64();
        trace!(parent = self.seed, child_seed = seed, "derived child seed");
        seed
    }

    pub(crate) fn engine(&mut self) -> &mut SmallRng {
        &mut self.engine
    }
}

/// Returns the seeds a parent seeded with `parent` hands to its first `count`
/// children, in construction order.
///
/// # Examples
/// ```
/// use ergraph_core::derive_child_seeds;
///
/// let seeds = derive_child_seeds(42, 2);
/// assert_eq!(seeds.len(), 2);
/// assert_eq!(seeds, derive_child_seeds(42, 2));
/// ```
#[must_use]
pub fn derive_child_seeds(parent: Seed, count: usize) -> Vec<Seed> {
    let mut rng = GeneratorRng::new(parent);
    (0..count).map(|_| rng.derive_seed()).collect()
}

/// A generator that can be rebuilt deterministically from a configuration and
/// a seed.
///
/// Composite generators rely on this to construct their children from derived
/// seeds.
pub trait Seedable: Sized {
    /// Validated parameters describing the generator.
    type Config;

    /// Builds the generator from `config`, seeding its engine with `seed`.
    ///
    /// # Errors
    /// Returns [`crate::GeneratorError`] when `config` is invalid.
    fn from_seed(config: &Self::Config, seed: Seed) -> Result<Self>;

    /// Returns the seed the generator was built from.
    fn seed(&self) -> Seed;

    /// Builds the generator with a seed drawn from `source`.
    ///
    /// # Errors
    /// Returns [`crate::GeneratorError`] when `config` is invalid.
    fn from_source<S>(config: &Self::Config, source: &mut S) -> Result<Self>
    where
        S: SeedSource + ?Sized,
    {
        let seed = source.next_seed();
        debug!(seed, "drew generator seed from seed source");
        Self::from_seed(config, seed)
    }
}
