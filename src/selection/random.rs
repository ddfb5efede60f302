//! Injectable random sources for pattern selection

use rand::{Rng, SeedableRng, rngs::StdRng};

/// Source of uniform ratios in `[0, 1)`
pub trait RandomSource {
    /// Draw the next ratio
    fn next_ratio(&mut self) -> f64;
}

/// Random source backed by a `rand` generator
#[derive(Debug, Clone)]
pub struct RngSource<R: Rng> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    /// Wrap an existing generator
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngSource<StdRng> {
    /// Create a deterministic source for reproducible drills
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Create a source seeded from the operating system
    pub fn from_os_rng() -> Self {
        Self::new(StdRng::from_os_rng())
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn next_ratio(&mut self) -> f64 {
        self.rng.random::<f64>()
    }
}

/// Source that always returns the same ratio
///
/// Makes the selected index predictable: `floor(ratio * len)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedRatio(pub f64);

impl RandomSource for FixedRatio {
    fn next_ratio(&mut self) -> f64 {
        self.0
    }
}

impl<T: RandomSource + ?Sized> RandomSource for &mut T {
    fn next_ratio(&mut self) -> f64 {
        (**self).next_ratio()
    }
}
