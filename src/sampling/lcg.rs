use super::uniform::Uniform;

/// The seeded stream behind reproducible runs.
///
/// A 64-bit linear congruential generator with Numerical Recipes constants
/// and wrapping arithmetic. Each output takes the high 32 bits of the new
/// state divided by 2^32. This exact sequence is part of the
/// [`crate::LCG_VERSION`] contract: the same seed must always produce the
/// same equity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lcg(u64);

impl Lcg {
    pub fn state(&self) -> u64 {
        self.0
    }
}

impl From<u64> for Lcg {
    fn from(seed: u64) -> Self {
        Self(seed)
    }
}

impl Uniform for Lcg {
    fn uniform(&mut self) -> f64 {
        self.0 = self
            .0
            .wrapping_mul(crate::LCG_MULTIPLIER)
            .wrapping_add(crate::LCG_INCREMENT);
        (self.0 >> 32) as f64 / (1u64 << 32) as f64
    }
}
