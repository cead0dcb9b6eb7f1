use super::uniform::Uniform;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// The unseeded stream, drawn from OS entropy once per worker.
///
/// Quality only has to be adequate for Monte Carlo; runs that need to be
/// reproduced pass a seed and get [`super::lcg::Lcg`] instead.
#[derive(Debug, Clone)]
pub struct Entropy(SmallRng);

impl Default for Entropy {
    fn default() -> Self {
        Self(SmallRng::from_os_rng())
    }
}

impl Uniform for Entropy {
    fn uniform(&mut self) -> f64 {
        self.0.random::<f64>()
    }
}
