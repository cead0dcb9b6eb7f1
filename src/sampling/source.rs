use super::entropy::Entropy;
use super::lcg::Lcg;
use super::uniform::Uniform;

/// Either stream, chosen by whether the caller supplied a seed.
#[derive(Debug, Clone)]
pub enum Source {
    Seeded(Lcg),
    Entropy(Entropy),
}

impl From<Option<u64>> for Source {
    fn from(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::Seeded(Lcg::from(seed)),
            None => Self::Entropy(Entropy::default()),
        }
    }
}

impl Uniform for Source {
    fn uniform(&mut self) -> f64 {
        match self {
            Self::Seeded(lcg) => lcg.uniform(),
            Self::Entropy(rng) => rng.uniform(),
        }
    }
}
