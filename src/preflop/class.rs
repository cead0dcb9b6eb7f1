use crate::Arbitrary;
use crate::InputError;
use crate::cards::Card;
use crate::cards::Hole;
use crate::cards::Rank;
use crate::cards::Suit;

/// Whether the two hole cards share a rank, a suit, or neither.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Shape {
    Pair,
    Suited,
    Offsuit,
}

/// One of the 169 strategically distinct starting hands.
///
/// Preflop, every hole is interchangeable with any other that differs only
/// by a relabeling of suits or by card order. The class keeps what survives
/// that quotient: the two ranks, high first, and the [`Shape`].
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct HandClass {
    hi: Rank,
    lo: Rank,
    shape: Shape,
}

impl HandClass {
    pub fn hi(&self) -> Rank {
        self.hi
    }
    pub fn lo(&self) -> Rank {
        self.lo
    }
    pub fn shape(&self) -> Shape {
        self.shape
    }

    /// All 169 classes: pairs from AA down to 22, then every high > low rank
    /// pair in descending order, suited before offsuit.
    pub fn all() -> Vec<Self> {
        let pairs = Rank::descending().map(|r| Self {
            hi: r,
            lo: r,
            shape: Shape::Pair,
        });
        let mixed = Rank::descending().flat_map(|hi| {
            Rank::descending()
                .filter(move |lo| *lo < hi)
                .flat_map(move |lo| {
                    [Shape::Suited, Shape::Offsuit]
                        .map(|shape| Self { hi, lo, shape })
                })
        });
        pairs.chain(mixed).collect()
    }

    /// A representative hole for this class. Pairs take the spade and heart,
    /// suited hands two spades, offsuit hands a high spade and a low heart.
    pub fn cards(&self) -> Hole {
        let (a, b) = match self.shape {
            Shape::Pair => (Suit::Spade, Suit::Heart),
            Shape::Suited => (Suit::Spade, Suit::Spade),
            Shape::Offsuit => (Suit::Spade, Suit::Heart),
        };
        Hole::from((Card::from((self.hi, a)), Card::from((self.lo, b))))
    }
}

impl From<Hole> for HandClass {
    fn from(hole: Hole) -> Self {
        let [a, b] = hole.cards();
        let (hi, lo) = if a.rank() >= b.rank() {
            (a.rank(), b.rank())
        } else {
            (b.rank(), a.rank())
        };
        let shape = if hi == lo {
            Shape::Pair
        } else if a.suit() == b.suit() {
            Shape::Suited
        } else {
            Shape::Offsuit
        };
        Self { hi, lo, shape }
    }
}

impl TryFrom<&[Card]> for HandClass {
    type Error = InputError;
    fn try_from(cards: &[Card]) -> Result<Self, Self::Error> {
        match cards {
            [a, b] if a == b => Err(InputError::DuplicateCard(*a)),
            [a, b] => Ok(Self::from(Hole::from((*a, *b)))),
            _ => Err(InputError::InvalidHero(cards.len())),
        }
    }
}

/// str isomorphism
/// "AA", "AKs", "T9o", rank letters case-insensitive
impl std::str::FromStr for HandClass {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let label = s.trim();
        let mut chars = label.chars();
        let hi = chars.next().ok_or_else(|| "empty hand class".to_string())?;
        let lo = chars.next().ok_or_else(|| format!("hand class too short: {}", label))?;
        let hi = Rank::try_from(hi)?;
        let lo = Rank::try_from(lo)?;
        let shape = match (chars.next(), chars.next()) {
            (None, None) if hi == lo => Shape::Pair,
            (Some('s'), None) | (Some('S'), None) if hi > lo => Shape::Suited,
            (Some('o'), None) | (Some('O'), None) if hi > lo => Shape::Offsuit,
            _ => return Err(format!("invalid hand class: {}", label)),
        };
        Ok(Self { hi, lo, shape })
    }
}

impl std::fmt::Display for HandClass {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let hi = char::from(self.hi);
        let lo = char::from(self.lo);
        match self.shape {
            Shape::Pair => write!(f, "{}{}", hi, lo),
            Shape::Suited => write!(f, "{}{}s", hi, lo),
            Shape::Offsuit => write!(f, "{}{}o", hi, lo),
        }
    }
}

impl Arbitrary for HandClass {
    fn random() -> Self {
        Self::from(Hole::random())
    }
}
