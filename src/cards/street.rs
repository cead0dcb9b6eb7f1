use crate::InputError;

/// How much of the board has been revealed.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Street {
    Pref = 0isize,
    Flop = 1isize,
    Turn = 2isize,
    Rive = 3isize,
}

impl Street {
    pub const fn all() -> &'static [Self] {
        &[Self::Pref, Self::Flop, Self::Turn, Self::Rive]
    }
    /// Community cards visible on this street.
    pub const fn n_observed(&self) -> usize {
        match self {
            Self::Pref => 0,
            Self::Flop => 3,
            Self::Turn => 4,
            Self::Rive => 5,
        }
    }
    /// Community cards still to come before showdown.
    pub const fn n_missing(&self) -> usize {
        crate::BOARD_SIZE - self.n_observed()
    }
}

/// board length isomorphism
impl TryFrom<usize> for Street {
    type Error = InputError;
    fn try_from(n: usize) -> Result<Self, Self::Error> {
        match n {
            0 => Ok(Self::Pref),
            3 => Ok(Self::Flop),
            4 => Ok(Self::Turn),
            5 => Ok(Self::Rive),
            _ => Err(InputError::InvalidBoardLength(n)),
        }
    }
}

impl std::fmt::Display for Street {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Pref => write!(f, "preflop"),
            Self::Flop => write!(f, "flop"),
            Self::Turn => write!(f, "turn"),
            Self::Rive => write!(f, "river"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bijective_usize() {
        for street in Street::all() {
            assert_eq!(Street::try_from(street.n_observed()), Ok(*street));
        }
    }

    #[test]
    fn partial_flops_rejected() {
        assert_eq!(Street::try_from(1), Err(InputError::InvalidBoardLength(1)));
        assert_eq!(Street::try_from(2), Err(InputError::InvalidBoardLength(2)));
        assert_eq!(Street::try_from(6), Err(InputError::InvalidBoardLength(6)));
    }
}
