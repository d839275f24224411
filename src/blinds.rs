//! Blind sizes and the policies controlling how they grow.
use crate::ChipCount;
use std::fmt;

/// The forced bets posted at the start of every hand.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Blinds {
    /// Posted by the seat left of the button.
    pub small: ChipCount,
    /// Posted by the seat after the small blind.
    pub big: ChipCount,
}

impl Blinds {
    /// Create new blinds of the given sizes.
    pub fn new(small: ChipCount, big: ChipCount) -> Self {
        Self { small, big }
    }
}

impl From<(ChipCount, ChipCount)> for Blinds {
    fn from((small, big): (ChipCount, ChipCount)) -> Self {
        Self::new(small, big)
    }
}

impl fmt::Display for Blinds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.small, self.big)
    }
}

/// Exposes variants to handle blind policies, i. e. control when and how much the blind size
/// should be increased.
///
/// The policy is applied after every hand with the number of hands played so far.
pub enum BlindPolicy {
    /// Incite that the blinds should never increase.
    NeverIncrease,
    /// Double both blinds every time the given number of hands has been played.
    DoubleEvery(usize),
    /// Compute the next blinds from the number of hands played and the current blinds.
    Custom(Box<dyn Fn(usize, Blinds) -> Blinds + Send>),
}

impl BlindPolicy {
    /// The blinds to use after `hands_played` hands, given the `current` ones.
    pub fn next(&self, hands_played: usize, current: Blinds) -> Blinds {
        match self {
            BlindPolicy::NeverIncrease => current,
            // blinds stop growing at `ChipCount::MAX`
            BlindPolicy::DoubleEvery(n) if *n > 0 && hands_played % n == 0 => Blinds::new(
                current.small.saturating_mul(2),
                current.big.saturating_mul(2),
            ),
            BlindPolicy::DoubleEvery(_) => current,
            BlindPolicy::Custom(step) => step(hands_played, current),
        }
    }
}

impl Default for BlindPolicy {
    fn default() -> Self {
        BlindPolicy::NeverIncrease
    }
}

impl fmt::Debug for BlindPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BlindPolicy::NeverIncrease => write!(f, "NeverIncrease"),
            BlindPolicy::DoubleEvery(n) => write!(f, "DoubleEvery({})", n),
            BlindPolicy::Custom(_) => write!(f, "Custom(..)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_never_increase() {
        let blinds = Blinds::new(1, 2);
        assert_eq!(BlindPolicy::NeverIncrease.next(100, blinds), blinds);
    }

    #[test]
    fn test_double_every() {
        let policy = BlindPolicy::DoubleEvery(3);
        let blinds = Blinds::new(5, 10);
        assert_eq!(policy.next(2, blinds), blinds);
        assert_eq!(policy.next(3, blinds), Blinds::new(10, 20));
        assert_eq!(BlindPolicy::DoubleEvery(0).next(3, blinds), blinds);
    }

    #[test]
    fn test_double_every_saturates() {
        let policy = BlindPolicy::DoubleEvery(1);
        let blinds = policy.next(1, Blinds::new(1 << 30, 1 << 31));
        assert_eq!(blinds, Blinds::new(1 << 31, ChipCount::MAX));
        assert_eq!(
            policy.next(2, blinds),
            Blinds::new(ChipCount::MAX, ChipCount::MAX)
        );
    }

    #[test]
    fn test_custom_step() {
        let policy = BlindPolicy::Custom(Box::new(|hands, b: Blinds| {
            Blinds::new(b.small + hands as ChipCount, b.big + 2 * hands as ChipCount)
        }));
        assert_eq!(policy.next(1, Blinds::new(1, 2)), Blinds::new(2, 4));
    }
}
