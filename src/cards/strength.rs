use super::evaluator::Evaluator;
use super::hand::Hand;
use super::kicks::Kickers;
use super::ranking::HandRank;

/// A hand's strength.
///
/// This will always be constructed from a Hand. The category decides
/// first, and the kicker sequence is only consulted to break ties
/// between hands of the same category. Field order matters for the
/// derived `Ord`.
#[derive(Debug, Clone, Eq, PartialEq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Strength {
    value: HandRank,
    kicks: Kickers,
}

impl Strength {
    pub fn ranking(&self) -> HandRank {
        self.value
    }
    pub fn kickers(&self) -> &Kickers {
        &self.kicks
    }
}

impl From<&Hand> for Strength {
    fn from(hand: &Hand) -> Self {
        Self::from(Evaluator::from(hand))
    }
}

impl From<(HandRank, Kickers)> for Strength {
    fn from((value, kicks): (HandRank, Kickers)) -> Self {
        Self { value, kicks }
    }
}

impl std::fmt::Display for Strength {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:<14}{}", self.value, self.kicks)
    }
}
