use super::hand::Hand;
use super::kicks::Kickers;
use super::rank::Rank;
use super::ranking::HandRank;
use super::strength::Strength;

/// A lazy evaluator for a hand's strength.
///
/// The category predicates overlap (every full house also holds three of
/// a kind, every royal flush is also a flush), so they are tried from the
/// strongest category down and the first one that holds wins.
pub struct Evaluator<'a>(&'a Hand);
impl<'a> From<&'a Hand> for Evaluator<'a> {
    fn from(h: &'a Hand) -> Self {
        Self(h)
    }
}

impl Evaluator<'_> {
    pub fn find_ranking(&self) -> HandRank {
        None.or_else(|| self.find_royal_flush())
            .or_else(|| self.find_straight_flush())
            .or_else(|| self.find_4_oak())
            .or_else(|| self.find_3_oak_2_oak())
            .or_else(|| self.find_flush())
            .or_else(|| self.find_straight())
            .or_else(|| self.find_3_oak())
            .or_else(|| self.find_2_oak_2_oak())
            .or_else(|| self.find_2_oak())
            .unwrap_or(HandRank::HighCard)
    }
    pub fn find_kickers(&self) -> Kickers {
        self.0.ranks().iter().map(|(r, n)| (*n, *r)).collect()
    }

    fn find_royal_flush(&self) -> Option<HandRank> {
        (self.0.straight() && self.0.flush() && self.0.ranks().contains_key(&Rank::Ace))
            .then_some(HandRank::RoyalFlush)
    }
    fn find_straight_flush(&self) -> Option<HandRank> {
        (self.0.straight() && self.0.flush()).then_some(HandRank::StraightFlush)
    }
    fn find_4_oak(&self) -> Option<HandRank> {
        self.0.four_of_a_kind().then_some(HandRank::FourOfAKind)
    }
    fn find_3_oak_2_oak(&self) -> Option<HandRank> {
        self.0.full_house().then_some(HandRank::FullHouse)
    }
    fn find_flush(&self) -> Option<HandRank> {
        self.0.flush().then_some(HandRank::Flush)
    }
    fn find_straight(&self) -> Option<HandRank> {
        self.0.straight().then_some(HandRank::Straight)
    }
    fn find_3_oak(&self) -> Option<HandRank> {
        self.0.three_of_a_kind().then_some(HandRank::ThreeOfAKind)
    }
    fn find_2_oak_2_oak(&self) -> Option<HandRank> {
        self.0.two_pairs().then_some(HandRank::TwoPairs)
    }
    fn find_2_oak(&self) -> Option<HandRank> {
        self.0.one_pair().then_some(HandRank::OnePair)
    }
}

impl From<Evaluator<'_>> for Strength {
    fn from(e: Evaluator<'_>) -> Self {
        Strength::from((e.find_ranking(), e.find_kickers()))
    }
}
