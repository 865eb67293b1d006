use super::error::ParseError;

/// A poker hand's category.
///
/// Variants are declared weakest first, and the derived `Ord` follows
/// declaration order, so comparing two categories is comparing strength.
/// Kicker cards are not part of the category; see [`Kickers`].
///
/// [`Kickers`]: super::kicks::Kickers
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HandRank {
    HighCard,
    OnePair,
    TwoPairs,
    ThreeOfAKind,
    Straight,
    Flush,
    FullHouse,
    FourOfAKind,
    StraightFlush,
    RoyalFlush,
}

impl HandRank {
    pub const fn all() -> [Self; 10] {
        [
            HandRank::HighCard,
            HandRank::OnePair,
            HandRank::TwoPairs,
            HandRank::ThreeOfAKind,
            HandRank::Straight,
            HandRank::Flush,
            HandRank::FullHouse,
            HandRank::FourOfAKind,
            HandRank::StraightFlush,
            HandRank::RoyalFlush,
        ]
    }

    pub const fn name(&self) -> &'static str {
        match self {
            HandRank::HighCard => "HighCard",
            HandRank::OnePair => "OnePair",
            HandRank::TwoPairs => "TwoPairs",
            HandRank::ThreeOfAKind => "ThreeOfAKind",
            HandRank::Straight => "Straight",
            HandRank::Flush => "Flush",
            HandRank::FullHouse => "FullHouse",
            HandRank::FourOfAKind => "FourOfAKind",
            HandRank::StraightFlush => "StraightFlush",
            HandRank::RoyalFlush => "RoyalFlush",
        }
    }
}

/// str isomorphism, by name
impl TryFrom<&str> for HandRank {
    type Error = ParseError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::all()
            .into_iter()
            .find(|r| r.name() == s.trim())
            .ok_or_else(|| ParseError::Token(s.to_string()))
    }
}

impl std::fmt::Display for HandRank {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.pad(self.name())
    }
}
