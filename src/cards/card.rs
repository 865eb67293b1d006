use super::error::ParseError;
use super::rank::Rank;
use super::suit::Suit;

/// A playing card as a `(Rank, Suit)` pair.
///
/// Renders and parses as two characters, rank then suit, e.g. `"TH"`
/// for the ten of hearts.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    pub fn rank(&self) -> Rank {
        self.rank
    }
    pub fn suit(&self) -> Suit {
        self.suit
    }
}

/// (Rank, Suit) isomorphism
impl From<(Rank, Suit)> for Card {
    fn from((rank, suit): (Rank, Suit)) -> Self {
        Self { rank, suit }
    }
}
impl From<Card> for (Rank, Suit) {
    fn from(c: Card) -> Self {
        (c.rank, c.suit)
    }
}

/// u8 isomorphism
/// each card is mapped to its location in a sorted deck 0..52
impl From<Card> for u8 {
    fn from(c: Card) -> u8 {
        (u8::from(c.rank) - 2) * 4 + c.suit as u8
    }
}
impl TryFrom<u8> for Card {
    type Error = ParseError;
    fn try_from(n: u8) -> Result<Self, Self::Error> {
        let rank = Rank::try_from(n / 4 + 2)?;
        let suit = Suit::all()[(n % 4) as usize];
        Ok(Self::from((rank, suit)))
    }
}

/// str isomorphism
/// a token is exactly one rank symbol followed by one suit symbol.
/// malformed tokens are reported whole
impl TryFrom<&str> for Card {
    type Error = ParseError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let mut chars = s.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(r), Some(u), None) => Rank::try_from(r)
                .and_then(|r| Suit::try_from(u).map(|u| Self::from((r, u))))
                .map_err(|_| ParseError::Token(s.to_string())),
            _ => Err(ParseError::Token(s.to_string())),
        }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}
