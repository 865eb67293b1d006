use super::error::ParseError;

/// Only equality between suits means anything at the table.
/// The derived ordering exists so suits can key an ordered map.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Suit {
    C = 0,
    D = 1,
    H = 2,
    S = 3,
}

impl Suit {
    pub const fn all() -> [Self; 4] {
        [Suit::C, Suit::D, Suit::H, Suit::S]
    }
}

impl TryFrom<char> for Suit {
    type Error = ParseError;
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            'C' => Ok(Suit::C),
            'D' => Ok(Suit::D),
            'H' => Ok(Suit::H),
            'S' => Ok(Suit::S),
            _ => Err(ParseError::Suit(c)),
        }
    }
}
impl From<Suit> for char {
    fn from(s: Suit) -> char {
        match s {
            Suit::C => 'C',
            Suit::D => 'D',
            Suit::H => 'H',
            Suit::S => 'S',
        }
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", char::from(*self))
    }
}
