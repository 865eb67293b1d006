use super::error::ParseError;
use super::hand::Hand;
use super::mode::Mode;
use std::cmp::Ordering;

/// Width of one player's half of a legacy record: five tokens and the
/// separators between and after them.
const LEGACY_SPLIT: usize = 15;

/// Which side of a deal holds the stronger hand.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Winner {
    Player1,
    Player2,
    Tie,
}

impl From<Ordering> for Winner {
    fn from(o: Ordering) -> Self {
        match o {
            Ordering::Greater => Winner::Player1,
            Ordering::Less => Winner::Player2,
            Ordering::Equal => Winner::Tie,
        }
    }
}

impl std::fmt::Display for Winner {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Winner::Player1 => write!(f, "player 1"),
            Winner::Player2 => write!(f, "player 2"),
            Winner::Tie => write!(f, "tie"),
        }
    }
}

/// One dataset record: ten cards, the first five dealt to player 1 and
/// the last five to player 2.
#[derive(Debug, Clone)]
pub struct Deal {
    player1: Hand,
    player2: Hand,
}

impl Deal {
    pub fn parse(line: &str, mode: Mode) -> Result<Self, ParseError> {
        match mode {
            Mode::Strict => Self::strict(line),
            Mode::Lenient => Self::lenient(line),
        }
    }

    pub fn player1(&self) -> &Hand {
        &self.player1
    }
    pub fn player2(&self) -> &Hand {
        &self.player2
    }
    pub fn winner(&self) -> Winner {
        Winner::from(self.player1.cmp(&self.player2))
    }

    fn strict(line: &str) -> Result<Self, ParseError> {
        let tokens = line.split_whitespace().collect::<Vec<&str>>();
        match tokens.len() {
            10 => Ok(Self::from((
                Hand::try_from(tokens[..5].join(" ").as_str())?,
                Hand::try_from(tokens[5..].join(" ").as_str())?,
            ))),
            n => Err(ParseError::Line(n)),
        }
    }

    /// Fixed-width split followed by the legacy scan. Incomplete hands are
    /// refused here, since comparing them would not mean anything.
    fn lenient(line: &str) -> Result<Self, ParseError> {
        let mid = line
            .char_indices()
            .nth(LEGACY_SPLIT)
            .map(|(i, _)| i)
            .unwrap_or(line.len());
        let (lhs, rhs) = line.split_at(mid);
        let player1 = Hand::lenient(lhs);
        let player2 = Hand::lenient(rhs);
        match (player1.is_complete(), player2.is_complete()) {
            (true, true) => Ok(Self::from((player1, player2))),
            (false, _) => Err(ParseError::Incomplete(lhs.trim().to_string())),
            (_, false) => Err(ParseError::Incomplete(rhs.trim().to_string())),
        }
    }
}

impl From<(Hand, Hand)> for Deal {
    fn from((player1, player2): (Hand, Hand)) -> Self {
        Self { player1, player2 }
    }
}

impl std::fmt::Display for Deal {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{:<32} vs {:<32} -> {}",
            self.player1.to_string(),
            self.player2.to_string(),
            self.winner()
        )
    }
}
