use super::card::Card;
use thiserror::Error;

/// Everything that can go wrong turning text into cards, hands or deals.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("invalid rank symbol '{0}'")]
    Rank(char),

    #[error("invalid suit symbol '{0}'")]
    Suit(char),

    #[error("invalid rank value {0}")]
    Value(u8),

    #[error("invalid card token \"{0}\"")]
    Token(String),

    #[error("a hand holds exactly 5 cards, found {0}")]
    Size(usize),

    #[error("card {0} appears more than once")]
    Duplicate(Card),

    #[error("a deal holds exactly 10 cards, found {0}")]
    Line(usize),

    #[error("incomplete hand \"{0}\"")]
    Incomplete(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_input() {
        assert_eq!(ParseError::Token("JX".into()).to_string(), "invalid card token \"JX\"");
        assert_eq!(ParseError::Rank('1').to_string(), "invalid rank symbol '1'");
        assert_eq!(ParseError::Suit('X').to_string(), "invalid suit symbol 'X'");
        assert_eq!(ParseError::Size(4).to_string(), "a hand holds exactly 5 cards, found 4");
        assert_eq!(ParseError::Line(9).to_string(), "a deal holds exactly 10 cards, found 9");
    }

    #[test]
    fn parse_failures_carry_the_token() {
        let e = Card::try_from("JX").unwrap_err();
        assert!(e.to_string().contains("JX"));
        let e = Card::try_from("TH").map(|c| ParseError::Duplicate(c)).unwrap();
        assert_eq!(e.to_string(), "card TH appears more than once");
        let e = ParseError::Incomplete("2C 3C 4C 5C 6C AAAA".into());
        assert!(e.to_string().contains("2C 3C 4C 5C 6C AAAA"));
    }
}
