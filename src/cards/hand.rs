use super::card::Card;
use super::error::ParseError;
use super::kicks::Kickers;
use super::mode::Mode;
use super::rank::Rank;
use super::ranking::HandRank;
use super::strength::Strength;
use super::suit::Suit;
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::collections::HashSet;
use std::sync::OnceLock;

/// Five cards, held as two multisets: how often each rank occurs and how
/// often each suit occurs. Which rank went with which suit is not kept,
/// because no category needs it.
///
/// Hands compare by [`Strength`]: category first, then the tie-break key.
/// Two hands that tie are `==` even if their suits differ. The strength
/// is evaluated once, on first use, and reused by every comparison.
///
/// ```
/// use pokerhands::cards::{Hand, HandRank};
///
/// let hand = Hand::try_from("5C TH TS JD 2D").unwrap();
/// assert_eq!(hand.to_string(), "5C TH TS JD 2D | OnePair");
/// assert!(hand.one_pair());
/// assert!(!hand.flush());
///
/// let other = Hand::try_from("4H 3D 2S 8C 9C").unwrap();
/// assert_eq!(other.category(), HandRank::HighCard);
/// assert!(hand > other);
/// ```
#[derive(Debug, Clone)]
pub struct Hand {
    cards: String,
    ranks: BTreeMap<Rank, u8>,
    suits: BTreeMap<Suit, u8>,
    strength: OnceLock<Strength>,
}

impl Hand {
    /// Parses with the given [`Mode`]. Lenient parsing never fails.
    pub fn parse(s: &str, mode: Mode) -> Result<Self, ParseError> {
        match mode {
            Mode::Strict => Self::try_from(s),
            Mode::Lenient => Ok(Self::lenient(s)),
        }
    }

    /// Legacy character scan. Rank symbols bump a rank count, suit symbols
    /// bump a suit count, anything else is skipped. Nothing is validated,
    /// so check [`Hand::is_complete`] before trusting the result.
    /// Counts saturate, so oversized input always reads as incomplete.
    pub fn lenient(s: &str) -> Self {
        let mut ranks = BTreeMap::<Rank, u8>::new();
        let mut suits = BTreeMap::<Suit, u8>::new();
        for c in s.chars() {
            if let Ok(rank) = Rank::try_from(c) {
                bump(ranks.entry(rank).or_default());
            } else if let Ok(suit) = Suit::try_from(c) {
                bump(suits.entry(suit).or_default());
            }
        }
        Self {
            cards: s.to_string(),
            ranks,
            suits,
            strength: OnceLock::new(),
        }
    }

    pub fn cards(&self) -> &str {
        &self.cards
    }
    pub fn ranks(&self) -> &BTreeMap<Rank, u8> {
        &self.ranks
    }
    pub fn suits(&self) -> &BTreeMap<Suit, u8> {
        &self.suits
    }
    pub fn size(&self) -> usize {
        self.ranks.values().map(|n| *n as usize).sum()
    }
    pub fn is_complete(&self) -> bool {
        self.size() == 5 && self.suits.values().map(|n| *n as usize).sum::<usize>() == 5
    }

    pub fn category(&self) -> HandRank {
        self.strength().ranking()
    }
    pub fn tie_break_key(&self) -> Kickers {
        self.strength().kickers().clone()
    }
    pub fn strength(&self) -> &Strength {
        self.strength.get_or_init(|| Strength::from(self))
    }

    /// All five cards share a suit.
    pub fn flush(&self) -> bool {
        self.suits.values().any(|n| *n == 5)
    }
    /// Five distinct ranks with no gaps. Ace only counts high.
    pub fn straight(&self) -> bool {
        match (self.ranks.keys().next(), self.ranks.keys().next_back()) {
            (Some(lo), Some(hi)) if self.ranks.len() == 5 => u8::from(*hi) - u8::from(*lo) == 4,
            _ => false,
        }
    }
    pub fn four_of_a_kind(&self) -> bool {
        self.has(4)
    }
    pub fn full_house(&self) -> bool {
        self.has(3) && self.has(2)
    }
    pub fn three_of_a_kind(&self) -> bool {
        self.has(3)
    }
    pub fn two_pairs(&self) -> bool {
        self.ranks.values().filter(|n| **n == 2).count() == 2
    }
    pub fn one_pair(&self) -> bool {
        self.ranks.values().any(|n| *n > 1)
    }

    fn has(&self, n: u8) -> bool {
        self.ranks.values().any(|m| *m == n)
    }
}

/// strict str parsing
/// exactly five well-formed, distinct card tokens separated by whitespace
impl TryFrom<&str> for Hand {
    type Error = ParseError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let cards = s
            .split_whitespace()
            .map(Card::try_from)
            .collect::<Result<Vec<Card>, _>>()?;
        if cards.len() != 5 {
            return Err(ParseError::Size(cards.len()));
        }
        let mut seen = HashSet::new();
        if let Some(card) = cards.iter().find(|c| !seen.insert(**c)) {
            return Err(ParseError::Duplicate(*card));
        }
        let mut hand = cards.into_iter().collect::<Self>();
        hand.cards = s.to_string();
        Ok(hand)
    }
}

/// Vec<Card> injection
/// the raw string becomes the canonical rendering of the cards.
/// size is not checked here
impl FromIterator<Card> for Hand {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        let mut cards = Vec::new();
        let mut ranks = BTreeMap::<Rank, u8>::new();
        let mut suits = BTreeMap::<Suit, u8>::new();
        for card in iter {
            bump(ranks.entry(card.rank()).or_default());
            bump(suits.entry(card.suit()).or_default());
            cards.push(card.to_string());
        }
        Self {
            cards: cards.join(" "),
            ranks,
            suits,
            strength: OnceLock::new(),
        }
    }
}
impl From<[Card; 5]> for Hand {
    fn from(cards: [Card; 5]) -> Self {
        cards.into_iter().collect()
    }
}

impl crate::Arbitrary for Hand {
    fn random() -> Self {
        let ref mut rng = rand::rng();
        rand::seq::index::sample(rng, 52, 5)
            .into_iter()
            .filter_map(|n| Card::try_from(n as u8).ok())
            .collect()
    }
}

impl PartialEq for Hand {
    fn eq(&self, other: &Self) -> bool {
        self.strength() == other.strength()
    }
}
impl Eq for Hand {}
impl PartialOrd for Hand {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl Ord for Hand {
    fn cmp(&self, other: &Self) -> Ordering {
        self.strength().cmp(other.strength())
    }
}

fn bump(n: &mut u8) {
    *n = n.saturating_add(1);
}

impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} | {}", self.cards.trim(), self.category())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Arbitrary;

    fn hand(s: &str) -> Hand {
        Hand::try_from(s).unwrap()
    }

    #[test]
    fn pairs() {
        let p1 = hand("5H 5C 6S 7S KD");
        let p2 = hand("2C 3S 8S 8D TD");
        assert_eq!(p1.category(), HandRank::OnePair);
        assert_eq!(p2.category(), HandRank::OnePair);
        assert!(p1 < p2);
    }

    #[test]
    fn high_card() {
        let p1 = hand("5D 8C 9S JS AC");
        let p2 = hand("2C 5C 7D 8S QH");
        assert_eq!(p1.category(), HandRank::HighCard);
        assert_eq!(p2.category(), HandRank::HighCard);
        assert!(p1 > p2);
    }

    #[test]
    fn flush_beats_trips() {
        let p1 = hand("2D 9C AS AH AC");
        let p2 = hand("3D 6D 7D TD QD");
        assert_eq!(p1.category(), HandRank::ThreeOfAKind);
        assert_eq!(p2.category(), HandRank::Flush);
        assert!(p1 < p2);
    }

    #[test]
    fn pair_kicker() {
        let p1 = hand("4D 6S 9H QH QC");
        let p2 = hand("3D 6D 7H QD QS");
        assert_eq!(p1.category(), HandRank::OnePair);
        assert_eq!(p2.category(), HandRank::OnePair);
        assert!(p1 > p2);
    }

    #[test]
    fn full_house() {
        let p1 = hand("2H 2D 4C 4D 4S");
        let p2 = hand("3C 3D 3S 9S 9D");
        assert_eq!(p1.category(), HandRank::FullHouse);
        assert_eq!(p2.category(), HandRank::FullHouse);
        assert!(p1 > p2);
    }

    #[test]
    fn royal_flush() {
        assert_eq!(hand("TC JC QC KC AC").category(), HandRank::RoyalFlush);
    }

    #[test]
    fn predicates() {
        let h = hand("2H 2D 4C 4D 4S");
        assert!(h.full_house());
        assert!(h.three_of_a_kind());
        assert!(h.one_pair());
        assert!(!h.two_pairs());
        assert!(!h.four_of_a_kind());
        assert!(!h.flush());
        assert!(!h.straight());

        let h = hand("9H TH JH QH KH");
        assert!(h.flush());
        assert!(h.straight());
        assert!(!h.one_pair());

        let h = hand("9H 9C JH JD KH");
        assert!(h.two_pairs());
        assert!(h.one_pair());
        assert!(!h.three_of_a_kind());
    }

    #[test]
    fn tie_break_key() {
        let key = hand("5C TH TS JD 2D").tie_break_key();
        assert_eq!(
            Vec::<(u8, Rank)>::from(key),
            vec![(2, Rank::Ten), (1, Rank::Jack), (1, Rank::Five), (1, Rank::Two)]
        );
    }

    #[test]
    fn ties_ignore_suits() {
        let p1 = hand("2C 3D 5H 7S 9C");
        let p2 = hand("2D 3H 5S 7C 9D");
        assert_eq!(p1, p2);
        assert_eq!(p1.cmp(&p2), Ordering::Equal);
    }

    #[test]
    fn display() {
        let h = hand("5C TH TS JD 2D");
        assert_eq!(h.to_string(), "5C TH TS JD 2D | OnePair");
        let h = Hand::lenient(" 5C TH TS JD 2D\n");
        assert_eq!(h.to_string(), "5C TH TS JD 2D | OnePair");
    }

    #[test]
    fn display_round_trip() {
        for _ in 0..256 {
            let h = Hand::random();
            let shown = h.to_string();
            let (cards, name) = shown.split_once(" | ").unwrap();
            let back = hand(cards);
            assert_eq!(back.ranks(), h.ranks());
            assert_eq!(back.suits(), h.suits());
            assert_eq!(HandRank::try_from(name), Ok(h.category()));
        }
    }

    #[test]
    fn strict_rejects_bad_tokens() {
        assert_eq!(
            Hand::try_from("5C TH TS JX 2D"),
            Err(ParseError::Token("JX".into()))
        );
        assert_eq!(
            Hand::try_from("5C TH TS 1D 2D"),
            Err(ParseError::Token("1D".into()))
        );
        let e = Hand::try_from("5C TH TS JX 2D").unwrap_err();
        assert_eq!(e.to_string(), "invalid card token \"JX\"");
    }

    #[test]
    fn strict_rejects_bad_sizes() {
        assert_eq!(Hand::try_from("5C TH TS JD"), Err(ParseError::Size(4)));
        assert_eq!(Hand::try_from("5C TH TS JD 2D 3D"), Err(ParseError::Size(6)));
        assert_eq!(Hand::try_from(""), Err(ParseError::Size(0)));
    }

    #[test]
    fn strict_rejects_duplicates() {
        let card = Card::try_from("TH").unwrap();
        assert_eq!(
            Hand::try_from("5C TH TH JD 2D"),
            Err(ParseError::Duplicate(card))
        );
    }

    #[test]
    fn lenient_ignores_noise() {
        let h = Hand::lenient("5C TH TS JX 2D");
        assert!(!h.is_complete());
        assert_eq!(h.size(), 5);
        assert_eq!(h.suits().values().sum::<u8>(), 4);

        let h = Hand::lenient("5C,TH;TS JD|2D");
        assert!(h.is_complete());
        assert_eq!(h.category(), HandRank::OnePair);
    }

    #[test]
    fn lenient_saturates_oversized_input() {
        let h = Hand::lenient(&format!("2C 3C 4C 5C 6C {}", "A".repeat(256)));
        assert_eq!(h.ranks()[&Rank::Ace], u8::MAX);
        assert_eq!(h.size(), 5 + u8::MAX as usize);
        assert!(!h.is_complete());

        let h = Hand::lenient(&"AH".repeat(300));
        assert_eq!(h.suits()[&Suit::H], u8::MAX);
        assert!(!h.is_complete());
    }

    #[test]
    fn strength_is_cached() {
        let h = hand("2H 2D 4C 4D 4S");
        assert!(std::ptr::eq(h.strength(), h.strength()));
        assert_eq!(h.strength().ranking(), HandRank::FullHouse);
        assert_eq!(h.clone().strength(), h.strength());
    }

    #[test]
    fn lenient_matches_strict() {
        for _ in 0..256 {
            let h = Hand::random();
            let l = Hand::parse(h.cards(), Mode::Lenient).unwrap();
            let s = Hand::parse(h.cards(), Mode::Strict).unwrap();
            assert_eq!(l.ranks(), s.ranks());
            assert_eq!(l.suits(), s.suits());
        }
    }

    #[test]
    fn multisets_sum_to_five() {
        for _ in 0..256 {
            let h = Hand::random();
            assert!(h.is_complete());
            assert_eq!(h.suits().values().sum::<u8>(), 5);
        }
    }

    #[test]
    fn stronger_category_always_wins() {
        for _ in 0..1024 {
            let a = Hand::random();
            let b = Hand::random();
            if a.category() > b.category() {
                assert!(a > b);
            }
            if a.category() < b.category() {
                assert!(a < b);
            }
        }
    }

    #[test]
    fn total_order() {
        let mut hands = (0..512).map(|_| Hand::random()).collect::<Vec<_>>();
        hands.sort();
        for w in hands.windows(3) {
            assert!(w[0] <= w[1]);
            assert!(w[1] <= w[2]);
            assert!(w[0] <= w[2]);
            assert_eq!(w[0].cmp(&w[1]), w[1].cmp(&w[0]).reverse());
        }
        for h in hands.iter() {
            assert_eq!(h.cmp(h), Ordering::Equal);
        }
    }
}
