use super::rank::Rank;

/// A hand's tie-break key.
///
/// Every distinct rank in the hand paired with how often it occurs,
/// sorted by frequency then by rank, both descending. The ranks that make
/// up the hand's combination (quads, trips, pairs) come ahead of the
/// kickers, and the derived `Ord` compares element by element.
#[derive(Debug, Clone, Default, Hash, Eq, PartialEq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Kickers(Vec<(u8, Rank)>);

impl Kickers {
    pub fn iter(&self) -> impl Iterator<Item = &(u8, Rank)> {
        self.0.iter()
    }
    pub fn ranks(&self) -> Vec<Rank> {
        self.0.iter().map(|(_, r)| *r).collect()
    }
}

/// (frequency, rank) collection, sorted on the way in
impl FromIterator<(u8, Rank)> for Kickers {
    fn from_iter<I: IntoIterator<Item = (u8, Rank)>>(iter: I) -> Self {
        let mut pairs = iter.into_iter().collect::<Vec<_>>();
        pairs.sort_by(|a, b| b.cmp(a));
        Self(pairs)
    }
}
impl From<Kickers> for Vec<(u8, Rank)> {
    fn from(k: Kickers) -> Self {
        k.0
    }
}

impl std::fmt::Display for Kickers {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for (n, rank) in self.iter() {
            write!(f, "{}x{} ", n, rank)?;
        }
        Ok(())
    }
}
