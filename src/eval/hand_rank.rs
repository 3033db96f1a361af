//! Comparable hand strength values.

use std::fmt;

/// Hand rank categories, ordered from worst to best.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HandCategory {
    HighCard = 0,
    OnePair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
}

impl HandCategory {
    /// Get the category name.
    pub fn name(&self) -> &'static str {
        match self {
            HandCategory::HighCard => "High Card",
            HandCategory::OnePair => "One Pair",
            HandCategory::TwoPair => "Two Pair",
            HandCategory::ThreeOfAKind => "Three of a Kind",
            HandCategory::Straight => "Straight",
            HandCategory::Flush => "Flush",
            HandCategory::FullHouse => "Full House",
            HandCategory::FourOfAKind => "Four of a Kind",
            HandCategory::StraightFlush => "Straight Flush",
        }
    }
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A hand rank that can be compared.
///
/// Ordering is lexicographic: category first, then the tiebreak ranks in
/// the order they were listed. Unused tiebreak slots are zero, and every
/// category always fills the same number of slots, so padding never decides
/// a comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HandRank {
    category: HandCategory,
    tiebreak: [u8; 5],
    len: u8,
}

impl HandRank {
    /// Create a new hand rank from a category and up to five tiebreak ranks.
    pub fn new(category: HandCategory, tiebreak: &[u8]) -> Self {
        debug_assert!(tiebreak.len() <= 5, "at most 5 tiebreak ranks");
        let mut slots = [0u8; 5];
        let len = tiebreak.len().min(5);
        slots[..len].copy_from_slice(&tiebreak[..len]);
        Self {
            category,
            tiebreak: slots,
            len: len as u8,
        }
    }

    /// Get the hand category.
    pub fn category(&self) -> HandCategory {
        self.category
    }

    /// Get the tiebreak ranks (2-14), most significant first.
    pub fn tiebreak(&self) -> &[u8] {
        &self.tiebreak[..self.len as usize]
    }
}

impl fmt::Display for HandRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:?}", self.category, self.tiebreak())
    }
}
