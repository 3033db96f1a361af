//! Card representation.
//!
//! - `Suit`: one of the four suits
//! - `Card`: a single playing card with rank (2-14) and suit
//! - `HoleCards`: a player's two private cards

use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

/// Rank values (2-14: deuce to ace).
pub const RANK_2: u8 = 2;
pub const RANK_5: u8 = 5;
pub const RANK_T: u8 = 10;
pub const RANK_J: u8 = 11;
pub const RANK_Q: u8 = 12;
pub const RANK_K: u8 = 13;
pub const RANK_A: u8 = 14;

/// Rank characters for display, indexed by `rank - 2`.
const RANK_CHARS: [char; 13] = ['2', '3', '4', '5', '6', '7', '8', '9', 'T', 'J', 'Q', 'K', 'A'];

/// Suit characters for display, indexed by suit.
const SUIT_CHARS: [char; 4] = ['c', 'd', 'h', 's'];

/// Suit of a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Suit {
    Clubs = 0,
    Diamonds = 1,
    Hearts = 2,
    Spades = 3,
}

impl Suit {
    /// All four suits in index order.
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    /// Parse a suit symbol (`c d h s`, case-insensitive).
    pub fn from_char(c: char) -> Option<Self> {
        SUIT_CHARS
            .iter()
            .position(|&s| s == c.to_ascii_lowercase())
            .map(|i| Self::ALL[i])
    }

    /// Get suit character for display.
    pub fn to_char(self) -> char {
        SUIT_CHARS[self as usize]
    }
}

/// Parse a rank symbol (`2-9 T J Q K A`, case-insensitive) into 2-14.
pub fn rank_from_char(c: char) -> Option<u8> {
    RANK_CHARS
        .iter()
        .position(|&r| r == c.to_ascii_uppercase())
        .map(|i| i as u8 + RANK_2)
}

/// A single playing card.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Card {
    /// Card index 0-51: (rank - 2) * 4 + suit
    id: u8,
}

impl Card {
    /// Create a new card from rank (2-14) and suit.
    #[inline]
    pub fn new(rank: u8, suit: Suit) -> Self {
        debug_assert!((RANK_2..=RANK_A).contains(&rank), "rank must be 2-14");
        Self {
            id: (rank - RANK_2) * 4 + suit as u8,
        }
    }

    /// Create a card from its ID (0-51).
    #[inline]
    pub fn from_id(id: u8) -> Self {
        debug_assert!(id < 52, "card id must be 0-51");
        Self { id }
    }

    /// Build a card from separate rank and suit symbols, e.g. `("a", "S")`.
    pub fn from_symbols(rank: &str, suit: &str) -> Result<Self, ValidationError> {
        let rank_value = single_char(rank)
            .and_then(rank_from_char)
            .ok_or_else(|| ValidationError::InvalidRank(rank.to_string()))?;
        let suit_value = single_char(suit)
            .and_then(Suit::from_char)
            .ok_or_else(|| ValidationError::InvalidSuit(suit.to_string()))?;
        Ok(Self::new(rank_value, suit_value))
    }

    /// Get the card's ID (0-51).
    #[inline]
    pub fn id(&self) -> u8 {
        self.id
    }

    /// Get the card's rank (2-14).
    #[inline]
    pub fn rank(&self) -> u8 {
        self.id / 4 + RANK_2
    }

    /// Get the card's suit.
    #[inline]
    pub fn suit(&self) -> Suit {
        Suit::ALL[(self.id % 4) as usize]
    }

    /// Get rank character for display.
    pub fn rank_char(&self) -> char {
        RANK_CHARS[(self.rank() - RANK_2) as usize]
    }
}

fn single_char(s: &str) -> Option<char> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

impl FromStr for Card {
    type Err = ValidationError;

    /// Parse a card from string like "As", "kh", "2C".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(r), Some(u), None) => {
                let rank = rank_from_char(r).ok_or_else(|| ValidationError::InvalidRank(r.to_string()))?;
                let suit = Suit::from_char(u).ok_or_else(|| ValidationError::InvalidSuit(u.to_string()))?;
                Ok(Self::new(rank, suit))
            }
            _ => Err(ValidationError::InvalidCard(s.to_string())),
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank_char(), self.suit().to_char())
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

/// A player's two hole cards.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct HoleCards {
    /// First card (higher rank by convention).
    pub card1: Card,
    /// Second card.
    pub card2: Card,
}

impl HoleCards {
    /// Create hole cards, ordering by rank (higher first).
    ///
    /// Fails if both cards are the same card.
    pub fn new(card1: Card, card2: Card) -> Result<Self, ValidationError> {
        if card1 == card2 {
            return Err(ValidationError::DuplicateCards(card1));
        }
        if card1.rank() >= card2.rank() {
            Ok(Self { card1, card2 })
        } else {
            Ok(Self {
                card1: card2,
                card2: card1,
            })
        }
    }

    /// Check if hole cards are suited.
    pub fn is_suited(&self) -> bool {
        self.card1.suit() == self.card2.suit()
    }

    /// Check if hole cards are a pair.
    pub fn is_pair(&self) -> bool {
        self.card1.rank() == self.card2.rank()
    }

    /// Get both cards as an array.
    pub fn cards(&self) -> [Card; 2] {
        [self.card1, self.card2]
    }

    /// Check if a card conflicts with these hole cards.
    pub fn contains(&self, card: Card) -> bool {
        self.card1 == card || self.card2 == card
    }
}

impl FromStr for HoleCards {
    type Err = ValidationError;

    /// Parse hole cards from strings like "AhKs", "Ah Ks" or "Ah,Ks".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let compact: String = s.chars().filter(|c| !c.is_whitespace() && *c != ',').collect();
        if compact.chars().count() != 4 || !compact.is_ascii() {
            return Err(ValidationError::InvalidCard(s.to_string()));
        }
        let c1: Card = compact[0..2].parse()?;
        let c2: Card = compact[2..4].parse()?;
        Self::new(c1, c2)
    }
}

impl fmt::Display for HoleCards {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.card1, self.card2)
    }
}

impl fmt::Debug for HoleCards {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
