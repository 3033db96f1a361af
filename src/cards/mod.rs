//! Card and deck model.
//!
//! ## Modules
//!
//! - `card`: Card, suit and hole-card representations
//! - `deck`: The 52-card deck, dead-card removal and shuffling

pub mod card;
pub mod deck;

pub use card::{rank_from_char, Card, HoleCards, Suit};
pub use deck::Deck;
