//! Request validation.
//!
//! Turns raw rank/suit symbols, a table size and a time budget into a
//! `ValidatedRequest`. Nothing is simulated until this succeeds.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, HoleCards};
use crate::error::ValidationError;

/// Smallest table: hero plus one opponent.
pub const MIN_PLAYERS: u8 = 2;
/// Largest table.
pub const MAX_PLAYERS: u8 = 10;
/// Smallest accepted time budget in milliseconds.
pub const MIN_TIME_MS: u64 = 100;
/// Largest accepted time budget in milliseconds.
pub const MAX_TIME_MS: u64 = 5_000;
/// Time budget used when a request leaves it out.
pub const DEFAULT_TIME_MS: u64 = 800;

fn default_time_ms() -> u64 {
    DEFAULT_TIME_MS
}

/// An equity request as it arrives from a caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquityRequest {
    /// Two rank symbols, e.g. `["A", "k"]`.
    pub ranks: Vec<String>,
    /// Two suit symbols, e.g. `["s", "D"]`.
    pub suits: Vec<String>,
    /// Players at the table including hero.
    pub players: u8,
    /// Wall-clock budget for the simulation.
    #[serde(default = "default_time_ms")]
    pub max_time_ms: u64,
}

impl EquityRequest {
    /// Build a request from borrowed symbols.
    pub fn new(ranks: [&str; 2], suits: [&str; 2], players: u8, max_time_ms: u64) -> Self {
        Self {
            ranks: ranks.iter().map(|r| r.to_string()).collect(),
            suits: suits.iter().map(|s| s.to_string()).collect(),
            players,
            max_time_ms,
        }
    }

    /// Check every field and build hero's hole cards.
    pub fn validate(&self) -> Result<ValidatedRequest, ValidationError> {
        if self.ranks.len() != 2 || self.suits.len() != 2 {
            return Err(ValidationError::SymbolCount {
                ranks: self.ranks.len(),
                suits: self.suits.len(),
            });
        }

        let first = Card::from_symbols(&self.ranks[0], &self.suits[0])?;
        let second = Card::from_symbols(&self.ranks[1], &self.suits[1])?;
        let hero = HoleCards::new(first, second)?;

        ValidatedRequest::new(hero, self.players, self.max_time_ms)
    }
}

/// A request whose inputs are known to be simulatable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidatedRequest {
    pub hero: HoleCards,
    pub players: u8,
    pub time_budget_ms: u64,
}

impl ValidatedRequest {
    /// Check the table size and time budget for already-parsed hole cards.
    pub fn new(hero: HoleCards, players: u8, time_budget_ms: u64) -> Result<Self, ValidationError> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&players) {
            return Err(ValidationError::PlayerCount {
                got: players,
                min: MIN_PLAYERS,
                max: MAX_PLAYERS,
            });
        }

        if !(MIN_TIME_MS..=MAX_TIME_MS).contains(&time_budget_ms) {
            return Err(ValidationError::TimeBudget {
                got: time_budget_ms,
                min: MIN_TIME_MS,
                max: MAX_TIME_MS,
            });
        }

        Ok(Self {
            hero,
            players,
            time_budget_ms,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Suit;

    #[test]
    fn test_valid_request() {
        let request = EquityRequest::new(["a", "K"], ["S", "s"], 6, 400);
        let validated = request.validate().unwrap();
        assert_eq!(validated.hero.card1, Card::new(14, Suit::Spades));
        assert_eq!(validated.hero.card2, Card::new(13, Suit::Spades));
        assert_eq!(validated.players, 6);
        assert_eq!(validated.time_budget_ms, 400);
    }

    #[test]
    fn test_bad_symbols() {
        let bad_rank = EquityRequest::new(["A", "X"], ["s", "d"], 2, 800);
        assert_eq!(bad_rank.validate(), Err(ValidationError::InvalidRank("X".into())));

        let bad_suit = EquityRequest::new(["A", "K"], ["s", "x"], 2, 800);
        assert_eq!(bad_suit.validate(), Err(ValidationError::InvalidSuit("x".into())));

        let mut short = EquityRequest::new(["A", "K"], ["s", "d"], 2, 800);
        short.ranks.pop();
        assert_eq!(
            short.validate(),
            Err(ValidationError::SymbolCount { ranks: 1, suits: 2 })
        );
    }

    #[test]
    fn test_duplicate_cards_always_rejected() {
        for players in [2, 6, 10, 11] {
            for max_time_ms in [50, 100, 800, 9_000] {
                let request = EquityRequest::new(["A", "a"], ["s", "S"], players, max_time_ms);
                assert!(
                    matches!(request.validate(), Err(ValidationError::DuplicateCards(_))),
                    "players {} budget {}",
                    players,
                    max_time_ms
                );
            }
        }
    }

    #[test]
    fn test_player_bounds() {
        for players in [0, 1, 11, 255] {
            let request = EquityRequest::new(["7", "2"], ["h", "c"], players, 800);
            assert!(matches!(
                request.validate(),
                Err(ValidationError::PlayerCount { .. })
            ));
        }
        assert!(EquityRequest::new(["7", "2"], ["h", "c"], 2, 800).validate().is_ok());
        assert!(EquityRequest::new(["7", "2"], ["h", "c"], 10, 800).validate().is_ok());
    }

    #[test]
    fn test_time_bounds() {
        for max_time_ms in [0, 99, 5_001] {
            let request = EquityRequest::new(["7", "2"], ["h", "c"], 2, max_time_ms);
            assert!(matches!(
                request.validate(),
                Err(ValidationError::TimeBudget { .. })
            ));
        }
        assert!(EquityRequest::new(["7", "2"], ["h", "c"], 2, 100).validate().is_ok());
        assert!(EquityRequest::new(["7", "2"], ["h", "c"], 2, 5_000).validate().is_ok());
    }

    #[test]
    fn test_deserialize_defaults_time_budget() {
        let request: EquityRequest =
            serde_json::from_str(r#"{"ranks": ["A", "A"], "suits": ["s", "d"], "players": 2}"#).unwrap();
        assert_eq!(request.max_time_ms, DEFAULT_TIME_MS);
        assert!(request.validate().is_ok());
    }
}
