//! Error types for the equity solver.
//!
//! Every error here is local and synchronous: inputs are checked before a
//! simulation starts, and nothing inside the trial loop can fail.

use thiserror::Error;

use crate::cards::Card;

/// Input rejected before any simulation runs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("invalid rank '{0}'")]
    InvalidRank(String),

    #[error("invalid suit '{0}'")]
    InvalidSuit(String),

    #[error("unsupported card '{0}'")]
    InvalidCard(String),

    #[error("expected 2 rank and 2 suit symbols, got {ranks} and {suits}")]
    SymbolCount { ranks: usize, suits: usize },

    #[error("duplicate cards are not allowed ({0})")]
    DuplicateCards(Card),

    #[error("players must be between {min} and {max}, got {got}")]
    PlayerCount { got: u8, min: u8, max: u8 },

    #[error("max_time_ms must be between {min} and {max}, got {got}")]
    TimeBudget { got: u64, min: u64, max: u64 },
}

/// Misuse of the hand evaluator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    #[error("hand evaluation needs 5 to 7 cards, got {0}")]
    InvalidCardCount(usize),
}

/// Errors from loading or validating a [`SolverConfig`](crate::equity::SolverConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("checkpoint interval must be at least 1")]
    ZeroCheckpoint,

    #[error("trial cap bounds are inverted: min {min} > max {max}")]
    InvertedTrialBounds { min: u64, max: u64 },

    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}
