//! # Preflop Equity
//!
//! A Monte Carlo solver for the preflop equity of a Texas Hold'em starting
//! hand against N random opponents, under a wall-clock time budget.
//!
//! ## Features
//!
//! - **Exact Hand Ranking**: Best 5-of-7 search with full tie-break rules
//! - **Deadline Aware**: Checks the budget every 100 trials and reports whatever completed
//! - **Reproducible**: Inject a seed to replay the exact trial sequence
//! - **Parallel Batches**: Independent requests run across the rayon pool
//!
//! ## Quick Start
//!
//! ```
//! let result = preflop_equity::evaluate(["A", "K"], ["s", "s"], 2, 200).unwrap();
//! println!(
//!     "win {:.3} tie {:.3} ev {:.2}bb -> {}",
//!     result.win_probability, result.tie_probability, result.expected_value_bb, result.recommendation
//! );
//! ```
//!
//! ## Modules
//!
//! - [`cards`]: Card, hole cards and deck
//! - [`eval`]: Hand ranks and the hand evaluator
//! - [`equity`]: Validation, simulation and statistics
//! - [`error`]: Error types
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                  EquitySolver::evaluate(request)                │
//! │  - Symbol/bounds validation   - Trial cap policy                │
//! └─────────────────────────────────────────────────────────────────┘
//!                               │
//!                               ▼
//!    ┌──────────────┐     ┌───────────────┐     ┌───────────────┐
//!    │    Deck      │────▶│  Monte Carlo  │────▶│  Statistics   │
//!    │  (50 cards)  │     │   Simulator   │     │ EquityResult  │
//!    └──────────────┘     └───────────────┘     └───────────────┘
//!                               │
//!                               ▼
//!                       ┌───────────────┐
//!                       │HandEvaluator  │
//!                       │ best 5 of 7   │
//!                       └───────────────┘
//! ```

/// Card, hole cards and deck representations.
pub mod cards;

/// Hand ranking.
pub mod eval;

/// Monte Carlo equity estimation.
pub mod equity;

/// Error types.
pub mod error;

// Re-export commonly used types at crate root for convenience
pub use equity::{evaluate, EquityRequest, EquityResult, EquitySolver, Recommendation, SolverConfig};
pub use error::{ConfigError, EvalError, ValidationError};
