//! Monte Carlo preflop equity.
//!
//! # Overview
//!
//! A request names hero's two cards, the table size and a time budget. The
//! solver repeatedly:
//! 1. Shuffles a fresh copy of the 50 cards hero does not hold
//! 2. Deals a five-card board and two cards to each opponent
//! 3. Ranks every best seven-card hand and scores hero's result
//!
//! until the trial cap is reached or, at a checkpoint, the budget has run
//! out. The counts are then summarized into probabilities, an EV estimate,
//! a recommendation and a confidence score.
//!
//! # Example
//!
//! ```
//! use preflop_equity::equity::{EquityRequest, EquitySolver, SolverConfig, TrialCap};
//!
//! let solver = EquitySolver::new(
//!     SolverConfig::default().with_seed(42).with_trial_cap(TrialCap::Fixed(2_000)),
//! );
//! let result = solver
//!     .evaluate(&EquityRequest::new(["K", "K"], ["h", "c"], 3, 1_000))
//!     .unwrap();
//! assert_eq!(result.iterations, 2_000);
//! println!("win {:.3} -> {}", result.win_probability, result.recommendation);
//! ```
//!
//! # Modules
//!
//! - `config`: Solver configuration and trial cap policies
//! - `request`: Input validation
//! - `simulator`: The Monte Carlo trial loop
//! - `stats`: Probabilities, EV, recommendation and confidence
//! - `solver`: Entry points tying it together

pub mod config;
pub mod request;
pub mod simulator;
pub mod solver;
pub mod stats;

pub use config::{SolverConfig, TrialCap, TrialPolicy};
pub use request::{EquityRequest, ValidatedRequest};
pub use simulator::{MonteCarloSimulator, SimulationTally, TrialOutcome};
pub use solver::{evaluate, EquitySolver};
pub use stats::{summarize, EquityReport, EquityResult, Recommendation};
