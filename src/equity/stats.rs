//! Turning raw trial counts into an equity estimate.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::simulator::SimulationTally;

/// Version tag reported with every result.
pub const SOLVER_VERSION: &str = "solver-mc-0.1";

/// Win probability at or above which the hand is a raise.
pub const RAISE_THRESHOLD: f64 = 0.70;

/// Win probability at or above which the hand is a call.
pub const CALL_THRESHOLD: f64 = 0.50;

const MIN_CONFIDENCE: f64 = 0.50;
const MAX_CONFIDENCE: f64 = 0.99;
const DEADLINE_BOOST: f64 = 0.02;

/// Discrete preflop action suggested by the win probability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Recommendation {
    Raise,
    Call,
    Fold,
}

impl Recommendation {
    /// Pick the action for a given win probability.
    pub fn from_win_probability(win: f64) -> Self {
        if win >= RAISE_THRESHOLD {
            Recommendation::Raise
        } else if win >= CALL_THRESHOLD {
            Recommendation::Call
        } else {
            Recommendation::Fold
        }
    }

    /// Lowercase action name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Recommendation::Raise => "raise",
            Recommendation::Call => "call",
            Recommendation::Fold => "fold",
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Equity estimate for one request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EquityResult {
    /// Fraction of trials won outright.
    pub win_probability: f64,
    /// Fractional pot share from tied trials.
    pub tie_probability: f64,
    /// Remaining probability mass.
    pub loss_probability: f64,
    /// Expected value in big blinds, modelling a pot of one big blind per player.
    pub expected_value_bb: f64,
    pub recommendation: Recommendation,
    /// Heuristic reliability score in [0.50, 0.99].
    pub confidence: f64,
    /// Trials actually completed.
    pub iterations: u64,
}

/// Summarize a finished simulation.
///
/// A tally with zero trials produces a degenerate result: everything is
/// counted as a loss and confidence sits at its floor.
pub fn summarize(tally: &SimulationTally, players: u8, time_budget_ms: u64) -> EquityResult {
    let trials = tally.completed_trials;
    let (win, tie) = if trials == 0 {
        (0.0, 0.0)
    } else {
        (
            tally.wins as f64 / trials as f64,
            tally.tie_credit / trials as f64,
        )
    };
    let loss = (1.0 - win - tie).max(0.0);

    EquityResult {
        win_probability: win,
        tie_probability: tie,
        loss_probability: loss,
        expected_value_bb: expected_value_bb(win, loss, players),
        recommendation: Recommendation::from_win_probability(win),
        confidence: confidence(win, trials, tally.elapsed_ms, time_budget_ms),
        iterations: trials,
    }
}

/// Pot of `players` big blinds won with probability `win`, one big blind
/// lost with probability `loss`.
pub fn expected_value_bb(win: f64, loss: f64, players: u8) -> f64 {
    win * f64::from(players) - loss
}

/// Confidence from the binomial standard error of the win rate, with a
/// small boost when the run used at least 90% of its budget.
pub fn confidence(win: f64, trials: u64, elapsed_ms: u64, time_budget_ms: u64) -> f64 {
    if trials == 0 {
        return MIN_CONFIDENCE;
    }
    let std_error = (win * (1.0 - win) / trials as f64).sqrt();
    let mut confidence = (1.0 - 3.0 * std_error).clamp(MIN_CONFIDENCE, MAX_CONFIDENCE);
    if elapsed_ms as f64 >= 0.9 * time_budget_ms as f64 {
        confidence = (confidence + DEADLINE_BOOST).min(MAX_CONFIDENCE);
    }
    confidence
}

/// Serializable response shape with rounded figures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquityReport {
    pub win_prob: f64,
    pub tie_prob: f64,
    pub loss_prob: f64,
    pub ev_bb: f64,
    pub recommendation: Recommendation,
    pub confidence: f64,
    pub iterations: u64,
    pub solver_version: String,
}

impl From<&EquityResult> for EquityReport {
    fn from(result: &EquityResult) -> Self {
        Self {
            win_prob: round_to(result.win_probability, 4),
            tie_prob: round_to(result.tie_probability, 4),
            loss_prob: round_to(result.loss_probability, 4),
            ev_bb: round_to(result.expected_value_bb, 3),
            recommendation: result.recommendation,
            confidence: round_to(result.confidence, 3),
            iterations: result.iterations,
            solver_version: SOLVER_VERSION.to_string(),
        }
    }
}

fn round_to(value: f64, places: i32) -> f64 {
    let scale = 10f64.powi(places);
    (value * scale).round() / scale
}
