//! Configuration options for the equity solver.
//!
//! This module provides the solver configuration and the policy that turns
//! a time budget into a cap on the number of simulated trials.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::ConfigError;

/// Derives the maximum number of trials for a request.
///
/// The cap only bounds the work; the time budget still stops a simulation
/// early. Constants are tuned to one machine's throughput, so callers with
/// different hardware can supply their own policy.
pub trait TrialPolicy {
    /// Maximum trials for a request with this budget and table size.
    fn max_trials(&self, time_budget_ms: u64, players: u8) -> u64;
}

/// Built-in trial cap policies.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrialCap {
    /// Scale with the time budget, divided across the table:
    /// `clamp(budget_ms * trials_per_ms / players, min_trials, max_trials)`.
    Budget {
        trials_per_ms: u64,
        min_trials: u64,
        max_trials: u64,
    },
    /// Always allow exactly this many trials.
    Fixed(u64),
}

impl Default for TrialCap {
    fn default() -> Self {
        TrialCap::Budget {
            trials_per_ms: 60,
            min_trials: 3_000,
            max_trials: 50_000,
        }
    }
}

impl TrialPolicy for TrialCap {
    fn max_trials(&self, time_budget_ms: u64, players: u8) -> u64 {
        match *self {
            TrialCap::Budget {
                trials_per_ms,
                min_trials,
                max_trials,
            } => {
                let scaled = time_budget_ms.saturating_mul(trials_per_ms) / u64::from(players.max(2));
                // Inverted bounds are rejected by `validate`; unchecked configs let the ceiling win.
                scaled.max(min_trials).min(max_trials)
            }
            TrialCap::Fixed(trials) => trials,
        }
    }
}

/// Configuration for the equity solver.
///
/// # Example
/// ```
/// use preflop_equity::equity::{SolverConfig, TrialCap};
///
/// let config = SolverConfig::default().with_seed(7).with_trial_cap(TrialCap::Fixed(1_000));
/// assert_eq!(config.checkpoint_interval, 100);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// Number of trials between wall-clock deadline checks.
    ///
    /// Bounds both the timing overhead and the worst-case overrun of the
    /// time budget.
    pub checkpoint_interval: u64,

    /// Policy that caps the trial count for each request.
    pub trial_cap: TrialCap,

    /// Random seed for reproducibility.
    ///
    /// If set, every request is simulated from this seed, making results
    /// reproducible. If `None`, a fresh entropy seed is drawn per request.
    pub seed: Option<u64>,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            checkpoint_interval: 100,
            trial_cap: TrialCap::default(),
            seed: None,
        }
    }
}

impl SolverConfig {
    /// Create a new SolverConfig with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: set the deadline check interval.
    pub fn with_checkpoint_interval(mut self, trials: u64) -> Self {
        self.checkpoint_interval = trials;
        self
    }

    /// Builder method: set the trial cap policy.
    pub fn with_trial_cap(mut self, cap: TrialCap) -> Self {
        self.trial_cap = cap;
        self
    }

    /// Builder method: set random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Load configuration from a JSON file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&content)
    }

    /// Parse configuration from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration and return any errors.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.checkpoint_interval == 0 {
            return Err(ConfigError::ZeroCheckpoint);
        }

        if let TrialCap::Budget {
            min_trials,
            max_trials,
            ..
        } = self.trial_cap
        {
            if min_trials > max_trials {
                return Err(ConfigError::InvertedTrialBounds {
                    min: min_trials,
                    max: max_trials,
                });
            }
        }

        Ok(())
    }
}
