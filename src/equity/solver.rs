//! The equity solver entry points.
//!
//! `EquitySolver` glues validation, the trial cap policy, the simulator and
//! the statistics together. Every call builds its own RNG, deck and tally,
//! so a solver can be shared across threads freely.

use rand::rngs::StdRng;
use rand::SeedableRng;
use rayon::prelude::*;

use super::config::{SolverConfig, TrialPolicy};
use super::request::{EquityRequest, ValidatedRequest};
use super::simulator::MonteCarloSimulator;
use super::stats::{summarize, EquityResult};
use crate::error::ValidationError;

/// Evaluate hero's preflop equity with the default configuration.
///
/// # Example
/// ```
/// let result = preflop_equity::evaluate(["A", "A"], ["s", "d"], 2, 100).unwrap();
/// assert!(result.win_probability > 0.5);
/// assert!(preflop_equity::evaluate(["A", "A"], ["s", "s"], 2, 100).is_err());
/// ```
pub fn evaluate(
    ranks: [&str; 2],
    suits: [&str; 2],
    players: u8,
    max_time_ms: u64,
) -> Result<EquityResult, ValidationError> {
    EquitySolver::default().evaluate(&EquityRequest::new(ranks, suits, players, max_time_ms))
}

/// Monte Carlo equity solver.
#[derive(Debug, Clone, Default)]
pub struct EquitySolver {
    config: SolverConfig,
}

impl EquitySolver {
    /// Create a solver with the given configuration.
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    /// The solver's configuration.
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Validate and evaluate a request.
    pub fn evaluate(&self, request: &EquityRequest) -> Result<EquityResult, ValidationError> {
        let validated = request.validate()?;
        Ok(self.evaluate_validated(&validated))
    }

    /// Evaluate a request that already passed validation.
    pub fn evaluate_validated(&self, request: &ValidatedRequest) -> EquityResult {
        self.evaluate_with_policy(request, &self.config.trial_cap)
    }

    /// Evaluate with a caller-supplied trial cap policy.
    pub fn evaluate_with_policy<P: TrialPolicy + ?Sized>(
        &self,
        request: &ValidatedRequest,
        policy: &P,
    ) -> EquityResult {
        self.run(request, policy, self.config.seed)
    }

    /// Evaluate independent requests in parallel, one per rayon task.
    ///
    /// With a configured seed, request `i` is simulated from
    /// `seed.wrapping_add(i)`, so a batch is reproducible as a whole.
    pub fn evaluate_batch(
        &self,
        requests: &[EquityRequest],
    ) -> Vec<Result<EquityResult, ValidationError>> {
        requests
            .par_iter()
            .enumerate()
            .map(|(i, request)| -> Result<EquityResult, ValidationError> {
                let validated = request.validate()?;
                let seed = self.config.seed.map(|s| s.wrapping_add(i as u64));
                Ok(self.run(&validated, &self.config.trial_cap, seed))
            })
            .collect()
    }

    fn run<P: TrialPolicy + ?Sized>(
        &self,
        request: &ValidatedRequest,
        policy: &P,
        seed: Option<u64>,
    ) -> EquityResult {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let max_trials = policy.max_trials(request.time_budget_ms, request.players);

        let tally = MonteCarloSimulator::new(rng)
            .with_checkpoint_interval(self.config.checkpoint_interval)
            .simulate(&request.hero, request.players, max_trials, request.time_budget_ms);

        summarize(&tally, request.players, request.time_budget_ms)
    }
}
