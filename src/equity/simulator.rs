//! Monte Carlo equity simulation.
//!
//! Each trial shuffles a fresh copy of the request's 50-card deck, deals a
//! five-card board and two cards to every opponent, then compares hero's
//! best hand against the best opponent hand.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

use crate::cards::{Card, Deck, HoleCards};
use crate::eval::{HandEvaluator, HandRank};

/// Default number of trials between deadline checks.
pub const DEFAULT_CHECKPOINT_INTERVAL: u64 = 100;

/// Board cards dealt per trial.
const BOARD_SIZE: usize = 5;

/// Smallest table the simulator deals: hero plus one opponent.
pub const MIN_SIMULATED_PLAYERS: u8 = 2;

/// Largest table the 50-card working deck can serve: 5 + 2 * 22 <= 50.
pub const MAX_SIMULATED_PLAYERS: u8 = 23;

/// Result of a single simulated deal from hero's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrialOutcome {
    /// Hero's hand beats every opponent.
    Win,
    /// Hero shares the best hand with `others` opponents.
    Tie { others: usize },
    /// At least one opponent holds a better hand.
    Loss,
}

impl TrialOutcome {
    /// Classify hero's rank against every opponent rank in one pass.
    pub fn classify<I>(hero: HandRank, opponents: I) -> Self
    where
        I: IntoIterator<Item = HandRank>,
    {
        let mut best = None::<HandRank>;
        let mut tied_at_best = 0;
        for rank in opponents {
            match best {
                Some(current) if rank < current => {}
                Some(current) if rank == current => tied_at_best += 1,
                _ => {
                    best = Some(rank);
                    tied_at_best = 1;
                }
            }
        }

        match best {
            None => TrialOutcome::Win,
            Some(best) if hero > best => TrialOutcome::Win,
            Some(best) if hero == best => TrialOutcome::Tie { others: tied_at_best },
            Some(_) => TrialOutcome::Loss,
        }
    }

    /// Share of the pot credited to hero.
    pub fn credit(&self) -> f64 {
        match self {
            TrialOutcome::Win => 1.0,
            TrialOutcome::Tie { others } => 1.0 / (1 + others) as f64,
            TrialOutcome::Loss => 0.0,
        }
    }
}

/// Running counts for one simulation call.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SimulationTally {
    /// Trials hero won outright.
    pub wins: u64,
    /// Sum of fractional pot shares from tied trials.
    pub tie_credit: f64,
    /// Trials fully simulated.
    pub completed_trials: u64,
    /// Wall-clock time spent simulating.
    pub elapsed_ms: u64,
}

impl SimulationTally {
    /// Create an empty tally.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one trial's outcome.
    pub fn record(&mut self, outcome: TrialOutcome) {
        match outcome {
            TrialOutcome::Win => self.wins += 1,
            TrialOutcome::Tie { .. } => self.tie_credit += outcome.credit(),
            TrialOutcome::Loss => {}
        }
        self.completed_trials += 1;
    }
}

/// Monte Carlo simulator over an injected random source.
///
/// Owns its RNG, so independent simulators can run on separate threads
/// without coordination. Seeding the RNG makes the trial sequence
/// reproducible.
///
/// # Example
/// ```
/// use preflop_equity::cards::HoleCards;
/// use preflop_equity::equity::MonteCarloSimulator;
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
///
/// let hero: HoleCards = "AsAd".parse().unwrap();
/// let mut sim = MonteCarloSimulator::new(StdRng::seed_from_u64(1));
/// let tally = sim.simulate(&hero, 2, 500, 10_000);
/// assert_eq!(tally.completed_trials, 500);
/// ```
#[derive(Debug, Clone)]
pub struct MonteCarloSimulator<R: Rng> {
    evaluator: HandEvaluator,
    rng: R,
    checkpoint_interval: u64,
}

impl<R: Rng> MonteCarloSimulator<R> {
    /// Create a simulator drawing from `rng`.
    pub fn new(rng: R) -> Self {
        Self {
            evaluator: HandEvaluator::new(),
            rng,
            checkpoint_interval: DEFAULT_CHECKPOINT_INTERVAL,
        }
    }

    /// Builder method: check the deadline every `trials` trials.
    pub fn with_checkpoint_interval(mut self, trials: u64) -> Self {
        self.checkpoint_interval = trials.max(1);
        self
    }

    /// Number of trials between deadline checks.
    pub fn checkpoint_interval(&self) -> u64 {
        self.checkpoint_interval
    }

    /// Simulate up to `max_trials` deals, stopping at the first checkpoint
    /// where `time_budget_ms` has elapsed.
    ///
    /// `players` counts hero, so `players - 1` opponents are dealt in. Counts
    /// outside `MIN_SIMULATED_PLAYERS..=MAX_SIMULATED_PLAYERS` are clamped to
    /// the nearest table one deck can serve.
    pub fn simulate(
        &mut self,
        hero: &HoleCards,
        players: u8,
        max_trials: u64,
        time_budget_ms: u64,
    ) -> SimulationTally {
        let seats = players.clamp(MIN_SIMULATED_PLAYERS, MAX_SIMULATED_PLAYERS);
        if seats != players {
            log::warn!(
                "player count {} cannot be dealt from one deck, simulating {}",
                players,
                seats
            );
        }
        let players = seats;

        let base = Deck::without(&hero.cards());
        let opponents = usize::from(players - 1);
        let budget = Duration::from_millis(time_budget_ms);
        let start = Instant::now();
        let mut tally = SimulationTally::new();
        let mut hit_deadline = false;

        for _ in 0..max_trials {
            let outcome = self.run_trial(&base, hero, opponents);
            tally.record(outcome);

            if tally.completed_trials % self.checkpoint_interval == 0 && start.elapsed() >= budget {
                hit_deadline = true;
                break;
            }
        }

        tally.elapsed_ms = start.elapsed().as_millis() as u64;

        if hit_deadline {
            log::debug!(
                "deadline reached for {} ({} players): {} of {} trials in {}ms",
                hero,
                players,
                tally.completed_trials,
                max_trials,
                tally.elapsed_ms
            );
        } else {
            log::debug!(
                "trial cap reached for {} ({} players): {} trials in {}ms",
                hero,
                players,
                tally.completed_trials,
                tally.elapsed_ms
            );
        }

        tally
    }

    /// Simulate one deal against `opponents` random hands.
    pub fn run_trial(&mut self, base: &Deck, hero: &HoleCards, opponents: usize) -> TrialOutcome {
        let deck = base.shuffled(&mut self.rng);
        self.score_deal(hero, deck.remaining_cards(), opponents)
    }

    /// Score a deal laid out as the board followed by two cards per opponent.
    fn score_deal(&self, hero: &HoleCards, cards: &[Card], opponents: usize) -> TrialOutcome {
        let board: [Card; BOARD_SIZE] = [cards[0], cards[1], cards[2], cards[3], cards[4]];
        let hero_rank = self.evaluator.evaluate_hole(hero, &board);

        let opponent_ranks = cards[BOARD_SIZE..]
            .chunks_exact(2)
            .take(opponents)
            .map(|hole| {
                self.evaluator.evaluate_7(&[
                    hole[0], hole[1], board[0], board[1], board[2], board[3], board[4],
                ])
            });
        TrialOutcome::classify(hero_rank, opponent_ranks)
    }
}
