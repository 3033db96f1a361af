//! Hand evaluation.
//!
//! - `hand_rank`: `HandCategory` and the totally ordered `HandRank`
//! - `evaluator`: 5-card ranking and best-of-subsets search for 6-7 cards

pub mod evaluator;
pub mod hand_rank;

pub use evaluator::HandEvaluator;
pub use hand_rank::{HandCategory, HandRank};
