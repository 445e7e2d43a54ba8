//! Entropy-based guess scoring
//!
//! Partitions a pool by simulated feedback, measures the Shannon entropy of that
//! partition and folds it into the opponent's scoring function.

mod calculator;
mod score;
mod selector;

pub use calculator::{GuessMetrics, Partition, calculate_entropy, calculate_metrics, shannon_entropy};
pub use score::{
    MEMBERSHIP_BONUS, ScoreBreakdown, ScoreWeights, score, score_breakdown, score_breakdown_with,
};
pub use selector::{SCORE_EPSILON, rank_by_score, tied_best};
