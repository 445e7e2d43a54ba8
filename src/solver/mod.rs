//! Opponent guess selection
//!
//! Scoring, the greedy and minimax strategies, and the engine that picks
//! between them by difficulty.

mod difficulty;
mod engine;
pub mod entropy;
pub mod greedy;
pub mod minimax;
pub mod strategy;

pub use difficulty::{Difficulty, ParseDifficultyError};
pub use engine::{Decision, GuessSource, RANDOM_POOL_LIMIT, STRATEGIC_OPENERS, SearchEngine};
pub use greedy::GreedyStrategy;
pub use minimax::{AlphaBetaStrategy, CANDIDATE_CAP, MinimaxStrategy, SearchStats};
pub use strategy::{Strategy, StrategyType};
