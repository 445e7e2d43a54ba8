//! Command implementations

pub mod analyze;
pub mod benchmark;
pub mod duel;
pub mod solve;

pub use analyze::{AnalysisResult, DifficultyValue, analyze_word};
pub use benchmark::{BenchmarkResult, run_benchmark, run_benchmarks};
pub use duel::{DuelCommand, DuelConfig, run_duel};
pub use solve::{GuessStep, SolveConfig, SolveResult, solve_target, solve_word};
