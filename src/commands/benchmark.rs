//! Benchmark command
//!
//! Lets each difficulty solve many targets and collects statistics.

use super::solve::solve_target;
use crate::core::Word;
use crate::game::MAX_ATTEMPTS;
use crate::solver::{Difficulty, GuessSource};
use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// Result of benchmarking one difficulty
#[derive(Debug)]
pub struct BenchmarkResult {
    pub difficulty: Difficulty,
    pub total_words: usize,
    pub solved: usize,
    pub failed: usize,
    /// Solve count keyed by number of guesses
    pub distribution: FxHashMap<usize, usize>,
    /// Mean guesses over solved targets
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    /// Targets that needed the most guesses or were missed, worst first
    pub hardest: Vec<(Word, Option<usize>)>,
    pub nodes: usize,
    pub cutoffs: usize,
    pub searches: usize,
    pub duration: Duration,
}

impl BenchmarkResult {
    #[must_use]
    pub fn success_rate(&self) -> f64 {
        if self.total_words == 0 {
            0.0
        } else {
            self.solved as f64 / self.total_words as f64
        }
    }

    #[must_use]
    pub fn words_per_second(&self) -> f64 {
        let secs = self.duration.as_secs_f64();
        if secs > 0.0 {
            self.total_words as f64 / secs
        } else {
            0.0
        }
    }
}

/// Progress bar in the shared benchmark style
///
/// # Errors
///
/// Returns an error if the progress template fails to parse.
pub fn progress_bar(len: usize, difficulty: Difficulty) -> Result<ProgressBar> {
    let bar = ProgressBar::new(len as u64);
    bar.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:>6} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")?
            .progress_chars("█▓▒░"),
    );
    bar.set_prefix(difficulty.name());
    Ok(bar)
}

/// Let one difficulty solve every target
///
/// Each target gets its own generator seeded from `seed` and its index, so a
/// run is reproducible regardless of the order targets are processed in.
pub fn run_benchmark(
    difficulty: Difficulty,
    targets: &[Word],
    vocabulary: &[Word],
    seed: u64,
    progress: &ProgressBar,
) -> BenchmarkResult {
    let start = Instant::now();
    let mut distribution: FxHashMap<usize, usize> = FxHashMap::default();
    let mut hardest = Vec::new();
    let (mut solved, mut total_guesses) = (0, 0);
    let (mut min_guesses, mut max_guesses) = (usize::MAX, 0);
    let (mut nodes, mut cutoffs, mut searches) = (0, 0, 0);

    for (idx, target) in targets.iter().enumerate() {
        let mut rng = StdRng::seed_from_u64(seed.wrapping_add(idx as u64));
        let result = solve_target(target, difficulty, MAX_ATTEMPTS, vocabulary, &mut rng);

        for step in result.guesses.iter().filter(|s| s.source == GuessSource::Search) {
            nodes += step.stats.nodes;
            cutoffs += step.stats.cutoffs;
            searches += 1;
        }

        let count = result.guesses.len();
        if result.success {
            solved += 1;
            total_guesses += count;
            min_guesses = min_guesses.min(count);
            max_guesses = max_guesses.max(count);
            *distribution.entry(count).or_insert(0) += 1;
            if count >= 5 {
                hardest.push((target.clone(), Some(count)));
            }
        } else {
            hardest.push((target.clone(), None));
        }

        if idx % 10 == 0 && solved > 0 {
            progress.set_message(format!("Avg: {:.2}", total_guesses as f64 / solved as f64));
        }
        progress.inc(1);
    }

    progress.finish_with_message("Complete!");

    // Misses first, then by descending guess count
    hardest.sort_by_key(|(_, n)| std::cmp::Reverse(n.unwrap_or(usize::MAX)));
    hardest.truncate(10);

    BenchmarkResult {
        difficulty,
        total_words: targets.len(),
        solved,
        failed: targets.len() - solved,
        distribution,
        average_guesses: if solved > 0 {
            total_guesses as f64 / solved as f64
        } else {
            0.0
        },
        min_guesses: if solved > 0 { min_guesses } else { 0 },
        max_guesses,
        hardest,
        nodes,
        cutoffs,
        searches,
        duration: start.elapsed(),
    }
}

/// Benchmark several difficulties over the first `limit` vocabulary words
///
/// # Errors
///
/// Returns an error if a progress bar cannot be built.
pub fn run_benchmarks(
    difficulties: &[Difficulty],
    vocabulary: &[Word],
    limit: Option<usize>,
    seed: u64,
) -> Result<Vec<BenchmarkResult>> {
    let targets = &vocabulary[..limit.unwrap_or(vocabulary.len()).min(vocabulary.len())];
    println!("🎯 Testing {} words...", targets.len());

    difficulties
        .iter()
        .map(|&difficulty| {
            let bar = progress_bar(targets.len(), difficulty)?;
            Ok(run_benchmark(difficulty, targets, vocabulary, seed, &bar))
        })
        .collect()
}
