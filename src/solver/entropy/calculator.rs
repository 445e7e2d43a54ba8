//! Shannon entropy calculation over feedback partitions
//!
//! Given a guess and a candidate pool, computes the expected information gain.

use crate::core::{Pattern, Word};
use rustc_hash::FxHashMap;

/// Comprehensive metrics for evaluating a guess
#[derive(Debug, Clone, Copy)]
pub struct GuessMetrics {
    /// Shannon entropy (expected information gain in bits)
    pub entropy: f64,
    /// Expected number of remaining candidates after this guess
    pub expected_remaining: f64,
    /// Maximum partition size (worst-case remaining candidates)
    pub max_partition: usize,
}

/// Pool members grouped by the feedback the guess would produce against them
///
/// Buckets are listed in the order their pattern was first seen while scanning
/// the pool, so iteration is reproducible for a given pool order.
#[derive(Debug, Clone)]
pub struct Partition<'a> {
    buckets: Vec<(Pattern, Vec<&'a Word>)>,
    total: usize,
}

impl<'a> Partition<'a> {
    /// Partition `pool` by the pattern `guess` would produce against each member
    ///
    /// # Examples
    /// ```
    /// use wordle_duel::core::Word;
    /// use wordle_duel::solver::entropy::Partition;
    ///
    /// let pool: Vec<Word> = ["SOLAR", "POLAR", "CORAL"]
    ///     .iter()
    ///     .map(|w| Word::new(*w).unwrap())
    ///     .collect();
    ///
    /// let partition = Partition::new(&pool[0], &pool);
    /// assert_eq!(partition.total(), 3);
    /// assert_eq!(partition.len(), 3);
    /// ```
    #[must_use]
    pub fn new(guess: &Word, pool: &'a [Word]) -> Self {
        Self::from_refs(guess, pool.iter())
    }

    /// Partition an iterator of borrowed words
    pub fn from_refs<I>(guess: &Word, pool: I) -> Self
    where
        I: IntoIterator<Item = &'a Word>,
    {
        let mut index: FxHashMap<Pattern, usize> = FxHashMap::default();
        let mut buckets: Vec<(Pattern, Vec<&'a Word>)> = Vec::new();
        let mut total = 0;

        for candidate in pool {
            let pattern = Pattern::calculate(guess, candidate);
            let slot = *index.entry(pattern).or_insert_with(|| {
                buckets.push((pattern, Vec::new()));
                buckets.len() - 1
            });
            buckets[slot].1.push(candidate);
            total += 1;
        }

        Self { buckets, total }
    }

    /// Buckets in first-seen order
    #[must_use]
    pub fn buckets(&self) -> &[(Pattern, Vec<&'a Word>)] {
        &self.buckets
    }

    /// Number of pool members that were partitioned
    #[must_use]
    pub const fn total(&self) -> usize {
        self.total
    }

    /// Number of distinct feedback patterns
    #[must_use]
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Bucket sizes keyed by pattern
    #[must_use]
    pub fn counts(&self) -> FxHashMap<Pattern, usize> {
        self.buckets
            .iter()
            .map(|(pattern, words)| (*pattern, words.len()))
            .collect()
    }

    /// Shannon entropy of the bucket-size distribution
    #[must_use]
    pub fn entropy(&self) -> f64 {
        shannon_entropy(&self.counts())
    }
}

/// Calculate Shannon entropy for a guess against a pool
///
/// Returns the expected information gain in bits.
///
/// # Formula
/// H(X) = -Σ p(x) * log₂(p(x))
///
/// where p(x) is the probability of observing pattern x.
///
/// # Examples
/// ```
/// use wordle_duel::core::Word;
/// use wordle_duel::solver::entropy::calculate_entropy;
///
/// let guess = Word::new("SOLAR").unwrap();
/// let pool = vec![Word::new("SOLAR").unwrap(), Word::new("GREEN").unwrap()];
///
/// let entropy = calculate_entropy(&guess, &pool);
/// assert!((entropy - 1.0).abs() < 1e-9); // two equally likely patterns
/// ```
#[must_use]
pub fn calculate_entropy(guess: &Word, pool: &[Word]) -> f64 {
    if pool.is_empty() {
        return 0.0;
    }

    Partition::new(guess, pool).entropy()
}

/// Calculate Shannon entropy from pattern distribution
///
/// H = -Σ p * log₂(p)
///
/// # Properties
/// - Returns 0.0 for certain outcome (one pattern with p=1)
/// - Maximized for uniform distribution
/// - Always in range [0, log₂(n)] for n patterns
///
/// # Examples
/// ```
/// use wordle_duel::solver::entropy::shannon_entropy;
/// use rustc_hash::FxHashMap;
/// use wordle_duel::core::Pattern;
///
/// let mut uniform = FxHashMap::default();
/// uniform.insert(Pattern::new(0), 25);
/// uniform.insert(Pattern::new(1), 25);
/// uniform.insert(Pattern::new(2), 25);
/// uniform.insert(Pattern::new(3), 25);
///
/// let entropy = shannon_entropy(&uniform);
/// assert!((entropy - 2.0).abs() < 0.001); // log2(4) = 2 bits
/// ```
#[must_use]
pub fn shannon_entropy<S>(pattern_counts: &std::collections::HashMap<Pattern, usize, S>) -> f64
where
    S: std::hash::BuildHasher,
{
    let total = pattern_counts.values().sum::<usize>() as f64;

    if total == 0.0 {
        return 0.0;
    }

    pattern_counts
        .values()
        .filter(|&&count| count > 0)
        .map(|&count| {
            let p = count as f64 / total;
            -p * p.log2()
        })
        .sum()
}

/// Calculate comprehensive metrics for a guess
///
/// Returns entropy, expected remaining candidates, and max partition size.
#[must_use]
pub fn calculate_metrics(guess: &Word, pool: &[Word]) -> GuessMetrics {
    if pool.is_empty() {
        return GuessMetrics {
            entropy: 0.0,
            expected_remaining: 0.0,
            max_partition: 0,
        };
    }

    let partition = Partition::new(guess, pool);
    let total = partition.total() as f64;

    let expected_remaining: f64 = partition
        .buckets()
        .iter()
        .map(|(_, group)| {
            let p = group.len() as f64 / total;
            p * group.len() as f64
        })
        .sum();

    let max_partition = partition
        .buckets()
        .iter()
        .map(|(_, group)| group.len())
        .max()
        .unwrap_or(0);

    GuessMetrics {
        entropy: partition.entropy(),
        expected_remaining,
        max_partition,
    }
}
