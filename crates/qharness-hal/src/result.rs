//! Measurement outcomes and execution results.

use std::fmt;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// One classical outcome: a bool per classical bit, indexed by clbit id.
///
/// The textual form puts the highest clbit leftmost, so clbit 0 is the
/// rightmost character. A two-bit register with only clbit 0 set reads
/// `"01"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Bitstring {
    bits: Vec<bool>,
}

impl Bitstring {
    /// All-zero bitstring of `len` bits.
    pub fn zeros(len: usize) -> Self {
        Self {
            bits: vec![false; len],
        }
    }

    /// Build from bits indexed by clbit id.
    pub fn from_bits(bits: Vec<bool>) -> Self {
        Self { bits }
    }

    /// Number of classical bits.
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// Check if the bitstring has no bits.
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Value of clbit `index`, or `None` if out of range.
    pub fn get(&self, index: usize) -> Option<bool> {
        self.bits.get(index).copied()
    }

    /// Set clbit `index`. Out-of-range indices are ignored.
    pub fn set(&mut self, index: usize, value: bool) {
        if let Some(bit) = self.bits.get_mut(index) {
            *bit = value;
        }
    }

    /// Bits indexed by clbit id.
    pub fn bits(&self) -> &[bool] {
        &self.bits
    }
}

impl fmt::Display for Bitstring {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &bit in self.bits.iter().rev() {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

/// Measurement counts keyed by bitstring.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Counts {
    counts: FxHashMap<String, u64>,
}

impl Counts {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `count` occurrences of `bitstring`.
    pub fn insert(&mut self, bitstring: impl Into<String>, count: u64) {
        *self.counts.entry(bitstring.into()).or_insert(0) += count;
    }

    /// Record one occurrence of a sampled outcome.
    pub fn record(&mut self, outcome: &Bitstring) {
        self.insert(outcome.to_string(), 1);
    }

    /// Count for `bitstring`, zero when never observed.
    pub fn get(&self, bitstring: &str) -> u64 {
        self.counts.get(bitstring).copied().unwrap_or(0)
    }

    /// Sum of all counts.
    pub fn total_shots(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Number of distinct outcomes.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Check if nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Iterate over `(bitstring, count)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(k, &v)| (k.as_str(), v))
    }

    /// Pairs sorted by bitstring.
    pub fn sorted(&self) -> Vec<(&str, u64)> {
        let mut pairs: Vec<_> = self.iter().collect();
        pairs.sort_unstable_by(|a, b| a.0.cmp(b.0));
        pairs
    }

    /// The outcome with the highest count. Ties go to the smaller bitstring.
    pub fn most_frequent(&self) -> Option<(&str, u64)> {
        self.iter()
            .max_by(|a, b| a.1.cmp(&b.1).then_with(|| b.0.cmp(a.0)))
    }

    /// Observed frequency of each outcome, sorted by bitstring.
    pub fn probabilities(&self) -> Vec<(&str, f64)> {
        let total = self.total_shots();
        if total == 0 {
            return vec![];
        }
        self.sorted()
            .into_iter()
            .map(|(k, v)| (k, v as f64 / total as f64))
            .collect()
    }
}

impl fmt::Display for Counts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (bitstring, count)) in self.sorted().into_iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "\"{bitstring}\": {count}")?;
        }
        f.write_str("}")
    }
}

impl<S: Into<String>> FromIterator<(S, u64)> for Counts {
    fn from_iter<I: IntoIterator<Item = (S, u64)>>(iter: I) -> Self {
        let mut counts = Counts::new();
        for (bitstring, count) in iter {
            counts.insert(bitstring, count);
        }
        counts
    }
}

/// Result of running a circuit for a number of shots.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecutionResult {
    /// Measurement counts.
    pub counts: Counts,
    /// Number of shots executed.
    pub shots: u32,
    /// Wall-clock execution time in milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub execution_time_ms: Option<u64>,
}

impl ExecutionResult {
    /// Create a new result.
    pub fn new(counts: Counts, shots: u32) -> Self {
        Self {
            counts,
            shots,
            execution_time_ms: None,
        }
    }

    /// Attach the execution time.
    #[must_use]
    pub fn with_execution_time(mut self, ms: u64) -> Self {
        self.execution_time_ms = Some(ms);
        self
    }

    /// Observed probability of `bitstring`.
    pub fn probability(&self, bitstring: &str) -> f64 {
        if self.shots == 0 {
            return 0.0;
        }
        self.counts.get(bitstring) as f64 / f64::from(self.shots)
    }
}
