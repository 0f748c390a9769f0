//! # Counting Bloom Filter
//!
//! Replaces bits with saturating counters so elements can be removed:
//! - Add: Increment counters at hashed positions
//! - Remove: Decrement counters at hashed positions
//! - Membership: True if all counters > 0
//!
//! Removing an element that was never added decrements slots shared with
//! other elements and can make them read as absent. Counters that hit
//! [`MAX_COUNTER`](super::counter_vector::MAX_COUNTER) stay there until
//! decremented, so heavy duplication degrades removal accuracy.

use tracing::debug;

use super::config::FilterConfig;
use super::counter_vector::CounterVector;
use super::hash_functions::HashFamily;
use super::parameters::{calculate_optimal_parameters, validate_shape, BloomFilterParams};
use crate::error::FilterError;

/// Counting Bloom Filter with 4-bit counters.
///
/// Supports both add AND remove operations, unlike standard Bloom filters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CountingBloomFilter {
    counters: CounterVector,
    hashes: HashFamily,
    /// Net number of add calls not yet removed
    n: usize,
}

impl CountingBloomFilter {
    /// Create a counting filter sized for `expected_elements` at `target_fpr`
    pub fn new(expected_elements: usize, target_fpr: f64) -> Result<Self, FilterError> {
        let params = calculate_optimal_parameters(expected_elements, target_fpr)?;
        Ok(Self::from_params(&params))
    }

    /// Create a counting filter from a validated configuration
    pub fn from_config(config: &FilterConfig) -> Result<Self, FilterError> {
        Ok(Self::from_params(&config.parameters()?))
    }

    /// Create a counting filter with `m` counters and `k` hash functions
    pub fn with_shape(m: usize, k: usize) -> Result<Self, FilterError> {
        validate_shape(m, k)?;
        Ok(Self::from_shape(m, k))
    }

    fn from_params(params: &BloomFilterParams) -> Self {
        Self::from_shape(params.size_bits, params.hash_count)
    }

    fn from_shape(m: usize, k: usize) -> Self {
        debug!(size_counters = m, hash_count = k, "Creating counting bloom filter");
        Self {
            counters: CounterVector::new(m),
            hashes: HashFamily::new(m, k),
            n: 0,
        }
    }

    /// Add an element (increment counters).
    pub fn add(&mut self, element: &[u8]) {
        for pos in self.hashes.positions(element) {
            self.counters.increment(pos);
        }
        self.n += 1;
    }

    /// Remove an element (decrement counters, floored at zero).
    pub fn remove(&mut self, element: &[u8]) {
        for pos in self.hashes.positions(element) {
            self.counters.decrement(pos);
        }
        self.n = self.n.saturating_sub(1);
    }

    /// Check if element might be in the filter.
    pub fn contains(&self, element: &[u8]) -> bool {
        self.hashes
            .positions(element)
            .all(|pos| self.counters.get(pos) > 0)
    }

    /// Upper bound on how many times `element` is currently present
    ///
    /// The minimum counter across the element's slots. Never below the
    /// true multiplicity unless removals were misused, and capped at
    /// [`MAX_COUNTER`](super::counter_vector::MAX_COUNTER).
    pub fn estimate_count(&self, element: &[u8]) -> u8 {
        self.hashes
            .positions(element)
            .map(|pos| self.counters.get(pos))
            .min()
            .unwrap_or(0)
    }

    /// Number of counters above zero
    pub fn counters_set(&self) -> usize {
        self.counters.count_nonzero()
    }

    /// Get size in counters.
    pub fn size_counters(&self) -> usize {
        self.counters.len()
    }

    /// Get size in bytes.
    pub fn size_bytes(&self) -> usize {
        self.counters.size_bytes()
    }

    /// Get number of hash functions.
    pub fn hash_count(&self) -> usize {
        self.hashes.count()
    }

    /// Net number of elements (adds minus removes).
    pub fn elements_count(&self) -> usize {
        self.n
    }

    /// Clear all counters.
    pub fn clear(&mut self) {
        self.counters.clear();
        self.n = 0;
    }
}
