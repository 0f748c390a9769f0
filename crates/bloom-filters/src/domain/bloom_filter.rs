//! Core Bloom filter implementation
//!
//! INVARIANTS:
//! - FPR = (1 - e^(-kn/m))^k <= target_fpr for n <= expected elements
//! - No false negatives: if added, contains() MUST return true

use tracing::debug;

use super::bit_vector::BitVector;
use super::config::FilterConfig;
use super::hash_functions::HashFamily;
use super::parameters::{
    calculate_fpr, calculate_optimal_parameters, validate_shape, BloomFilterParams,
};
use crate::error::FilterError;

/// Bloom filter for probabilistic membership testing
///
/// A Bloom filter is a space-efficient probabilistic data structure that
/// can test whether an element is a member of a set. False positives are
/// possible, but false negatives are not.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BloomFilter {
    /// Bit array storing the filter state
    bits: BitVector,
    /// Position functions over `bits`
    hashes: HashFamily,
    /// Number of add calls (n)
    n: usize,
}

impl BloomFilter {
    /// Create a Bloom filter sized for `expected_elements` at `target_fpr`
    ///
    /// # Errors
    /// [`FilterError::CapacityOverflow`] when the required bit count is not
    /// addressable, [`FilterError::InvalidFPR`] for a rate outside (0, 1).
    pub fn new(expected_elements: usize, target_fpr: f64) -> Result<Self, FilterError> {
        let params = calculate_optimal_parameters(expected_elements, target_fpr)?;
        Ok(Self::from_params(&params))
    }

    /// Create a Bloom filter from a validated configuration
    pub fn from_config(config: &FilterConfig) -> Result<Self, FilterError> {
        Ok(Self::from_params(&config.parameters()?))
    }

    /// Create a Bloom filter with an explicit shape
    ///
    /// # Arguments
    /// * `m` - Size in bits
    /// * `k` - Number of hash functions
    pub fn with_shape(m: usize, k: usize) -> Result<Self, FilterError> {
        validate_shape(m, k)?;
        Ok(Self::from_shape(m, k))
    }

    /// Build from parameters produced by the sizing functions
    pub(crate) fn from_params(params: &BloomFilterParams) -> Self {
        Self::from_shape(params.size_bits, params.hash_count)
    }

    fn from_shape(m: usize, k: usize) -> Self {
        debug!(size_bits = m, hash_count = k, "Creating bloom filter");
        Self {
            bits: BitVector::new(m),
            hashes: HashFamily::new(m, k),
            n: 0,
        }
    }

    /// Add an element to the filter
    ///
    /// After this call `contains(element)` is guaranteed to return true.
    pub fn add(&mut self, element: &[u8]) {
        let positions = self.hashes.positions(element);
        self.set_positions(positions);
    }

    /// Test if an element might be in the filter
    ///
    /// Returns:
    /// - `true` if the element might be in the set (could be false positive)
    /// - `false` if the element is definitely NOT in the set
    pub fn contains(&self, element: &[u8]) -> bool {
        self.contains_positions(self.hashes.positions(element))
    }

    /// Set precomputed positions. They must come from an equal-shaped family.
    pub(crate) fn set_positions(&mut self, positions: impl IntoIterator<Item = usize>) {
        for pos in positions {
            self.bits.set(pos);
        }
        self.n += 1;
    }

    pub(crate) fn contains_positions(&self, positions: impl IntoIterator<Item = usize>) -> bool {
        positions.into_iter().all(|pos| self.bits.get(pos))
    }

    /// Analytic false positive rate at the current insertion count
    ///
    /// Formula: FPR = (1 - e^(-kn/m))^k
    pub fn estimated_fpr(&self) -> f64 {
        calculate_fpr(self.bits.len(), self.n, self.hashes.count())
    }

    /// Get the number of bits set in the filter
    pub fn bits_set(&self) -> usize {
        self.bits.count_ones()
    }

    /// Get the filter size in bits
    pub fn size_bits(&self) -> usize {
        self.bits.len()
    }

    /// Get the number of hash functions
    pub fn hash_count(&self) -> usize {
        self.hashes.count()
    }

    /// Get the number of add calls, duplicates included
    pub fn elements_added(&self) -> usize {
        self.n
    }

    /// Clear the filter (reset all bits to 0)
    pub fn clear(&mut self) {
        self.bits.clear();
        self.n = 0;
    }
}
