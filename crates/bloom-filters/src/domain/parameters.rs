//! Optimal Bloom filter parameter calculation
//!
//! Formulas:
//! - m = ceil(-n * ln(p) / (ln 2)^2)  -- optimal bits
//! - k = round((m / n) * ln 2)        -- optimal hash functions, at least 1
//! - FPR = (1 - e^(-kn/m))^k          -- analytic false positive rate

use serde::{Deserialize, Serialize};
use std::f64::consts::LN_2;
use tracing::warn;

use crate::error::FilterError;

/// Largest addressable filter, in bits (the historical 31-bit bound).
pub const MAX_SIZE_BITS: usize = i32::MAX as usize;

/// Bloom filter parameters
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BloomFilterParams {
    /// Number of bits (or counters) in the filter (m)
    pub size_bits: usize,
    /// Number of hash functions (k)
    pub hash_count: usize,
    /// Expected number of elements the filter was sized for (n)
    pub expected_elements: usize,
    /// Expected false positive rate with these parameters
    pub expected_fpr: f64,
}

/// Calculate optimal Bloom filter parameters for given constraints
///
/// # Arguments
/// * `num_elements` - Expected number of elements to insert (n)
/// * `target_fpr` - Target false positive rate, in (0, 1)
///
/// # Errors
/// * [`FilterError::InvalidFPR`] if `target_fpr` is outside (0, 1)
/// * [`FilterError::CapacityOverflow`] if `m` would exceed [`MAX_SIZE_BITS`]
///
/// `num_elements == 0` is sized as a single element so the result is
/// still a usable filter.
pub fn calculate_optimal_parameters(
    num_elements: usize,
    target_fpr: f64,
) -> Result<BloomFilterParams, FilterError> {
    calculate_parameters_with_limit(num_elements, target_fpr, MAX_SIZE_BITS)
}

/// Same as [`calculate_optimal_parameters`] with a caller-supplied bit
/// limit. The limit can only tighten [`MAX_SIZE_BITS`].
pub fn calculate_parameters_with_limit(
    num_elements: usize,
    target_fpr: f64,
    max_size_bits: usize,
) -> Result<BloomFilterParams, FilterError> {
    // Negated form also rejects NaN
    if !(target_fpr > 0.0 && target_fpr < 1.0) {
        return Err(FilterError::InvalidFPR { fpr: target_fpr });
    }
    let max_bits = max_size_bits.min(MAX_SIZE_BITS);

    let n = num_elements.max(1) as f64;
    let ln2_squared = LN_2 * LN_2;

    // Checked in floating point: the cast to usize saturates silently
    let required = (-n * target_fpr.ln() / ln2_squared).ceil();
    if !required.is_finite() || required > max_bits as f64 {
        warn!(
            expected_elements = num_elements,
            target_fpr,
            required_bits = required,
            max_bits,
            "Rejecting bloom filter sizing request"
        );
        return Err(FilterError::CapacityOverflow {
            required_bits: required as u64,
            max_bits,
        });
    }

    let m = (required as usize).max(1);
    let k = (((m as f64 / n) * LN_2).round() as usize).max(1);

    Ok(BloomFilterParams {
        size_bits: m,
        hash_count: k,
        expected_elements: num_elements,
        expected_fpr: calculate_fpr(m, num_elements, k),
    })
}

/// Calculate the false positive rate for given parameters
///
/// Formula: FPR = (1 - e^(-kn/m))^k
pub fn calculate_fpr(m: usize, n: usize, k: usize) -> f64 {
    if m == 0 {
        return 1.0;
    }
    let exponent = -(k as f64) * (n as f64) / (m as f64);
    (1.0 - exponent.exp()).powi(k as i32)
}

/// Validate a manually chosen shape against the same bounds sizing enforces
pub fn validate_shape(m: usize, k: usize) -> Result<(), FilterError> {
    if m == 0 {
        return Err(FilterError::InvalidParameters(
            "size_bits cannot be 0".to_string(),
        ));
    }
    if m > MAX_SIZE_BITS {
        return Err(FilterError::CapacityOverflow {
            required_bits: m as u64,
            max_bits: MAX_SIZE_BITS,
        });
    }
    if k == 0 {
        return Err(FilterError::InvalidParameters(
            "hash_count cannot be 0".to_string(),
        ));
    }
    Ok(())
}
