//! Error types for Bloom filter construction
//!
//! Only construction can fail. Once a filter exists, `add`, `contains`,
//! `remove` and `test` are total over arbitrary byte slices.

use thiserror::Error;

/// Errors that can occur while sizing or constructing a filter
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FilterError {
    /// The requested capacity needs more bits than a filter may address.
    ///
    /// Raised instead of truncating the vector, which would corrupt every
    /// subsequent index computation.
    #[error("Filter capacity overflow: {required_bits} bits required > {max_bits} addressable")]
    CapacityOverflow { required_bits: u64, max_bits: usize },

    #[error("Invalid false positive rate: {fpr} (must be in the open interval (0, 1))")]
    InvalidFPR { fpr: f64 },

    #[error("Invalid filter parameters: {0}")]
    InvalidParameters(String),
}
