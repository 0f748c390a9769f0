//! Filter configuration and validation
//!
//! # Example
//!
//! ```
//! use bloom_filters::domain::FilterConfigBuilder;
//!
//! let config = FilterConfigBuilder::new()
//!     .expected_elements(10_000)
//!     .target_fpr(0.001)
//!     .build()
//!     .expect("Valid config");
//! assert_eq!(config.expected_elements, 10_000);
//! ```

use serde::{Deserialize, Serialize};

use super::parameters::{calculate_parameters_with_limit, BloomFilterParams, MAX_SIZE_BITS};
use crate::error::FilterError;

/// Sizing inputs shared by every filter variant
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    /// Expected number of distinct elements (n)
    pub expected_elements: usize,
    /// Target false positive rate, in (0, 1)
    pub target_fpr: f64,
    /// Maximum filter size in bits; capped at [`MAX_SIZE_BITS`]
    pub max_size_bits: usize,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            expected_elements: 1000,
            target_fpr: 0.01,
            max_size_bits: MAX_SIZE_BITS,
        }
    }
}

impl FilterConfig {
    /// Create a new configuration with validation
    pub fn new(expected_elements: usize, target_fpr: f64) -> Result<Self, FilterError> {
        let config = Self {
            expected_elements,
            target_fpr,
            ..Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration without sizing it
    pub fn validate(&self) -> Result<(), FilterError> {
        if !(self.target_fpr > 0.0 && self.target_fpr < 1.0) {
            return Err(FilterError::InvalidFPR {
                fpr: self.target_fpr,
            });
        }

        if self.max_size_bits == 0 {
            return Err(FilterError::InvalidParameters(
                "max_size_bits cannot be 0".to_string(),
            ));
        }

        Ok(())
    }

    /// Resolve the configuration into filter parameters
    ///
    /// Fails with [`FilterError::CapacityOverflow`] when the sized filter
    /// would exceed `max_size_bits`.
    pub fn parameters(&self) -> Result<BloomFilterParams, FilterError> {
        self.validate()?;
        calculate_parameters_with_limit(self.expected_elements, self.target_fpr, self.max_size_bits)
    }

    /// Builder-style method to set target FPR
    pub fn with_target_fpr(mut self, fpr: f64) -> Self {
        self.target_fpr = fpr;
        self
    }

    /// Builder-style method to set expected elements
    pub fn with_expected_elements(mut self, n: usize) -> Self {
        self.expected_elements = n;
        self
    }
}

/// Builder for FilterConfig with validation
#[derive(Default)]
pub struct FilterConfigBuilder {
    expected_elements: Option<usize>,
    target_fpr: Option<f64>,
    max_size_bits: Option<usize>,
}

impl FilterConfigBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set expected number of elements
    pub fn expected_elements(mut self, n: usize) -> Self {
        self.expected_elements = Some(n);
        self
    }

    /// Set target false positive rate
    pub fn target_fpr(mut self, fpr: f64) -> Self {
        self.target_fpr = Some(fpr);
        self
    }

    /// Set maximum filter size in bits
    pub fn max_size_bits(mut self, bits: usize) -> Self {
        self.max_size_bits = Some(bits);
        self
    }

    /// Build the configuration, validating all parameters
    pub fn build(self) -> Result<FilterConfig, FilterError> {
        let defaults = FilterConfig::default();
        let config = FilterConfig {
            expected_elements: self.expected_elements.unwrap_or(defaults.expected_elements),
            target_fpr: self.target_fpr.unwrap_or(defaults.target_fpr),
            max_size_bits: self.max_size_bits.unwrap_or(defaults.max_size_bits),
        };
        config.validate()?;
        Ok(config)
    }
}
