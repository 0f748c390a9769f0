//! Domain Layer - Pure filter logic
//!
//! This layer contains:
//! - Bit and counter storage
//! - Hash functions
//! - Parameter calculations
//! - Configuration
//! - Standard, counting and layered Bloom filters
//!
//! RULES:
//! - No I/O operations
//! - No async code
//! - No internal locking; callers serialize access to a filter

pub mod bit_vector;
pub mod bloom_filter;
pub mod config;
pub mod counter_vector;
pub mod counting_bloom;
pub mod hash_functions;
pub mod layered_bloom;
pub mod parameters;

pub use bit_vector::BitVector;
pub use bloom_filter::BloomFilter;
pub use config::{FilterConfig, FilterConfigBuilder};
pub use counter_vector::{CounterVector, MAX_COUNTER};
pub use counting_bloom::CountingBloomFilter;
pub use hash_functions::{compute_hash_positions, HashFamily, HashPositions};
pub use layered_bloom::LayeredBloomFilter;
pub use parameters::{
    calculate_fpr, calculate_optimal_parameters, calculate_parameters_with_limit,
    BloomFilterParams, MAX_SIZE_BITS,
};
