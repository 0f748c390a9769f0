//! # Bloom Filters
//!
//! Probabilistic membership filters built on a shared bit-vector engine.
//!
//! ## Architecture
//!
//! - **Domain Layer** (`domain/`): Pure filter logic, no I/O
//!   - `BitVector` / `CounterVector`: packed storage
//!   - `HashFamily`: double-hashed slot positions from one MurmurHash3 pass
//!   - `calculate_optimal_parameters`: (n, p) → (m, k) with overflow guard
//!   - `BloomFilter`: add / contains
//!   - `CountingBloomFilter`: add / remove / contains
//!   - `LayeredBloomFilter`: add → depth, test → (depth, found)
//!   - `FilterConfig` / `FilterConfigBuilder`: validated sizing inputs
//!
//! - **Ports Layer** (`ports/`): Trait definitions
//!   - `MembershipFilter`: the caller-facing contract
//!
//! ## Invariants
//!
//! - **FPR**: (1 - e^(-kn/m))^k <= target_fpr for n <= expected elements
//! - **No false negatives**: if added (and, for the counting filter, not
//!   removed), contains() MUST return true
//! - **Bounded size**: m never exceeds [`MAX_SIZE_BITS`]; larger requests
//!   fail with [`FilterError::CapacityOverflow`]
//!
//! ## Usage Example
//!
//! ```
//! use bloom_filters::{BloomFilter, CountingBloomFilter, LayeredBloomFilter};
//!
//! let mut filter = BloomFilter::new(3000, 0.01)?;
//! filter.add(b"foo");
//! assert!(filter.contains(b"foo"));
//!
//! let mut counting = CountingBloomFilter::new(3000, 0.01)?;
//! counting.add(b"foo");
//! counting.remove(b"foo");
//! assert!(!counting.contains(b"foo"));
//!
//! let mut layered = LayeredBloomFilter::new(3000, 0.01)?;
//! layered.add(b"foo");
//! assert_eq!(layered.add(b"foo"), 2);
//! assert_eq!(layered.test(b"foo"), (2, true));
//! # Ok::<(), bloom_filters::FilterError>(())
//! ```

pub mod domain;
pub mod error;
pub mod ports;

// Re-exports for convenience
pub use domain::{
    calculate_optimal_parameters, BloomFilter, BloomFilterParams, CountingBloomFilter,
    FilterConfig, FilterConfigBuilder, HashFamily, LayeredBloomFilter, MAX_SIZE_BITS,
};
pub use error::FilterError;
pub use ports::MembershipFilter;
