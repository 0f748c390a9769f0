//! # Bloom Filter Test Suite
//!
//! Unified test crate containing:
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! ├── support.rs          # Shared fixtures and log capture
//! └── integration/
//!     ├── acceptance.rs   # Fixed scenarios for each filter variant
//!     ├── properties.rs   # proptest invariants
//!     └── false_positives.rs # Statistical false positive checks
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p bloom-tests
//!
//! # With library logs
//! RUST_LOG=bloom_filters=trace cargo test -p bloom-tests -- --nocapture
//!
//! # Benchmarks
//! cargo bench -p bloom-tests
//! ```
