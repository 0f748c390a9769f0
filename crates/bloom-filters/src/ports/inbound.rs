//! Inbound Ports (Driving Ports)
//!
//! The operations external collaborators (CLIs, benchmarks, services)
//! use to drive a filter without knowing which variant backs it.

use crate::domain::{BloomFilter, CountingBloomFilter, LayeredBloomFilter};

/// Probabilistic set membership over opaque byte keys
///
/// Callers canonicalize their domain objects into bytes before calling.
/// Implementations are not synchronized; wrap them in a lock to share.
pub trait MembershipFilter {
    /// Record an element
    fn add(&mut self, element: &[u8]);

    /// `false` means definitely absent, `true` means possibly present
    fn contains(&self, element: &[u8]) -> bool;
}

impl MembershipFilter for BloomFilter {
    fn add(&mut self, element: &[u8]) {
        BloomFilter::add(self, element);
    }

    fn contains(&self, element: &[u8]) -> bool {
        BloomFilter::contains(self, element)
    }
}

impl MembershipFilter for CountingBloomFilter {
    fn add(&mut self, element: &[u8]) {
        CountingBloomFilter::add(self, element);
    }

    fn contains(&self, element: &[u8]) -> bool {
        CountingBloomFilter::contains(self, element)
    }
}

/// Membership is presence in the first layer; the depth is discarded.
impl MembershipFilter for LayeredBloomFilter {
    fn add(&mut self, element: &[u8]) {
        LayeredBloomFilter::add(self, element);
    }

    fn contains(&self, element: &[u8]) -> bool {
        LayeredBloomFilter::contains(self, element)
    }
}
