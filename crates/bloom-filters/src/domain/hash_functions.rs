//! Hash family for Bloom filter slot selection
//!
//! One MurmurHash3 x64/128 pass per element yields two 64-bit base hashes.
//! The `k` slot positions are derived from them by double hashing:
//! `pos_i = (h1 + i * h2) mod m` (Kirsch-Mitzenmacher).

use std::io::Cursor;

/// Seed for the single MurmurHash3 pass. Fixed so that positions are
/// identical across processes.
const HASH_SEED: u32 = 0;

/// Hash an element with MurmurHash3 and split the 128-bit digest into
/// the two base hashes used for double hashing.
pub fn murmur_hash_pair(element: &[u8]) -> (u64, u64) {
    let mut cursor = Cursor::new(element);

    // Reading from an in-memory cursor cannot fail
    let hash = murmur3::murmur3_x64_128(&mut cursor, HASH_SEED).unwrap_or(0);
    let h1 = hash as u64;
    // Odd step so consecutive probes never collapse onto h1 when m is even
    let h2 = ((hash >> 64) as u64) | 1;
    (h1, h2)
}

/// The `k` position functions of a filter with `m` slots
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HashFamily {
    /// Number of slots (m)
    size: usize,
    /// Number of positions per element (k)
    count: usize,
}

impl HashFamily {
    /// Create a family for `size` slots and `count` positions per element.
    ///
    /// # Panics
    /// Panics if `size` or `count` is zero; constructors validate both
    /// before building a family.
    pub fn new(size: usize, count: usize) -> Self {
        assert!(size > 0, "hash family needs at least one slot");
        assert!(count > 0, "hash family needs at least one hash function");
        Self { size, count }
    }

    /// Positions of `element`, in probe order
    pub fn positions(&self, element: &[u8]) -> HashPositions {
        let (h1, h2) = murmur_hash_pair(element);
        HashPositions {
            h1,
            h2,
            size: self.size as u64,
            next: 0,
            count: self.count as u64,
        }
    }

    /// Number of slots (m)
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of positions per element (k)
    pub fn count(&self) -> usize {
        self.count
    }
}

/// Iterator over the `k` positions of one element
#[derive(Clone, Debug)]
pub struct HashPositions {
    h1: u64,
    h2: u64,
    size: u64,
    next: u64,
    count: u64,
}

impl Iterator for HashPositions {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.next == self.count {
            return None;
        }
        let hash = self.h1.wrapping_add(self.next.wrapping_mul(self.h2));
        self.next += 1;
        Some((hash % self.size) as usize)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.count - self.next) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for HashPositions {}

/// Compute k hash positions in `[0, m)` for an element
pub fn compute_hash_positions(element: &[u8], m: usize, k: usize) -> Vec<usize> {
    HashFamily::new(m, k).positions(element).collect()
}
