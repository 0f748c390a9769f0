//! Packed bit storage shared by the standard and layered filters
//!
//! Indices are reduced modulo `len()` by the hash family before they reach
//! the vector. An out-of-range index is a caller bug and panics.

use bitvec::prelude::*;

/// Fixed-size array of bits packed into `u64` words
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BitVector {
    bits: BitVec<u64, Lsb0>,
}

impl BitVector {
    /// Create a vector of `len` cleared bits
    pub fn new(len: usize) -> Self {
        Self {
            bits: bitvec![u64, Lsb0; 0; len],
        }
    }

    /// Set the bit at `index`
    pub fn set(&mut self, index: usize) {
        self.bits.set(index, true);
    }

    /// Read the bit at `index`
    pub fn get(&self, index: usize) -> bool {
        self.bits[index]
    }

    /// Number of set bits
    pub fn count_ones(&self) -> usize {
        self.bits.count_ones()
    }

    /// Size in bits
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Reset every bit to 0
    pub fn clear(&mut self) {
        self.bits.fill(false);
    }
}
