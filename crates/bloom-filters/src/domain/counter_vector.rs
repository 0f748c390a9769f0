//! Saturating 4-bit counters for the counting filter
//!
//! Two counters are packed per byte: even slots in the high nibble, odd
//! slots in the low nibble. Increments stop at [`MAX_COUNTER`] and
//! decrements stop at zero; neither ever wraps.

/// Maximum counter value (4-bit = 15).
pub const MAX_COUNTER: u8 = 15;

/// Fixed-size array of saturating 4-bit counters
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CounterVector {
    /// 4-bit counters packed into bytes (2 counters per byte)
    counters: Vec<u8>,
    /// Size in counters (not bytes)
    len: usize,
}

impl CounterVector {
    /// Create `len` counters, all zero
    pub fn new(len: usize) -> Self {
        Self {
            counters: vec![0u8; len.div_ceil(2)],
            len,
        }
    }

    /// Get counter at position.
    pub fn get(&self, pos: usize) -> u8 {
        assert!(pos < self.len, "counter index {pos} out of range {}", self.len);
        let byte = self.counters[pos / 2];
        if pos % 2 == 0 {
            byte >> 4
        } else {
            byte & 0x0F
        }
    }

    /// Increment counter at position (saturating at MAX_COUNTER).
    pub fn increment(&mut self, pos: usize) {
        let current = self.get(pos);
        if current < MAX_COUNTER {
            self.store(pos, current + 1);
        }
    }

    /// Decrement counter at position (floored at 0).
    pub fn decrement(&mut self, pos: usize) {
        let current = self.get(pos);
        if current > 0 {
            self.store(pos, current - 1);
        }
    }

    fn store(&mut self, pos: usize, value: u8) {
        let byte = &mut self.counters[pos / 2];
        if pos % 2 == 0 {
            *byte = (*byte & 0x0F) | (value << 4);
        } else {
            *byte = (*byte & 0xF0) | value;
        }
    }

    /// Number of counters currently above zero
    pub fn count_nonzero(&self) -> usize {
        (0..self.len).filter(|&pos| self.get(pos) > 0).count()
    }

    /// Size in counters
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Get size in bytes.
    pub fn size_bytes(&self) -> usize {
        self.counters.len()
    }

    /// Clear all counters.
    pub fn clear(&mut self) {
        self.counters.fill(0);
    }
}
