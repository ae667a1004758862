//! Random bar heights.

use std::ops::RangeInclusive;
use std::time::{SystemTime, UNIX_EPOCH};

/// Xorshift64 generator. Not cryptographic; reproducible from a seed.
#[derive(Debug, Clone)]
pub struct ValueGenerator {
    state: u64,
    range: RangeInclusive<u32>,
}

impl ValueGenerator {
    /// Generator over `range` starting from `seed`.
    pub fn new(seed: u64, range: RangeInclusive<u32>) -> Self {
        // Zero is a fixed point of xorshift.
        let state = if seed == 0 { 0x9E37_79B9_7F4A_7C15 } else { seed };
        Self { state, range }
    }

    /// Seed from the system clock.
    pub fn from_clock(range: RangeInclusive<u32>) -> Self {
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(1);
        Self::new(seed, range)
    }

    /// Next value in the configured range.
    pub fn next_value(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;

        let lo = u64::from(*self.range.start());
        let span = u64::from(*self.range.end()) - lo + 1;
        (lo + x % span) as u32
    }

    /// `len` fresh values.
    pub fn values(&mut self, len: usize) -> Vec<u32> {
        (0..len).map(|_| self.next_value()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stays_in_range() {
        let mut generator = ValueGenerator::new(42, 1..=100);
        for v in generator.values(1000) {
            assert!((1..=100).contains(&v));
        }
    }

    #[test]
    fn same_seed_same_values() {
        let a = ValueGenerator::new(7, 1..=100).values(20);
        let b = ValueGenerator::new(7, 1..=100).values(20);
        assert_eq!(a, b);
        assert_ne!(a, ValueGenerator::new(8, 1..=100).values(20));
    }

    #[test]
    fn zero_seed_still_varies() {
        let values = ValueGenerator::new(0, 1..=100).values(10);
        assert!(values.windows(2).any(|w| w[0] != w[1]));
    }
}
