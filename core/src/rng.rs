//! Deterministic random number generation.
//!
//! RULE: Nothing in the engine may call any platform RNG.
//! Scoring and allocation are pure and draw nothing at all; randomness is
//! only used by the synthetic workforce generator and by the optional
//! hire roll, and it all flows through EngineRng instances derived from
//! one master seed.
//!
//! Each consumer gets its own stream, seeded from
//! (master_seed XOR slot_index × golden ratio). This means:
//!   - Adding a new slot never changes existing streams.
//!   - Each stream is fully reproducible in isolation.

use rand::{RngCore, SeedableRng};
use rand_pcg::Pcg64Mcg;

/// A named, deterministic RNG for a single consumer.
pub struct EngineRng {
    pub name: &'static str,
    inner:    Pcg64Mcg,
}

impl EngineRng {
    /// Create a stream from the master seed and a stable slot index.
    /// The index must never change once assigned.
    pub fn new(master_seed: u64, slot_index: u64) -> Self {
        let derived_seed = master_seed ^ (slot_index.wrapping_mul(0x9e37_79b9_7f4a_7c15));
        Self {
            name:  "unnamed",
            inner: Pcg64Mcg::seed_from_u64(derived_seed),
        }
    }

    pub fn with_name(mut self, name: &'static str) -> Self {
        self.name = name;
        self
    }

    /// Roll a float in [0.0, 1.0).
    pub fn next_f64(&mut self) -> f64 {
        let bits = self.inner.next_u64();
        (bits >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
    }

    pub fn next_u64(&mut self) -> u64 {
        self.inner.next_u64()
    }

    /// Roll a u64 in [0, n). Returns 0 when n is 0.
    pub fn next_u64_below(&mut self, n: u64) -> u64 {
        if n == 0 {
            return 0;
        }
        self.inner.next_u64() % n
    }

    /// Inclusive integer range. `lo > hi` collapses to `lo`.
    pub fn range_inclusive(&mut self, lo: u32, hi: u32) -> u32 {
        if hi <= lo {
            return lo;
        }
        lo + self.next_u64_below((hi - lo) as u64 + 1) as u32
    }

    /// Bernoulli trial: returns true with probability p.
    pub fn chance(&mut self, p: f64) -> bool {
        self.next_f64() < p
    }

    /// Pick one element uniformly. None on an empty slice.
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            return None;
        }
        items.get(self.next_u64_below(items.len() as u64) as usize)
    }

    /// Index drawn in proportion to the given weights. Falls back to 0
    /// when every weight is zero.
    pub fn weighted_index(&mut self, weights: &[u32]) -> usize {
        let total: u64 = weights.iter().map(|w| *w as u64).sum();
        if total == 0 {
            return 0;
        }
        let mut roll = self.next_u64_below(total);
        for (i, w) in weights.iter().enumerate() {
            let w = *w as u64;
            if roll < w {
                return i;
            }
            roll -= w;
        }
        weights.len().saturating_sub(1)
    }
}

/// All RNG streams for one master seed, indexed by stable slot.
#[derive(Debug, Clone, Copy)]
pub struct RngBank {
    master_seed: u64,
}

impl RngBank {
    pub fn new(master_seed: u64) -> Self {
        Self { master_seed }
    }

    pub fn master_seed(&self) -> u64 {
        self.master_seed
    }

    pub fn for_slot(&self, slot: RngSlot) -> EngineRng {
        EngineRng::new(self.master_seed, slot as u64).with_name(slot.name())
    }
}

/// Stable slot assignments.
/// NEVER reorder or remove entries, only append.
/// Reordering changes every stream's seed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u64)]
pub enum RngSlot {
    Roster     = 0,
    Candidates = 1,
    Hiring     = 2,
    Projects   = 3,
}

impl RngSlot {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Roster     => "roster",
            Self::Candidates => "candidates",
            Self::Hiring     => "hiring",
            Self::Projects   => "projects",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_stream() {
        let bank = RngBank::new(0xC0FFEE);
        let mut a = bank.for_slot(RngSlot::Roster);
        let mut b = bank.for_slot(RngSlot::Roster);
        for _ in 0..100 {
            assert_eq!(a.next_u64(), b.next_u64());
        }
    }

    #[test]
    fn slots_are_independent_streams() {
        let bank = RngBank::new(7);
        let mut roster = bank.for_slot(RngSlot::Roster);
        let mut hiring = bank.for_slot(RngSlot::Hiring);
        let a: Vec<u64> = (0..8).map(|_| roster.next_u64()).collect();
        let b: Vec<u64> = (0..8).map(|_| hiring.next_u64()).collect();
        assert_ne!(a, b, "distinct slots must not share a stream");
    }

    #[test]
    fn range_inclusive_stays_in_bounds() {
        let mut rng = RngBank::new(3).for_slot(RngSlot::Roster);
        for _ in 0..1_000 {
            let v = rng.range_inclusive(1, 10);
            assert!((1..=10).contains(&v), "out of range: {v}");
        }
        assert_eq!(rng.range_inclusive(5, 5), 5);
        assert_eq!(rng.range_inclusive(9, 2), 9);
    }

    #[test]
    fn weighted_index_skips_zero_weights() {
        let mut rng = RngBank::new(11).for_slot(RngSlot::Candidates);
        for _ in 0..500 {
            assert_eq!(rng.weighted_index(&[0, 3, 0]), 1);
        }
        assert_eq!(rng.weighted_index(&[0, 0]), 0);
    }

    #[test]
    fn chance_extremes() {
        let mut rng = RngBank::new(1).for_slot(RngSlot::Hiring);
        for _ in 0..200 {
            assert!(!rng.chance(0.0));
            assert!(rng.chance(1.0));
        }
    }
}
