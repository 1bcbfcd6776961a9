//! Seeded random stream for a single run.
//!
//! Every random decision of a run (cell picks, enemy and loot rolls, direction
//! shuffles, skitter wandering) draws from one [`DeterministicRng`]. Given the
//! same seed and the same inputs, a run replays identically.

use std::time::{SystemTime, UNIX_EPOCH};

/// Linear congruential generator with 32-bit state.
///
/// Uses the classic Numerical Recipes constants:
/// `state' = (state × 1664525 + 1013904223) mod 2^32`
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DeterministicRng {
    state: u32,
}

impl DeterministicRng {
    const MULTIPLIER: u32 = 1_664_525;
    const INCREMENT: u32 = 1_013_904_223;
    const MODULUS: f64 = 4_294_967_296.0;

    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Advances the state and returns a float in `[0, 1)`.
    #[inline]
    pub fn next_f64(&mut self) -> f64 {
        self.state = self
            .state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT);
        f64::from(self.state) / Self::MODULUS
    }

    /// Uniform index in `0..len`. Returns 0 for an empty range.
    #[inline]
    pub fn index(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        let scaled = (self.next_f64() * len as f64) as usize;
        scaled.min(len - 1)
    }

    /// Returns true with probability `probability`.
    #[inline]
    pub fn chance(&mut self, probability: f64) -> bool {
        self.next_f64() < probability
    }

    /// Picks a uniform element, or `None` for an empty slice.
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            return None;
        }
        items.get(self.index(items.len()))
    }

    /// Fisher-Yates shuffle walking from the last index down.
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        for index in (1..items.len()).rev() {
            let swap_index = self.index(index + 1);
            items.swap(index, swap_index);
        }
    }
}

/// Unpredictable 32-bit seed: wall-clock millis mixed with OS entropy.
pub fn fresh_seed() -> u32 {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as u32)
        .unwrap_or_default();
    millis ^ rand::random::<u32>()
}
