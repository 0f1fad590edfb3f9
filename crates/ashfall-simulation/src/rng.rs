//! Injectable randomness for the simulation.
//!
//! Every probabilistic branch draws through [`RandomSource`] rather than
//! a process-global generator, so a session is reproducible from its
//! seed and tests can script exact sequences for each branch.

use std::collections::VecDeque;

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Source of uniform random draws.
pub trait RandomSource: std::fmt::Debug {
    /// Uniform draw in `[0.0, 1.0)`.
    fn chance(&mut self) -> f64;

    /// Uniform integer draw in `[lo, hi]` (inclusive).
    fn roll_range(&mut self, lo: u32, hi: u32) -> u32;
}

/// Production source backed by a seeded [`StdRng`].
#[derive(Debug)]
pub struct SeededSource {
    rng: StdRng,
}

impl SeededSource {
    /// Create a source producing the deterministic stream for `seed`.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededSource {
    fn chance(&mut self) -> f64 {
        self.rng.random::<f64>()
    }

    fn roll_range(&mut self, lo: u32, hi: u32) -> u32 {
        self.rng.random_range(lo..=hi)
    }
}

/// Replays queued draws, for forcing probabilistic branches in tests.
///
/// `chance` pops from the chance queue and `roll_range` from the roll
/// queue (clamped into the requested range). Exhausted queues fall back
/// to `1.0` and `lo` respectively, so "nothing random happens" once the
/// script runs out.
#[derive(Debug, Default)]
pub struct ScriptedSource {
    chances: VecDeque<f64>,
    rolls: VecDeque<u32>,
}

impl ScriptedSource {
    /// Create a source replaying the given chance and roll sequences.
    pub fn new(chances: Vec<f64>, rolls: Vec<u32>) -> Self {
        Self {
            chances: chances.into(),
            rolls: rolls.into(),
        }
    }

    /// Convenience constructor for a chance-only script.
    pub fn chances(chances: Vec<f64>) -> Self {
        Self::new(chances, Vec::new())
    }
}

impl RandomSource for ScriptedSource {
    fn chance(&mut self) -> f64 {
        self.chances.pop_front().unwrap_or(1.0)
    }

    fn roll_range(&mut self, lo: u32, hi: u32) -> u32 {
        self.rolls.pop_front().unwrap_or(lo).clamp(lo, hi)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_source_is_deterministic() {
        let mut a = SeededSource::new(99);
        let mut b = SeededSource::new(99);
        for _ in 0..20 {
            assert_eq!(a.chance().to_bits(), b.chance().to_bits());
            assert_eq!(a.roll_range(1, 6), b.roll_range(1, 6));
        }
    }

    #[test]
    fn seeded_draws_stay_in_range() {
        let mut source = SeededSource::new(7);
        for _ in 0..100 {
            let c = source.chance();
            assert!((0.0..1.0).contains(&c));
            let r = source.roll_range(2, 5);
            assert!((2..=5).contains(&r));
        }
    }

    #[test]
    fn scripted_source_replays_in_order() {
        let mut source = ScriptedSource::new(vec![0.1, 0.9], vec![3, 1]);
        assert_eq!(source.chance(), 0.1);
        assert_eq!(source.chance(), 0.9);
        assert_eq!(source.roll_range(1, 4), 3);
        assert_eq!(source.roll_range(1, 4), 1);
    }

    #[test]
    fn scripted_source_falls_back_when_exhausted() {
        let mut source = ScriptedSource::chances(vec![0.5]);
        assert_eq!(source.chance(), 0.5);
        assert_eq!(source.chance(), 1.0);
        assert_eq!(source.roll_range(2, 6), 2);
    }

    #[test]
    fn scripted_rolls_clamp_into_range() {
        let mut source = ScriptedSource::new(vec![], vec![10, 0]);
        assert_eq!(source.roll_range(1, 3), 3);
        assert_eq!(source.roll_range(1, 3), 1);
    }
}
