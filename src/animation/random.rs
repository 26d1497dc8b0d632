// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Injectable randomness for the randomized animation styles.

use rand::{Rng, SeedableRng, rngs::StdRng};

/// Source of uniformly distributed floats in `[0, 1)`.
pub trait RandomSource
{
    /// Returns the next value in `[0, 1)`.
    fn next_f64(&mut self,) -> f64;
}

/// [`RandomSource`] backed by a standard PRNG.
#[derive(Debug, Clone,)]
pub struct StdRandom
{
    rng: StdRng,
}

impl StdRandom
{
    /// Seeds from operating system entropy; used for production renders.
    pub fn from_entropy() -> Self
    {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Deterministic generator for reproducible output.
    pub fn seeded(seed: u64,) -> Self
    {
        Self {
            rng: StdRng::seed_from_u64(seed,),
        }
    }
}

impl RandomSource for StdRandom
{
    fn next_f64(&mut self,) -> f64
    {
        self.rng.gen_range(0.0..1.0,)
    }
}

/// Replays a fixed sequence, cycling when exhausted.
///
/// Values are clamped into `[0, 1)`. An empty sequence always yields `0`.
#[derive(Debug, Clone, Default,)]
pub struct SequenceRandom
{
    values: Vec<f64,>,
    cursor: usize,
}

impl SequenceRandom
{
    pub fn new(values: Vec<f64,>,) -> Self
    {
        Self {
            values, cursor: 0,
        }
    }
}

impl RandomSource for SequenceRandom
{
    fn next_f64(&mut self,) -> f64
    {
        if self.values.is_empty() {
            return 0.0;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value.clamp(0.0, 1.0 - f64::EPSILON,)
    }
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn sequence_cycles_through_values()
    {
        let mut source = SequenceRandom::new(vec![0.1, 0.5],);
        let drawn: Vec<f64,> = (0..5).map(|_| source.next_f64(),).collect();
        assert_eq!(drawn, vec![0.1, 0.5, 0.1, 0.5, 0.1]);
    }

    #[test]
    fn sequence_clamps_out_of_range_values()
    {
        let mut source = SequenceRandom::new(vec![-3.0, 7.0],);
        assert_eq!(source.next_f64(), 0.0);
        assert!(source.next_f64() < 1.0);
    }

    #[test]
    fn empty_sequence_yields_zero()
    {
        assert_eq!(SequenceRandom::default().next_f64(), 0.0);
    }

    #[test]
    fn seeded_generators_agree()
    {
        let mut first = StdRandom::seeded(7,);
        let mut second = StdRandom::seeded(7,);
        for _ in 0..16 {
            let value = first.next_f64();
            assert!((0.0..1.0).contains(&value));
            assert_eq!(value, second.next_f64());
        }
    }
}
