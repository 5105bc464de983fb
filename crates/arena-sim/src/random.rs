//! Injectable randomness.
//!
//! Every probability-driven rule (spawn placement, elite and loot rolls) draws
//! from one `RandomSource` owned by the engine, so a seed or a scripted
//! sequence fully determines the outcome.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Source of uniform randoms in `[0, 1)`.
pub trait RandomSource {
    /// Next uniform sample in `[0, 1)`.
    fn next_f64(&mut self) -> f64;

    /// Bernoulli trial: true with probability `p`.
    fn chance(&mut self, p: f64) -> bool {
        self.next_f64() < p
    }

    /// Uniform sample in `[low, high)`.
    fn range(&mut self, low: f64, high: f64) -> f64 {
        low + self.next_f64() * (high - low)
    }

    /// Uniform index into a collection of `len` elements. `len` must be non-zero.
    fn index(&mut self, len: usize) -> usize {
        ((self.next_f64() * len as f64) as usize).min(len.saturating_sub(1))
    }
}

/// Seedable ChaCha8 generator. Same seed, same sequence.
pub struct SeededRandom {
    rng: ChaCha8Rng,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededRandom {
    fn next_f64(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }
}

/// Replays a fixed list of samples, wrapping around at the end.
///
/// Used to force specific spawn, elite and loot outcomes.
#[derive(Debug, Clone)]
pub struct ScriptedRandom {
    samples: Vec<f64>,
    cursor: usize,
}

impl ScriptedRandom {
    /// Samples are clamped into `[0, 1)`; an empty script always yields 0.
    pub fn new(samples: impl IntoIterator<Item = f64>) -> Self {
        let samples = samples
            .into_iter()
            .map(|s| s.clamp(0.0, 1.0 - f64::EPSILON))
            .collect();
        Self { samples, cursor: 0 }
    }
}

impl RandomSource for ScriptedRandom {
    fn next_f64(&mut self) -> f64 {
        if self.samples.is_empty() {
            return 0.0;
        }
        let sample = self.samples[self.cursor % self.samples.len()];
        self.cursor += 1;
        sample
    }
}
