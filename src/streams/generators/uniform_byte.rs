use std::io::Error;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::streams::stream::ByteStream;

/// Generator of independent uniform values in `[0, 255]`.
///
/// Deterministic for a given seed: two generators built with the same seed
/// (or one generator before and after [`restart`]) produce identical
/// sequences.
///
/// [`restart`]: ByteStream::restart
#[derive(Debug)]
pub struct UniformByteGenerator {
    seed: u64,
    rng: StdRng,
    max_values: Option<usize>,
    produced: usize,
}

impl UniformByteGenerator {
    /// Unbounded generator seeded with `seed`.
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
            max_values: None,
            produced: 0,
        }
    }

    /// Generator that exhausts after `max_values` values.
    pub fn with_limit(max_values: usize, seed: u64) -> Self {
        Self {
            max_values: Some(max_values),
            ..Self::new(seed)
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl ByteStream for UniformByteGenerator {
    fn has_more_values(&self) -> bool {
        self.max_values.map_or(true, |max| self.produced < max)
    }

    fn next_value(&mut self) -> Option<u8> {
        if !self.has_more_values() {
            return None;
        }
        self.produced += 1;
        Some(self.rng.random_range(0..=u8::MAX))
    }

    fn restart(&mut self) -> Result<(), Error> {
        self.rng = StdRng::seed_from_u64(self.seed);
        self.produced = 0;
        Ok(())
    }
}
