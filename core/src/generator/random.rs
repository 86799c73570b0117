use rand::SeedableRng;
use rand::rngs::{StdRng, ThreadRng};

use super::*;

/// Random source backed by any `rand` generator, never fails.
#[derive(Clone, Debug)]
pub struct RngSource<R> {
    rng: R,
}

impl<R: rand::Rng> RngSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngSource<StdRng> {
    /// Reproducible source, the same seed always yields the same layout.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl RngSource<ThreadRng> {
    pub fn thread_local() -> Self {
        Self::new(rand::rng())
    }
}

impl Default for RngSource<ThreadRng> {
    fn default() -> Self {
        Self::thread_local()
    }
}

impl<R: rand::Rng> RandomSource for RngSource<R> {
    fn next(&mut self, max: usize) -> core::result::Result<usize, GenerationError> {
        if max == 0 {
            return Err(GenerationError::new("cannot draw from an empty range"));
        }
        Ok(self.rng.random_range(0..max))
    }
}

/// Replays a fixed list of values, failing once they run out.
///
/// Useful to reproduce a known layout exactly.
#[derive(Clone, Debug, Default)]
pub struct SequenceSource {
    values: Vec<usize>,
    position: usize,
}

impl SequenceSource {
    pub fn new(values: impl IntoIterator<Item = usize>) -> Self {
        Self {
            values: values.into_iter().collect(),
            position: 0,
        }
    }

    /// How many values have been handed out so far.
    pub fn consumed(&self) -> usize {
        self.position
    }

    pub fn is_exhausted(&self) -> bool {
        self.position >= self.values.len()
    }
}

impl RandomSource for SequenceSource {
    fn next(&mut self, _max: usize) -> core::result::Result<usize, GenerationError> {
        let value = self
            .values
            .get(self.position)
            .copied()
            .ok_or_else(|| GenerationError::new("sequence exhausted"))?;
        self.position += 1;
        Ok(value)
    }
}
