//! Thread-local RNG adapter

use rand::Rng;

use crate::domain::ports::RandomSource;

/// `RandomSource` backed by `rand::thread_rng`
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn below(&self, upper: u32) -> u32 {
        rand::thread_rng().gen_range(0..upper.max(1))
    }
}
