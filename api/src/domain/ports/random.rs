//! Random source port
//!
//! Synthetic fallbacks draw from this so tests can substitute a fixed sequence.

pub trait RandomSource: Send + Sync {
    /// Uniform integer in `0..upper`. `upper` is always at least 1.
    fn below(&self, upper: u32) -> u32;
}
