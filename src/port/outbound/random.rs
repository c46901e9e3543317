//! Random number port.
//!
//! Reports are synthesized from random draws rather than scan history. The
//! draws go through this trait so tests can script them and operators can
//! pin a seed.

/// Source of uniformly distributed integers.
pub trait RandomSource {
    /// Draw an integer uniformly from the half-open range `[low, high)`.
    ///
    /// Callers guarantee `low < high`.
    fn next_in_range(&mut self, low: u32, high: u32) -> u32;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_in_range(&mut self, low: u32, high: u32) -> u32 {
        (**self).next_in_range(low, high)
    }
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    fn next_in_range(&mut self, low: u32, high: u32) -> u32 {
        (**self).next_in_range(low, high)
    }
}
