//! Random sources with predictable output.

use crate::port::RandomSource;

/// Replays a fixed list of values, repeating the last one once exhausted.
///
/// Values are returned as-is, without checking them against the requested
/// range.
#[derive(Debug, Clone)]
pub struct ScriptedRandom {
    values: Vec<u32>,
    cursor: usize,
}

impl ScriptedRandom {
    pub fn new(values: Vec<u32>) -> Self {
        Self { values, cursor: 0 }
    }

    /// A source that always returns `value`.
    pub fn constant(value: u32) -> Self {
        Self::new(vec![value])
    }
}

impl RandomSource for ScriptedRandom {
    fn next_in_range(&mut self, _low: u32, _high: u32) -> u32 {
        let value = self
            .values
            .get(self.cursor)
            .or_else(|| self.values.last())
            .copied()
            .unwrap_or(0);
        self.cursor += 1;
        value
    }
}

/// Always returns the lowest value of the requested range.
#[derive(Debug, Clone, Copy, Default)]
pub struct LowestRandom;

impl RandomSource for LowestRandom {
    fn next_in_range(&mut self, low: u32, _high: u32) -> u32 {
        low
    }
}

/// Always returns the highest value of the requested range.
#[derive(Debug, Clone, Copy, Default)]
pub struct HighestRandom;

impl RandomSource for HighestRandom {
    fn next_in_range(&mut self, _low: u32, high: u32) -> u32 {
        high - 1
    }
}

/// Wraps another source and records every requested range.
#[derive(Debug, Clone)]
pub struct RecordingRandom<R> {
    inner: R,
    calls: Vec<(u32, u32)>,
}

impl<R: RandomSource> RecordingRandom<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            calls: Vec::new(),
        }
    }

    /// `(low, high)` pairs in call order.
    pub fn calls(&self) -> &[(u32, u32)] {
        &self.calls
    }
}

impl<R: RandomSource> RandomSource for RecordingRandom<R> {
    fn next_in_range(&mut self, low: u32, high: u32) -> u32 {
        self.calls.push((low, high));
        self.inner.next_in_range(low, high)
    }
}
