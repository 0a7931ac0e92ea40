//! Injectable uniform random sources.

use rand::{Rng, SeedableRng, rngs::StdRng};

/// A source of uniform draws in `[0, 1)`.
///
/// Every random decision made during generation goes through this trait so
/// tests can substitute a fixed sequence and assert exact derived values.
pub trait UniformSource {
    /// Returns the next uniform value in `[0, 1)`.
    fn next_uniform(&mut self) -> f64;
}

/// Seeded pseudo-random source backed by `StdRng`.
#[derive(Debug, Clone)]
pub struct SeededSource {
    rng: StdRng,
}

impl SeededSource {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl UniformSource for SeededSource {
    fn next_uniform(&mut self) -> f64 {
        self.rng.random::<f64>()
    }
}

/// Returns the same value on every draw.
///
/// A value of `0.5` makes every symmetric jitter in the model exactly zero.
#[derive(Debug, Clone, Copy)]
pub struct ConstantSource {
    value: f64,
}

impl ConstantSource {
    pub fn new(value: f64) -> Self {
        Self {
            value: clamp_unit(value),
        }
    }
}

impl UniformSource for ConstantSource {
    fn next_uniform(&mut self) -> f64 {
        self.value
    }
}

/// Replays a fixed sequence of draws, cycling when exhausted.
///
/// An empty sequence behaves like `ConstantSource::new(0.5)`.
#[derive(Debug, Clone)]
pub struct SequenceSource {
    values: Vec<f64>,
    next: usize,
}

impl SequenceSource {
    pub fn new(values: Vec<f64>) -> Self {
        Self {
            values: values.into_iter().map(clamp_unit).collect(),
            next: 0,
        }
    }
}

impl UniformSource for SequenceSource {
    fn next_uniform(&mut self) -> f64 {
        if self.values.is_empty() {
            return 0.5;
        }
        let value = self.values[self.next % self.values.len()];
        self.next += 1;
        value
    }
}

impl<S: UniformSource + ?Sized> UniformSource for &mut S {
    fn next_uniform(&mut self) -> f64 {
        (**self).next_uniform()
    }
}

/// Keeps injected values inside `[0, 1)`.
fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() {
        return 0.0;
    }
    value.clamp(0.0, 1.0 - f64::EPSILON)
}

/// Draws a uniform value in `[low, high)`.
pub fn uniform_in(source: &mut impl UniformSource, low: f64, high: f64) -> f64 {
    low + source.next_uniform() * (high - low)
}

/// Draws a symmetric jitter in `[-amplitude, +amplitude)`.
pub fn symmetric_jitter(source: &mut impl UniformSource, amplitude: f64) -> f64 {
    source.next_uniform() * 2.0 * amplitude - amplitude
}
