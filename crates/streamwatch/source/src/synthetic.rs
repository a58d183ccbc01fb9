//! Synthetic seasonal signal with Gaussian noise and random spikes.
//!
//! Sample `i` is
//!
//! ```text
//!   sin(i / period) * amplitude + N(0, noise_level) [+ spike_magnitude]
//! ```
//!
//! where the spike is added with probability `anomaly_chance`.

use std::thread;
use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::Normal;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::{SourceError, SourceResult};

// ── Configuration ───────────────────────────────────────────────────────

/// Parameters of the synthetic signal.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SyntheticConfig {
    /// Number of samples to produce; `None` for an unbounded stream.
    pub samples: Option<usize>,
    /// Standard deviation of the additive Gaussian noise.
    pub noise_level: f64,
    /// Probability that a sample carries an injected spike.
    pub anomaly_chance: f64,
    /// Amplitude of the seasonal component.
    pub amplitude: f64,
    /// Divisor applied to the sample index before `sin`.
    pub period: f64,
    /// Offset added to spiked samples.
    pub spike_magnitude: f64,
    /// Delay before each sample after the first, simulating real-time arrival.
    pub interval_ms: u64,
    /// RNG seed for reproducible runs; entropy-seeded when absent.
    pub seed: Option<u64>,
}

impl Default for SyntheticConfig {
    fn default() -> Self {
        Self {
            samples: Some(super::DEFAULT_SAMPLES),
            noise_level: 0.1,
            anomaly_chance: 0.01,
            amplitude: 10.0,
            period: 50.0,
            spike_magnitude: 50.0,
            interval_ms: super::DEFAULT_INTERVAL_MS,
            seed: None,
        }
    }
}

impl SyntheticConfig {
    pub fn validate(&self) -> SourceResult<()> {
        if !self.noise_level.is_finite() || self.noise_level < 0.0 {
            return Err(SourceError::InvalidConfig(format!(
                "noise_level {} must be finite and non-negative",
                self.noise_level
            )));
        }
        if !(0.0..=1.0).contains(&self.anomaly_chance) {
            return Err(SourceError::InvalidConfig(format!(
                "anomaly_chance {} outside [0, 1]",
                self.anomaly_chance
            )));
        }
        if !self.period.is_finite() || self.period <= 0.0 {
            return Err(SourceError::InvalidConfig(format!(
                "period {} must be finite and positive",
                self.period
            )));
        }
        if !self.amplitude.is_finite() || !self.spike_magnitude.is_finite() {
            return Err(SourceError::InvalidConfig(
                "amplitude and spike_magnitude must be finite".into(),
            ));
        }
        Ok(())
    }

    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}

// ── Stream ──────────────────────────────────────────────────────────────

/// A generated sample together with whether a spike was injected into it.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LabeledSample {
    /// Zero-based position in the stream.
    pub index: usize,
    pub value: f64,
    pub injected: bool,
}

/// Lazy generator of synthetic samples.
///
/// Iterates as plain `f64` values; use [`labeled`](Self::labeled) to keep
/// the injection flags.
pub struct SyntheticStream {
    config: SyntheticConfig,
    rng: StdRng,
    noise: Normal<f64>,
    index: usize,
}

impl SyntheticStream {
    pub fn new(config: SyntheticConfig) -> SourceResult<Self> {
        config.validate()?;
        let noise = Normal::new(0.0, config.noise_level)
            .map_err(|e| SourceError::InvalidConfig(e.to_string()))?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Ok(Self {
            config,
            rng,
            noise,
            index: 0,
        })
    }

    pub fn config(&self) -> &SyntheticConfig {
        &self.config
    }

    /// Produce the next sample, or `None` once a finite stream is exhausted.
    pub fn next_sample(&mut self) -> Option<LabeledSample> {
        if self.config.samples.is_some_and(|limit| self.index >= limit) {
            return None;
        }
        if self.index > 0 && self.config.interval_ms > 0 {
            thread::sleep(self.config.interval());
        }

        let index = self.index;
        let seasonal = (index as f64 / self.config.period).sin() * self.config.amplitude;
        let noise = self.rng.sample(self.noise);
        let injected = self.rng.gen_bool(self.config.anomaly_chance);
        let mut value = seasonal + noise;
        if injected {
            value += self.config.spike_magnitude;
            trace!(index, value, "injected spike");
        }

        self.index += 1;
        Some(LabeledSample {
            index,
            value,
            injected,
        })
    }

    /// Iterate over labeled samples instead of bare values.
    pub fn labeled(self) -> Labeled {
        Labeled { stream: self }
    }

    fn remaining(&self) -> Option<usize> {
        self.config
            .samples
            .map(|limit| limit.saturating_sub(self.index))
    }
}

impl Iterator for SyntheticStream {
    type Item = f64;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_sample().map(|s| s.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.remaining() {
            Some(n) => (n, Some(n)),
            None => (usize::MAX, None),
        }
    }
}

/// Labeled view of a [`SyntheticStream`].
pub struct Labeled {
    stream: SyntheticStream,
}

impl Iterator for Labeled {
    type Item = LabeledSample;

    fn next(&mut self) -> Option<Self::Item> {
        self.stream.next_sample()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.stream.size_hint()
    }
}
