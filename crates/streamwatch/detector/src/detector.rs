//! The online anomaly detector.

use tracing::debug;

use crate::config::DetectorConfig;
use crate::error::DetectorResult;
use crate::stats::WindowStatistics;
use crate::verdict::{Assessment, DetectorState, Score, Verdict};
use crate::window::SlidingWindow;

/// Single-pass detector over a trailing window of samples.
///
/// Each call to [`observe`](Self::observe) advances the detector by exactly
/// one sample. The first `window_size - 1` samples are never flagged; from
/// then on every sample is scored against the window that includes it.
///
/// Note that because the scored sample is part of its own window, the largest
/// attainable `|z|` is `sqrt(window_size - 1)`. Small windows therefore cap
/// what the threshold can catch.
///
/// The detector owns all of its state and holds no external resources. It is
/// `Send` but intended to stay with one producer/consumer pair.
#[derive(Clone, Debug)]
pub struct AnomalyDetector {
    config: DetectorConfig,
    window: SlidingWindow,
    /// Reused for median computation; no information survives between steps.
    scratch: Vec<f64>,
}

impl AnomalyDetector {
    /// Create a detector, rejecting invalid parameters.
    pub fn new(config: DetectorConfig) -> DetectorResult<Self> {
        config.validate()?;
        Ok(Self::from_validated(config))
    }

    /// Create a detector with the default window size and threshold.
    pub fn with_defaults() -> Self {
        Self::from_validated(DetectorConfig::default())
    }

    fn from_validated(config: DetectorConfig) -> Self {
        Self {
            config,
            window: SlidingWindow::new(config.window_size),
            scratch: Vec::with_capacity(config.window_size),
        }
    }

    /// Classify one sample.
    pub fn observe(&mut self, sample: f64) -> Verdict {
        self.assess(sample).verdict
    }

    /// Classify one sample and report the scores behind the decision.
    pub fn assess(&mut self, sample: f64) -> Assessment {
        let was_full = self.window.is_full();
        self.window.push(sample);

        if !self.window.is_full() {
            return Assessment {
                verdict: Verdict::new(sample, false),
                score: None,
            };
        }
        if !was_full {
            debug!(
                window_size = self.window.capacity(),
                "window full, detector active"
            );
        }

        self.scratch.clear();
        self.scratch.extend(self.window.iter());
        let statistics = WindowStatistics::compute_in_place(&mut self.scratch);

        let z_score = statistics.z_score(sample);
        let dynamic_threshold = statistics.dynamic_threshold(self.config.threshold);
        let is_anomaly = z_score.abs() > dynamic_threshold;

        if is_anomaly {
            debug!(
                value = sample,
                z_score,
                threshold = dynamic_threshold,
                "anomaly detected"
            );
        }

        Assessment {
            verdict: Verdict::new(sample, is_anomaly),
            score: Some(Score {
                statistics,
                z_score,
                dynamic_threshold,
            }),
        }
    }

    /// Current lifecycle phase.
    pub fn state(&self) -> DetectorState {
        if self.window.is_full() {
            DetectorState::Active
        } else {
            DetectorState::WarmingUp
        }
    }

    pub fn config(&self) -> &DetectorConfig {
        &self.config
    }

    /// Number of samples currently held in the window.
    pub fn window_len(&self) -> usize {
        self.window.len()
    }
}

impl Default for AnomalyDetector {
    fn default() -> Self {
        Self::with_defaults()
    }
}
