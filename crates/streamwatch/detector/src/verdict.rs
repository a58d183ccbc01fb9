//! Per-sample detector output.

use serde::{Deserialize, Serialize};

use crate::stats::WindowStatistics;

/// Classification of a single sample.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Verdict {
    /// The sample exactly as received.
    pub value: f64,
    /// Whether the sample was flagged.
    pub is_anomaly: bool,
}

impl Verdict {
    pub fn new(value: f64, is_anomaly: bool) -> Self {
        Self { value, is_anomaly }
    }
}

impl From<Verdict> for (f64, bool) {
    fn from(v: Verdict) -> Self {
        (v.value, v.is_anomaly)
    }
}

/// Lifecycle phase of a detector.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DetectorState {
    /// Window not yet full; every sample is reported as normal.
    WarmingUp,
    /// Window full; statistics are computed on every step.
    Active,
}

/// Scores backing a verdict once the detector is active.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Score {
    pub statistics: WindowStatistics,
    pub z_score: f64,
    pub dynamic_threshold: f64,
}

/// A verdict together with the scores that produced it.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Assessment {
    pub verdict: Verdict,
    /// `None` during warm-up.
    pub score: Option<Score>,
}

impl Assessment {
    pub fn is_anomaly(&self) -> bool {
        self.verdict.is_anomaly
    }
}
