//! # streamwatch-detector
//!
//! Online anomaly detection for a single stream of scalar samples.
//!
//! Each sample is appended to a fixed-size trailing window. Once the window is
//! full, the sample is scored against the window's mean, population standard
//! deviation and median absolute deviation (MAD):
//!
//! ```text
//!   z                 = (x - mean) / std                (0 when std == 0)
//!   dynamic_threshold = threshold + mad / std           (threshold when std == 0)
//!   is_anomaly        = |z| > dynamic_threshold
//! ```
//!
//! The MAD term is a heuristic stabilizer carried over for behavioral parity.
//! It is not a tuned or statistically validated detection model.
//!
//! ## Lifecycle
//!
//! ```text
//!   WarmingUp ──(window reaches window_size)──► Active
//! ```
//!
//! During warm-up every sample is reported as normal.
//!
//! ## Quick Start
//!
//! ```rust
//! use streamwatch_detector::{detect, DetectorConfig};
//!
//! let mut samples = vec![1.0; 9];
//! samples.push(50.0);
//!
//! let verdicts: Vec<_> = detect(samples, DetectorConfig::new(10, 2.0))
//!     .unwrap()
//!     .collect();
//!
//! assert!(verdicts[..9].iter().all(|v| !v.is_anomaly));
//! assert!(verdicts[9].is_anomaly);
//! ```

#![deny(unsafe_code)]

pub mod config;
pub mod detector;
pub mod error;
mod stats;
pub mod stream;
pub mod verdict;
mod window;

// ── Re-exports ──────────────────────────────────────────────────────────

pub use config::DetectorConfig;
pub use detector::AnomalyDetector;
pub use error::{ConfigurationError, DetectorResult};
pub use stats::WindowStatistics;
pub use stream::{detect, try_detect, Assessments, DetectAnomalies, Detections, TryDetections};
pub use verdict::{Assessment, DetectorState, Score, Verdict};

/// Default trailing window length.
pub const DEFAULT_WINDOW_SIZE: usize = 100;

/// Default baseline z-score cutoff.
pub const DEFAULT_THRESHOLD: f64 = 3.0;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detector_is_send() {
        fn assert_send<T: Send>() {}
        assert_send::<AnomalyDetector>();
        assert_send::<Detections<std::vec::IntoIter<f64>>>();
    }

    #[test]
    fn defaults_are_consistent() {
        let cfg = DetectorConfig::default();
        assert_eq!(cfg.window_size, DEFAULT_WINDOW_SIZE);
        assert_eq!(cfg.threshold, DEFAULT_THRESHOLD);
    }
}
