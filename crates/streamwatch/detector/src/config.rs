//! Detector configuration.

use serde::{Deserialize, Serialize};

use crate::error::{ConfigurationError, DetectorResult};

/// Parameters fixed at detector construction.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectorConfig {
    /// Number of trailing samples the statistics are computed over.
    pub window_size: usize,
    /// Baseline z-score cutoff before the dynamic adjustment.
    pub threshold: f64,
}

impl DetectorConfig {
    pub fn new(window_size: usize, threshold: f64) -> Self {
        Self {
            window_size,
            threshold,
        }
    }

    /// Check both parameters, reporting the window size first.
    pub fn validate(&self) -> DetectorResult<()> {
        if self.window_size == 0 {
            return Err(ConfigurationError::InvalidWindowSize {
                window_size: self.window_size,
            });
        }
        if !self.threshold.is_finite() || self.threshold <= 0.0 {
            return Err(ConfigurationError::InvalidThreshold {
                threshold: self.threshold,
            });
        }
        Ok(())
    }
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            window_size: super::DEFAULT_WINDOW_SIZE,
            threshold: super::DEFAULT_THRESHOLD,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let cfg = DetectorConfig::default();
        assert_eq!(cfg.window_size, 100);
        assert!((cfg.threshold - 3.0).abs() < f64::EPSILON);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn zero_window_rejected() {
        let err = DetectorConfig::new(0, 3.0).validate().unwrap_err();
        assert_eq!(err, ConfigurationError::InvalidWindowSize { window_size: 0 });
    }

    #[test]
    fn non_positive_threshold_rejected() {
        for threshold in [0.0, -1.0, -0.0] {
            let err = DetectorConfig::new(10, threshold).validate().unwrap_err();
            assert!(matches!(err, ConfigurationError::InvalidThreshold { .. }));
        }
    }

    #[test]
    fn non_finite_threshold_rejected() {
        for threshold in [f64::NAN, f64::INFINITY] {
            assert!(DetectorConfig::new(10, threshold).validate().is_err());
        }
    }

    #[test]
    fn window_size_reported_before_threshold() {
        let err = DetectorConfig::new(0, -1.0).validate().unwrap_err();
        assert!(matches!(err, ConfigurationError::InvalidWindowSize { .. }));
    }

    #[test]
    fn partial_config_deserializes_with_defaults() {
        let cfg: DetectorConfig = serde_json::from_str(r#"{"threshold": 2.5}"#).unwrap();
        assert_eq!(cfg.window_size, 100);
        assert!((cfg.threshold - 2.5).abs() < f64::EPSILON);
    }
}
