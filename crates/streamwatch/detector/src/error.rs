use thiserror::Error;

/// Errors raised when a detector is constructed with invalid parameters.
///
/// These are the only errors the detector produces. They surface before any
/// sample is consumed and are not recoverable for that detector instance.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigurationError {
    #[error("invalid window_size {window_size}: must be at least 1")]
    InvalidWindowSize { window_size: usize },

    #[error("invalid threshold {threshold}: must be a positive finite number")]
    InvalidThreshold { threshold: f64 },
}

/// Convenience type alias for detector construction results.
pub type DetectorResult<T> = Result<T, ConfigurationError>;
