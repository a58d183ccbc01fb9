//! # streamwatch-source
//!
//! Sample sources feeding the streamwatch detector.
//!
//! - [`SyntheticStream`]: seasonal sine wave with Gaussian noise and randomly
//!   injected spikes, optionally paced to simulate real-time arrival.
//! - [`ReplaySource`]: recorded samples read line by line from any `BufRead`.
//!
//! Both are lazy iterators. Neither buffers more than the current sample.

#![deny(unsafe_code)]

pub mod error;
pub mod replay;
pub mod synthetic;

pub use error::{SourceError, SourceResult};
pub use replay::ReplaySource;
pub use synthetic::{Labeled, LabeledSample, SyntheticConfig, SyntheticStream};

/// Default number of synthetic samples per run.
pub const DEFAULT_SAMPLES: usize = 1000;

/// Default delay between synthetic samples, in milliseconds.
pub const DEFAULT_INTERVAL_MS: u64 = 100;
