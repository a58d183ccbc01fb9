//! Iterator adapters that run a detector over a lazy sample source.
//!
//! ```text
//!   source ──next()──► AnomalyDetector ──► Verdict
//! ```
//!
//! Evaluation is pull-based: each `next()` pulls exactly one sample from the
//! source and yields exactly one verdict. Nothing beyond the detector window
//! is buffered. Adapters are not restartable; they consume the source.

use std::iter::FusedIterator;

use crate::config::DetectorConfig;
use crate::detector::AnomalyDetector;
use crate::error::DetectorResult;
use crate::verdict::{Assessment, Verdict};

/// Verdicts for an infallible sample source.
#[derive(Clone, Debug)]
pub struct Detections<I> {
    source: I,
    detector: AnomalyDetector,
}

impl<I> Detections<I> {
    /// The detector driving this adapter.
    pub fn detector(&self) -> &AnomalyDetector {
        &self.detector
    }

    /// Yield full assessments instead of bare verdicts.
    pub fn with_scores(self) -> Assessments<I> {
        Assessments {
            source: self.source,
            detector: self.detector,
        }
    }
}

impl<I: Iterator<Item = f64>> Iterator for Detections<I> {
    type Item = Verdict;

    fn next(&mut self) -> Option<Self::Item> {
        let sample = self.source.next()?;
        Some(self.detector.observe(sample))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.source.size_hint()
    }
}

impl<I: FusedIterator<Item = f64>> FusedIterator for Detections<I> {}

impl<I: ExactSizeIterator<Item = f64>> ExactSizeIterator for Detections<I> {}

/// Assessments for an infallible sample source.
#[derive(Clone, Debug)]
pub struct Assessments<I> {
    source: I,
    detector: AnomalyDetector,
}

impl<I: Iterator<Item = f64>> Iterator for Assessments<I> {
    type Item = Assessment;

    fn next(&mut self) -> Option<Self::Item> {
        let sample = self.source.next()?;
        Some(self.detector.assess(sample))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.source.size_hint()
    }
}

impl<I: FusedIterator<Item = f64>> FusedIterator for Assessments<I> {}

/// Verdicts for a fallible sample source.
///
/// Source errors are yielded unchanged and leave the window untouched.
#[derive(Clone, Debug)]
pub struct TryDetections<I> {
    source: I,
    detector: AnomalyDetector,
}

impl<I> TryDetections<I> {
    pub fn detector(&self) -> &AnomalyDetector {
        &self.detector
    }
}

impl<I, E> Iterator for TryDetections<I>
where
    I: Iterator<Item = Result<f64, E>>,
{
    type Item = Result<Verdict, E>;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.source.next()?;
        Some(item.map(|sample| self.detector.observe(sample)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.source.size_hint()
    }
}

impl<I, E> FusedIterator for TryDetections<I> where I: FusedIterator<Item = Result<f64, E>> {}

/// Run a detector over `source`.
///
/// The configuration is validated before the source is touched, so an
/// invalid configuration never consumes a sample.
pub fn detect<I>(source: I, config: DetectorConfig) -> DetectorResult<Detections<I::IntoIter>>
where
    I: IntoIterator<Item = f64>,
{
    let detector = AnomalyDetector::new(config)?;
    Ok(Detections {
        source: source.into_iter(),
        detector,
    })
}

/// Run a detector over a fallible `source`, passing its errors through.
pub fn try_detect<I, E>(
    source: I,
    config: DetectorConfig,
) -> DetectorResult<TryDetections<I::IntoIter>>
where
    I: IntoIterator<Item = Result<f64, E>>,
{
    let detector = AnomalyDetector::new(config)?;
    Ok(TryDetections {
        source: source.into_iter(),
        detector,
    })
}

/// Extension trait adding `.detect_anomalies(config)` to sample iterators.
pub trait DetectAnomalies: Iterator<Item = f64> + Sized {
    fn detect_anomalies(self, config: DetectorConfig) -> DetectorResult<Detections<Self>> {
        detect(self, config)
    }
}

impl<I: Iterator<Item = f64>> DetectAnomalies for I {}
