//! `streamwatch simulate`: synthetic source through the detector

use clap::Args;
use std::io;
use streamwatch_detector::AnomalyDetector;
use streamwatch_source::{SyntheticConfig, SyntheticStream};
use tracing::info;

use crate::config::StreamwatchConfig;
use crate::error::CliResult;
use crate::output::VerdictSink;
use crate::SinkOptions;

/// Arguments for the simulate command
#[derive(Args, Debug, Default)]
pub struct SimulateArgs {
    /// Number of samples to generate
    #[arg(short = 'n', long, conflicts_with = "unbounded")]
    pub samples: Option<usize>,

    /// Generate samples until interrupted
    #[arg(long)]
    pub unbounded: bool,

    /// RNG seed for a reproducible run
    #[arg(long)]
    pub seed: Option<u64>,

    /// Delay between samples in milliseconds
    #[arg(long)]
    pub interval_ms: Option<u64>,

    /// Standard deviation of the Gaussian noise
    #[arg(long)]
    pub noise_level: Option<f64>,

    /// Probability of injecting a spike into each sample
    #[arg(long)]
    pub anomaly_chance: Option<f64>,
}

impl SimulateArgs {
    fn apply(&self, source: &mut SyntheticConfig) {
        if self.unbounded {
            source.samples = None;
        } else if let Some(samples) = self.samples {
            source.samples = Some(samples);
        }
        if let Some(seed) = self.seed {
            source.seed = Some(seed);
        }
        if let Some(interval_ms) = self.interval_ms {
            source.interval_ms = interval_ms;
        }
        if let Some(noise_level) = self.noise_level {
            source.noise_level = noise_level;
        }
        if let Some(anomaly_chance) = self.anomaly_chance {
            source.anomaly_chance = anomaly_chance;
        }
    }
}

/// Execute the simulate command
pub fn execute(args: SimulateArgs, config: StreamwatchConfig, sink: SinkOptions) -> CliResult<()> {
    let mut source_config = config.source;
    args.apply(&mut source_config);

    let mut detector = AnomalyDetector::new(config.detector)?;
    let stream = SyntheticStream::new(source_config)?;
    info!(
        window_size = config.detector.window_size,
        threshold = config.detector.threshold,
        samples = ?stream.config().samples,
        "starting simulation"
    );

    let stdout = io::stdout();
    let mut out = VerdictSink::new(stdout.lock(), sink.format, sink.anomalies_only);
    out.begin()?;
    for sample in stream.labeled() {
        let verdict = detector.observe(sample.value);
        out.record(sample.index, verdict, Some(sample.injected))?;
    }
    let summary = out.finish()?;
    info!(
        samples = summary.samples,
        anomalies = summary.anomalies,
        "simulation finished"
    );
    Ok(())
}
