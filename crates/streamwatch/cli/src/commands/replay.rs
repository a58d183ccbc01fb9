//! `streamwatch replay`: recorded samples through the detector

use clap::Args;
use std::io::{self, BufRead};
use std::path::PathBuf;
use streamwatch_detector::{try_detect, DetectorConfig};
use streamwatch_source::ReplaySource;
use tracing::info;

use crate::config::StreamwatchConfig;
use crate::error::CliResult;
use crate::output::VerdictSink;
use crate::SinkOptions;

/// Arguments for the replay command
#[derive(Args, Debug, Default)]
pub struct ReplayArgs {
    /// File with one sample per line; reads stdin when omitted or "-"
    #[arg(short, long)]
    pub input: Option<PathBuf>,
}

/// Execute the replay command
pub fn execute(args: ReplayArgs, config: StreamwatchConfig, sink: SinkOptions) -> CliResult<()> {
    config.detector.validate()?;
    match args.input {
        Some(path) if path.as_os_str() != "-" => {
            info!(path = %path.display(), "replaying recording");
            run(ReplaySource::open(&path)?, config.detector, sink)
        }
        _ => {
            info!("replaying samples from stdin");
            run(ReplaySource::new(io::stdin().lock()), config.detector, sink)
        }
    }
}

fn run<R: BufRead>(
    source: ReplaySource<R>,
    detector: DetectorConfig,
    sink: SinkOptions,
) -> CliResult<()> {
    let stdout = io::stdout();
    let mut out = VerdictSink::new(stdout.lock(), sink.format, sink.anomalies_only);
    out.begin()?;
    let mut detections = try_detect(source, detector)?;
    for (index, item) in detections.by_ref().enumerate() {
        out.record(index, item?, None)?;
    }
    let summary = out.finish()?;
    info!(
        samples = summary.samples,
        anomalies = summary.anomalies,
        state = ?detections.detector().state(),
        "replay finished"
    );
    Ok(())
}
