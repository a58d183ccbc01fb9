//! Output formatting for CLI

use clap::ValueEnum;
use colored::Colorize;
use serde::Serialize;
use std::io::Write;
use streamwatch_detector::Verdict;

use crate::error::CliResult;

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, ValueEnum, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// One JSON object per line
    Json,
}

/// Totals reported once the stream ends.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RunSummary {
    pub samples: usize,
    pub anomalies: usize,
    /// Spikes injected by the synthetic source, when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub injected: Option<usize>,
    /// Injected spikes that were also flagged.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub injected_detected: Option<usize>,
}

#[derive(Serialize)]
struct Row {
    index: usize,
    #[serde(flatten)]
    verdict: Verdict,
    #[serde(skip_serializing_if = "Option::is_none")]
    injected: Option<bool>,
}

/// Terminal sink for detector verdicts.
pub struct VerdictSink<W> {
    out: W,
    format: OutputFormat,
    anomalies_only: bool,
    summary: RunSummary,
}

impl<W: Write> VerdictSink<W> {
    pub fn new(out: W, format: OutputFormat, anomalies_only: bool) -> Self {
        Self {
            out,
            format,
            anomalies_only,
            summary: RunSummary::default(),
        }
    }

    /// Write the table header (no-op for JSON).
    pub fn begin(&mut self) -> CliResult<()> {
        if self.format == OutputFormat::Table {
            writeln!(
                self.out,
                "{}",
                format!("{:>7}  {:>12}  {}", "index", "value", "verdict").bold()
            )?;
        }
        Ok(())
    }

    /// Record one verdict. `injected` is known only for synthetic runs.
    pub fn record(
        &mut self,
        index: usize,
        verdict: Verdict,
        injected: Option<bool>,
    ) -> CliResult<()> {
        self.summary.samples += 1;
        if verdict.is_anomaly {
            self.summary.anomalies += 1;
        }
        if let Some(injected) = injected {
            *self.summary.injected.get_or_insert(0) += usize::from(injected);
            let hits = self.summary.injected_detected.get_or_insert(0);
            if injected && verdict.is_anomaly {
                *hits += 1;
            }
        }

        if self.anomalies_only && !verdict.is_anomaly {
            return Ok(());
        }

        match self.format {
            OutputFormat::Table => {
                let flag = if verdict.is_anomaly {
                    "ANOMALY".red().bold().to_string()
                } else {
                    "normal".dimmed().to_string()
                };
                let marker = match injected {
                    Some(true) => "  (injected)",
                    _ => "",
                };
                writeln!(
                    self.out,
                    "{:>7}  {:>12.4}  {}{}",
                    index, verdict.value, flag, marker
                )?;
            }
            OutputFormat::Json => {
                let row = Row {
                    index,
                    verdict,
                    injected,
                };
                serde_json::to_writer(&mut self.out, &row)?;
                writeln!(self.out)?;
            }
        }
        Ok(())
    }

    /// Write the summary and flush.
    pub fn finish(mut self) -> CliResult<RunSummary> {
        let s = &self.summary;
        match self.format {
            OutputFormat::Table => {
                writeln!(self.out)?;
                writeln!(self.out, "{}", "Summary".bold().cyan())?;
                writeln!(self.out, "  samples:   {}", s.samples)?;
                writeln!(self.out, "  anomalies: {}", s.anomalies)?;
                if let (Some(injected), Some(hits)) = (s.injected, s.injected_detected) {
                    writeln!(self.out, "  injected:  {} ({} flagged)", injected, hits)?;
                }
            }
            OutputFormat::Json => {
                serde_json::to_writer(&mut self.out, &serde_json::json!({ "summary": s }))?;
                writeln!(self.out)?;
            }
        }
        self.out.flush()?;
        Ok(self.summary)
    }
}
