//! Replay of recorded samples from newline-delimited text.
//!
//! One number per line. Blank lines and lines starting with `#` are skipped.

use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::Path;

use tracing::{debug, warn};

use crate::error::{SourceError, SourceResult};

/// Lazy reader of recorded samples.
///
/// Yields `Err` for unreadable or malformed lines and keeps going; callers
/// decide whether an error ends the run.
pub struct ReplaySource<R> {
    lines: Lines<R>,
    line_no: usize,
}

impl<R: BufRead> ReplaySource<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            line_no: 0,
        }
    }

    /// Number of lines consumed so far.
    pub fn lines_read(&self) -> usize {
        self.line_no
    }
}

impl ReplaySource<BufReader<File>> {
    /// Open a recording on disk.
    pub fn open(path: impl AsRef<Path>) -> SourceResult<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        debug!(path = %path.display(), "opened recording");
        Ok(Self::new(BufReader::new(file)))
    }
}

impl<R: BufRead> Iterator for ReplaySource<R> {
    type Item = SourceResult<f64>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = match self.lines.next()? {
                Ok(line) => line,
                Err(e) => return Some(Err(SourceError::Io(e))),
            };
            self.line_no += 1;

            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            return Some(trimmed.parse::<f64>().map_err(|_| {
                warn!(line = self.line_no, content = trimmed, "malformed sample");
                SourceError::Parse {
                    line: self.line_no,
                    content: trimmed.to_string(),
                }
            }));
        }
    }
}
