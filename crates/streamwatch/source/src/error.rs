use thiserror::Error;

/// Errors from sample sources.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("invalid source configuration: {0}")]
    InvalidConfig(String),

    #[error("read error: {0}")]
    Io(#[from] std::io::Error),

    #[error("line {line}: cannot parse {content:?} as a sample")]
    Parse { line: usize, content: String },
}

/// Convenience type alias for source results.
pub type SourceResult<T> = Result<T, SourceError>;
