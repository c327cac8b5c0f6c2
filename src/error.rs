//! Error type shared by every stage of the analysis.
//!
//! All errors are fatal to the current run: nothing in the crate retries or
//! substitutes a default once a stage has failed.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Which threshold search failed to find an exceeding observation.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SearchStage {
    /// Searching the normalized null LLR values for the first one above the confidence level.
    CriticalValue,
    /// Searching the alternative LLR values for the first one above the critical value.
    Beta,
}

impl fmt::Display for SearchStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchStage::CriticalValue => write!(f, "critical value"),
            SearchStage::Beta => write!(f, "beta"),
        }
    }
}

/// Error type for the analysis pipeline.
#[derive(Debug)]
pub enum Error {
    /// A distribution or a normalization was requested from zero observations.
    EmptyInput { what: &'static str },
    /// Min-max normalization over a collection where every value is identical.
    DegenerateRange { what: &'static str, value: f64 },
    /// No observation exceeds the threshold needed by a search.
    ThresholdNotFound { stage: SearchStage, threshold: f64 },
    /// Invalid confidence level or rule values.
    Configuration(String),
    /// File I/O error.
    Io { path: PathBuf, source: io::Error },
    /// Malformed rules or data file.
    Parse { path: PathBuf, line: usize, message: String },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::EmptyInput { what } => write!(f, "empty input: no observations in {}", what),
            Error::DegenerateRange { what, value } => {
                write!(f, "degenerate range: every value in {} equals {}", what, value)
            }
            Error::ThresholdNotFound { stage, threshold } => write!(
                f,
                "threshold not found while searching for the {}: no observation exceeds {}",
                stage, threshold
            ),
            Error::Configuration(msg) => write!(f, "configuration error: {}", msg),
            Error::Io { path, source } => write!(f, "I/O error on {}: {}", path.display(), source),
            Error::Parse { path, line, message } => {
                write!(f, "parse error in {} at line {}: {}", path.display(), line, message)
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
