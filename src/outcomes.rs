//! Simulated set outcomes.
//!
//! A data file holds one set per line, each a comma-separated list of win counts:
//!
//! ```text
//! 5,6,4,5,7,
//! 3,5,5,6,4,
//! ```
//!
//! Tokens are trimmed, and tokens that are not plain decimal digits (such as the
//! empty token left by a trailing comma) are skipped.

use std::fs;
use std::path::Path;

use log::debug;

use crate::error::{Error, Result};

/// Wins per game for one simulated set, in game order.
pub type SetOutcome = Vec<u32>;

/// Reads every set from a data file.
pub fn load<P: AsRef<Path>>(path: P) -> Result<Vec<SetOutcome>> {
    let path = path.as_ref();
    debug!("loading set outcomes from {}", path.display());
    let content = fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse(&content, path)
}

/// Parses data file contents. `path` is only used in error messages.
pub fn parse(content: &str, path: &Path) -> Result<Vec<SetOutcome>> {
    content
        .lines()
        .enumerate()
        .map(|(line_num, line)| parse_line(line).map_err(|message| Error::Parse {
            path: path.to_path_buf(),
            line: line_num + 1,
            message,
        }))
        .collect()
}

fn parse_line(line: &str) -> std::result::Result<SetOutcome, String> {
    line.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit()))
        .map(|token| token.parse::<u32>().map_err(|e| format!("invalid win count {:?}: {}", token, e)))
        .collect()
}

/// Pools the win counts of every set into a single sequence.
pub fn flatten(sets: &[SetOutcome]) -> Vec<u32> {
    sets.iter().flatten().copied().collect()
}
