//! Game rules attached to one hypothesis.
//!
//! # Rules File Format
//!
//! A rules file sits next to its data file and is named `rules_<data file name>`.
//! It holds four integers, one per line: cards per game, games per set,
//! number of sets, and gimme (marked) cards.
//!
//! ```text
//! 20
//! 10
//! 1000
//! 2
//! ```
//!
//! Trailing blank lines are ignored.

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::error::{Error, Result};
use crate::utils::round_to;

/// Prefix that turns a data file name into its rules file name.
pub const RULES_PREFIX: &str = "rules_";

/// Rule parameters used to simulate one hypothesis.
///
/// # Invariants
///
/// - `gimme_cards <= card_count`
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct RuleSet {
    pub card_count: u32,
    pub games_per_set: u32,
    pub set_count: u32,
    pub gimme_cards: u32,
}

impl RuleSet {
    /// Creates a rule set, checking `gimme_cards <= card_count`.
    pub fn new(card_count: u32, games_per_set: u32, set_count: u32, gimme_cards: u32) -> Result<Self> {
        if gimme_cards > card_count {
            return Err(Error::Configuration(format!(
                "gimme cards ({}) exceed card count ({})",
                gimme_cards, card_count
            )));
        }
        Ok(Self {
            card_count,
            games_per_set,
            set_count,
            gimme_cards,
        })
    }

    /// Largest number of wins possible in a single game: `card_count / 2`.
    pub fn max_wins(&self) -> u32 {
        self.card_count / 2
    }

    /// Probability of winning a single round.
    ///
    /// A share `gimme / (cards / 2)` of rounds is won outright; the rest are coin flips:
    ///
    /// ```text
    /// will_win = gimme / (cards / 2)
    /// p = round(will_win + 0.5 * (1 - will_win), 3)
    /// ```
    pub fn win_probability(&self) -> Result<f64> {
        let rounds = self.max_wins();
        if rounds == 0 {
            return Err(Error::Configuration(format!(
                "card count {} leaves no rounds to play",
                self.card_count
            )));
        }
        let will_win = self.gimme_cards as f64 / rounds as f64;
        Ok(round_to(will_win + 0.5 * (1.0 - will_win), 3))
    }

    /// Path of the rules file that accompanies `data_path`.
    ///
    /// Returns `None` if `data_path` has no file name.
    pub fn companion_path(data_path: &Path) -> Option<PathBuf> {
        let name = data_path.file_name()?.to_string_lossy();
        Some(data_path.with_file_name(format!("{}{}", RULES_PREFIX, name)))
    }

    /// Loads the rules file that accompanies `data_path`.
    pub fn load_for<P: AsRef<Path>>(data_path: P) -> Result<Self> {
        let data_path = data_path.as_ref();
        let path = Self::companion_path(data_path).ok_or_else(|| Error::Parse {
            path: data_path.to_path_buf(),
            line: 0,
            message: "data path has no file name".to_string(),
        })?;
        Self::load(path)
    }

    /// Reads a rules file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!("loading rules from {}", path.display());
        let content = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content, path)
    }

    /// Parses rules file contents. `path` is only used in error messages.
    pub fn parse(content: &str, path: &Path) -> Result<Self> {
        let parse_err = |line: usize, message: String| Error::Parse {
            path: path.to_path_buf(),
            line,
            message,
        };

        let mut values = [0u32; 4];
        let mut lines = content.lines().enumerate();
        for (i, value) in values.iter_mut().enumerate() {
            let (line_num, line) = lines
                .next()
                .ok_or_else(|| parse_err(i + 1, format!("expected 4 rule values, found {}", i)))?;
            let line = line.trim();
            *value = line
                .parse::<u32>()
                .map_err(|e| parse_err(line_num + 1, format!("invalid rule value {:?}: {}", line, e)))?;
        }
        for (line_num, line) in lines {
            if !line.trim().is_empty() {
                return Err(parse_err(line_num + 1, format!("unexpected trailing content {:?}", line)));
            }
        }

        let [card_count, games_per_set, set_count, gimme_cards] = values;
        Self::new(card_count, games_per_set, set_count, gimme_cards)
    }
}
