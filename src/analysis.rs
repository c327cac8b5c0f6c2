//! End-to-end analysis: PMFs, LLR collections and the hypothesis test.
//!
//! ```text
//! null sets ─┬─> flatten ─> Pmf::estimate ─> pmf_null ─┐
//!            │                                         ├─> llr(set, pmf_alt, pmf_null)
//! alt sets  ─┼─> flatten ─> Pmf::estimate ─> pmf_alt  ─┘
//!            │
//!            └─> llr_null (drop ±inf), llr_alt (drop ±inf, NaN) ─> evaluate ─> TestResult
//! ```
//!
//! Both PMFs share one support `[0, max_wins]` taken from [`AnalysisConfig`], not
//! from either hypothesis's own card count. When the two rule sets disagree on the
//! card count this is reported with a warning and left as is.

use std::path::Path;

use log::{debug, info, warn};

use crate::error::Result;
use crate::hypothesis::{check_confidence, evaluate, TestResult, DEFAULT_CONFIDENCE};
use crate::llr::{collect_llrs, LlrFilter};
use crate::outcomes::{self, flatten, SetOutcome};
use crate::pmf::Pmf;
use crate::rules::RuleSet;
use crate::utils::min_max;

/// Card count the simulator uses when none is given.
pub const DEFAULT_CARD_COUNT: u32 = 20;

/// Parameters shared by both hypotheses.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct AnalysisConfig {
    /// Upper end of the PMF support.
    pub max_wins: u32,
    /// Confidence level in `(0, 1)`.
    pub confidence: f64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            max_wins: DEFAULT_CARD_COUNT / 2,
            confidence: DEFAULT_CONFIDENCE,
        }
    }
}

impl AnalysisConfig {
    pub fn new(max_wins: u32, confidence: f64) -> Result<Self> {
        check_confidence(confidence)?;
        Ok(Self { max_wins, confidence })
    }

    /// Support derived from a card count: `max_wins = cards / 2`.
    pub fn from_card_count(card_count: u32, confidence: f64) -> Result<Self> {
        Self::new(card_count / 2, confidence)
    }

    pub fn with_max_wins(self, max_wins: u32) -> Self {
        Self { max_wins, ..self }
    }

    pub fn with_confidence(self, confidence: f64) -> Self {
        Self { confidence, ..self }
    }

    pub fn validate(&self) -> Result<()> {
        check_confidence(self.confidence)
    }
}

/// Rules and simulated sets for one hypothesis.
#[derive(Debug, Clone, PartialEq)]
pub struct Hypothesis {
    pub rules: RuleSet,
    pub sets: Vec<SetOutcome>,
}

impl Hypothesis {
    pub fn new(rules: RuleSet, sets: Vec<SetOutcome>) -> Self {
        Self { rules, sets }
    }

    /// Loads a data file and its `rules_` companion.
    pub fn load<P: AsRef<Path>>(data_path: P) -> Result<Self> {
        let data_path = data_path.as_ref();
        let rules = RuleSet::load_for(data_path)?;
        let sets = outcomes::load(data_path)?;
        info!(
            "loaded {} sets from {} ({:?})",
            sets.len(),
            data_path.display(),
            rules
        );
        Ok(Self { rules, sets })
    }

    /// All win counts pooled across sets.
    pub fn flat_outcomes(&self) -> Vec<u32> {
        flatten(&self.sets)
    }

    fn check_shape(&self, label: &str) {
        if self.sets.len() != self.rules.set_count as usize {
            warn!(
                "{}: rules declare {} sets, data has {}",
                label,
                self.rules.set_count,
                self.sets.len()
            );
        }
        let games = self.rules.games_per_set as usize;
        let mismatched = self.sets.iter().filter(|set| set.len() != games).count();
        if mismatched > 0 {
            warn!(
                "{}: {} of {} sets do not have {} games",
                label,
                mismatched,
                self.sets.len(),
                games
            );
        }
    }
}

/// Everything a run produces, for reporting and plotting.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisReport {
    pub pmf_null: Pmf,
    pub pmf_alt: Pmf,
    /// LLR of each null set, `±inf` dropped.
    pub llr_null: Vec<f64>,
    /// LLR of each alternative set, `±inf` and `NaN` dropped.
    pub llr_alt: Vec<f64>,
    pub result: TestResult,
    /// Per-round win probability implied by the null rules, if defined.
    pub null_win_probability: Option<f64>,
    /// Per-round win probability implied by the alternative rules, if defined.
    pub alt_win_probability: Option<f64>,
}

impl AnalysisReport {
    /// Smallest and largest LLR across both collections, ignoring `NaN`.
    pub fn llr_range(&self) -> Option<(f64, f64)> {
        let values: Vec<f64> = self
            .llr_null
            .iter()
            .chain(&self.llr_alt)
            .copied()
            .filter(|v| !v.is_nan())
            .collect();
        min_max(&values)
    }
}

pub struct Analysis;

impl Analysis {
    /// Runs the whole pipeline. Any failing stage aborts the run.
    pub fn run(null: &Hypothesis, alt: &Hypothesis, config: &AnalysisConfig) -> Result<AnalysisReport> {
        config.validate()?;
        debug!("run(config = {:?})", config);

        null.check_shape("H0");
        alt.check_shape("H1");
        if null.rules.card_count != alt.rules.card_count {
            warn!(
                "card counts differ (H0: {}, H1: {}); both PMFs use max_wins = {}",
                null.rules.card_count, alt.rules.card_count, config.max_wins
            );
        }

        let pmf_null = Pmf::estimate(&null.flat_outcomes(), config.max_wins)?;
        let pmf_alt = Pmf::estimate(&alt.flat_outcomes(), config.max_wins)?;
        debug!("pmf_null = {}", pmf_null);
        debug!("pmf_alt = {}", pmf_alt);

        let llr_null = collect_llrs(&null.sets, &pmf_alt, &pmf_null, LlrFilter::KeepNan);
        let llr_alt = collect_llrs(&alt.sets, &pmf_alt, &pmf_null, LlrFilter::FiniteOnly);
        info!("LLR values: {} under H0, {} under H1", llr_null.len(), llr_alt.len());

        let result = evaluate(&llr_null, &llr_alt, config.confidence)?;

        Ok(AnalysisReport {
            pmf_null,
            pmf_alt,
            llr_null,
            llr_alt,
            result,
            null_win_probability: null.rules.win_probability().ok(),
            alt_win_probability: alt.rules.win_probability().ok(),
        })
    }
}
