//! # cardgame-llr: telling fair card games from rigged ones
//!
//! **`cardgame-llr`** runs a Neyman–Pearson style test on simulated card game results.
//! One batch of sets is simulated with fair rules (H0), another with a known number of
//! marked "gimme" cards that always win (H1). From the two batches the crate estimates a
//! win-count distribution per hypothesis, scores every set with a log-likelihood ratio,
//! picks a critical value at the requested confidence, and reports alpha, beta and power.
//!
//! ## Basic Usage
//!
//! ```rust
//! use cardgame_llr::analysis::{Analysis, AnalysisConfig, Hypothesis};
//! use cardgame_llr::rules::RuleSet;
//!
//! let fair = Hypothesis::new(
//!     RuleSet::new(8, 3, 4, 0)?,
//!     vec![vec![1, 2, 2], vec![2, 2, 3], vec![2, 3, 3], vec![2, 2, 2]],
//! );
//! let rigged = Hypothesis::new(
//!     RuleSet::new(8, 3, 4, 2)?,
//!     vec![vec![2, 3, 3], vec![3, 3, 2], vec![3, 3, 3], vec![2, 2, 3]],
//! );
//!
//! let config = AnalysisConfig::new(4, 0.5)?;
//! let report = Analysis::run(&fair, &rigged, &config)?;
//! println!("{}", report.result);
//! # Ok::<(), cardgame_llr::error::Error>(())
//! ```
//!
//! ## Core Components
//!
//! - **[`pmf`]**: empirical probability mass function over `[0, max_wins]`.
//! - **[`llr`]**: per-set log-likelihood ratio and the filtering of non-finite values.
//! - **[`hypothesis`]**: critical value search, alpha, beta and power.
//! - **[`analysis`]**: the pipeline tying the three together.
//! - **[`rules`]** and **[`outcomes`]**: reading the simulator's rules and data files.

pub mod analysis;
pub mod error;
pub mod hypothesis;
pub mod llr;
pub mod outcomes;
pub mod pmf;
pub mod rules;
pub mod utils;
