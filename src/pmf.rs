//! Empirical probability mass functions over win counts.

use std::collections::BTreeMap;
use std::fmt;

use log::{debug, warn};

use crate::error::{Error, Result};

/// Empirical PMF over the integer support `[0, max_wins]`.
///
/// # Invariants
///
/// - `masses.len() == max_wins + 1`
/// - the mass of a value never observed is exactly `0.0`
/// - masses sum to 1
#[derive(Debug, Clone, PartialEq)]
pub struct Pmf {
    masses: Vec<f64>,
    total: usize,
}

impl Pmf {
    /// Estimates a PMF from pooled win counts.
    ///
    /// Each `x` in `[0, max_wins]` gets `count(x) / total`, where `total` counts only
    /// the observations inside the support. Observations above `max_wins` are dropped.
    pub fn estimate(outcomes: &[u32], max_wins: u32) -> Result<Self> {
        if outcomes.is_empty() {
            return Err(Error::EmptyInput { what: "pooled win counts" });
        }

        let mut tally: BTreeMap<u32, usize> = BTreeMap::new();
        for &x in outcomes {
            *tally.entry(x).or_default() += 1;
        }
        debug!("estimate(n = {}, max_wins = {}): tally = {:?}", outcomes.len(), max_wins, tally);

        let total: usize = tally.range(..=max_wins).map(|(_, &c)| c).sum();
        let outside = outcomes.len() - total;
        if outside > 0 {
            warn!(
                "{} of {} observations exceed max_wins = {} and fall outside the support",
                outside,
                outcomes.len(),
                max_wins
            );
        }
        if total == 0 {
            return Err(Error::EmptyInput {
                what: "win counts within [0, max_wins]",
            });
        }

        let masses = (0..=max_wins)
            .map(|x| match tally.get(&x) {
                Some(&count) => count as f64 / total as f64,
                None => 0.0,
            })
            .collect();

        Ok(Self { masses, total })
    }

    /// Mass at `x`, or `0.0` outside the support.
    pub fn mass(&self, x: u32) -> f64 {
        self.masses.get(x as usize).copied().unwrap_or(0.0)
    }

    /// Upper end of the support.
    pub fn max_wins(&self) -> u32 {
        (self.masses.len() - 1) as u32
    }

    /// Number of in-support observations the PMF was estimated from.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Masses indexed by win count.
    pub fn masses(&self) -> &[f64] {
        &self.masses
    }

    /// `(x, p(x))` pairs over the whole support.
    pub fn iter(&self) -> impl Iterator<Item = (u32, f64)> + '_ {
        self.masses.iter().enumerate().map(|(x, &p)| (x as u32, p))
    }

    /// Sum of all masses in the support.
    pub fn total_mass(&self) -> f64 {
        self.masses.iter().sum()
    }
}

impl fmt::Display for Pmf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (x, p)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}: {:.4}", x, p)?;
        }
        write!(f, "}}")
    }
}
