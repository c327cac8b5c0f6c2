//! Log-likelihood ratio of a set under two PMFs.
//!
//! Games within a set are treated as independent, so the joint likelihood of a
//! set is the product of the per-game masses:
//!
//! ```text
//! L(set | P) = prod_i P(x_i)
//! llr(set)   = ln( L(set | numerator) / L(set | denominator) )
//! ```
//!
//! Zero likelihoods are not special-cased; the IEEE result of the division
//! and the logarithm is the answer:
//!
//! | numerator | denominator | llr    |
//! |-----------|-------------|--------|
//! | > 0       | 0           | `+inf` |
//! | 0         | 0           | `NaN`  |
//! | 0         | > 0         | `-inf` |

use log::{debug, info};

use crate::outcomes::SetOutcome;
use crate::pmf::Pmf;

/// Joint likelihood of `set` under `pmf`.
pub fn likelihood(set: &[u32], pmf: &Pmf) -> f64 {
    set.iter().map(|&x| pmf.mass(x)).product()
}

/// `ln(L(set | numerator) / L(set | denominator))`.
pub fn log_likelihood_ratio(set: &[u32], numerator: &Pmf, denominator: &Pmf) -> f64 {
    let num = likelihood(set, numerator);
    let den = likelihood(set, denominator);
    (num / den).ln()
}

/// Which non-finite LLR values are dropped when collecting a hypothesis.
///
/// The null and alternative collections are filtered differently: the null side
/// keeps `NaN`, the alternative side does not.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum LlrFilter {
    /// Drop `±inf`, keep `NaN`. Used for the null hypothesis.
    KeepNan,
    /// Drop `±inf` and `NaN`. Used for the alternative hypothesis.
    FiniteOnly,
}

impl LlrFilter {
    /// Whether `value` survives this filter.
    pub fn keeps(self, value: f64) -> bool {
        match self {
            LlrFilter::KeepNan => !value.is_infinite(),
            LlrFilter::FiniteOnly => value.is_finite(),
        }
    }
}

/// Computes the LLR of every set, in order, and drops values rejected by `filter`.
pub fn collect_llrs(sets: &[SetOutcome], numerator: &Pmf, denominator: &Pmf, filter: LlrFilter) -> Vec<f64> {
    let mut dropped = 0usize;
    let llrs: Vec<f64> = sets
        .iter()
        .map(|set| log_likelihood_ratio(set, numerator, denominator))
        .filter(|&v| {
            let keep = filter.keeps(v);
            if !keep {
                dropped += 1;
            }
            keep
        })
        .collect();
    debug!("collect_llrs({:?}): kept {}, dropped {}", filter, llrs.len(), dropped);
    if dropped > 0 {
        info!("{:?} dropped {} of {} LLR values", filter, dropped, sets.len());
    }
    llrs
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;

    fn pmf(outcomes: &[u32]) -> Pmf {
        Pmf::estimate(outcomes, 4).unwrap()
    }

    #[test]
    fn test_likelihood() {
        // p = {0: 0.25, 1: 0.5, 2: 0.25}
        let p = pmf(&[0, 1, 1, 2]);
        assert_eq!(likelihood(&[1, 1], &p), 0.25);
        assert_eq!(likelihood(&[0, 1, 2], &p), 0.25 * 0.5 * 0.25);
        assert_eq!(likelihood(&[3], &p), 0.0);
        assert_eq!(likelihood(&[], &p), 1.0);
    }

    #[test]
    fn test_llr() {
        let a = pmf(&[0, 1, 1, 2]); // {0: .25, 1: .5, 2: .25}
        let b = pmf(&[1, 2, 2, 2]); // {1: .25, 2: .75}
        let llr = log_likelihood_ratio(&[1, 2], &a, &b);
        let expected = f64::ln((0.5 * 0.25) / (0.25 * 0.75));
        assert!((llr - expected).abs() < 1e-12, "{} != {}", llr, expected);
    }

    #[test]
    fn test_llr_antisymmetric() {
        let a = pmf(&[0, 1, 1, 2, 3, 3]);
        let b = pmf(&[1, 2, 2, 2, 3, 0, 0]);
        for set in [vec![1, 2], vec![0, 0, 3], vec![2, 2, 2, 1], vec![3]] {
            let ab = log_likelihood_ratio(&set, &a, &b);
            let ba = log_likelihood_ratio(&set, &b, &a);
            assert!(ab.is_finite());
            assert!((ab + ba).abs() < 1e-12, "{:?}: {} vs {}", set, ab, ba);
        }
    }

    #[test]
    fn test_llr_positive_infinity() {
        let num = pmf(&[3, 4]);
        let den = pmf(&[0, 1]);
        assert_eq!(log_likelihood_ratio(&[3, 4, 3], &num, &den), f64::INFINITY);
    }

    #[test]
    fn test_llr_negative_infinity() {
        let num = pmf(&[0, 1]);
        let den = pmf(&[3, 4]);
        assert_eq!(log_likelihood_ratio(&[3, 4], &num, &den), f64::NEG_INFINITY);
    }

    #[test]
    fn test_llr_nan() {
        let num = pmf(&[0, 1]);
        let den = pmf(&[0, 2]);
        // 1 has no mass under den, 2 has no mass under num
        assert!(log_likelihood_ratio(&[1, 2], &num, &den).is_nan());
        // 3 has no mass under either
        assert!(log_likelihood_ratio(&[3], &num, &den).is_nan());
    }

    #[test]
    fn test_filter() {
        assert!(LlrFilter::KeepNan.keeps(1.5));
        assert!(LlrFilter::KeepNan.keeps(f64::NAN));
        assert!(!LlrFilter::KeepNan.keeps(f64::INFINITY));
        assert!(!LlrFilter::KeepNan.keeps(f64::NEG_INFINITY));

        assert!(LlrFilter::FiniteOnly.keeps(-1.5));
        assert!(!LlrFilter::FiniteOnly.keeps(f64::NAN));
        assert!(!LlrFilter::FiniteOnly.keeps(f64::INFINITY));
        assert!(!LlrFilter::FiniteOnly.keeps(f64::NEG_INFINITY));
    }

    #[test]
    fn test_collect_llrs() {
        let num = pmf(&[1, 2, 2, 3]);
        let den = pmf(&[0, 1, 1, 2]);
        let sets = vec![
            vec![1, 2], // finite
            vec![3],    // +inf
            vec![0],    // -inf
            vec![4],    // NaN
            vec![2, 2], // finite
        ];

        let null = collect_llrs(&sets, &num, &den, LlrFilter::KeepNan);
        assert_eq!(null.len(), 3);
        assert!(null[0].is_finite());
        assert!(null[1].is_nan());
        assert!(null[2].is_finite());

        let alt = collect_llrs(&sets, &num, &den, LlrFilter::FiniteOnly);
        assert_eq!(alt.len(), 2);
        assert_eq!(alt[0], null[0]);
        assert_eq!(alt[1], null[2]);
    }
}
