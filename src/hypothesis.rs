//! Critical value, error rates and power of the LLR test.
//!
//! The null LLR values decide where H0 gets rejected. They are sorted and min-max
//! normalized, and the first value whose normalized position strictly exceeds the
//! confidence level is the critical value. The alternative LLR values are sorted
//! and normalized the same way, and the normalized position of the first value
//! strictly above the critical value is beta.
//!
//! ```text
//! critical = null[ first i : norm(null)[i] > confidence ]
//! beta     = norm(alt)[ first j : alt[j] > critical ]
//! alpha    = 1 - confidence
//! power    = 1 - beta
//! ```
//!
//! Alpha is reported to 2 decimals, everything else to 3. The beta search
//! compares against the already rounded critical value.

use std::fmt;

use log::{debug, info};

use crate::error::{Error, Result, SearchStage};
use crate::utils::{first_exceeding, normalize, round_to, sort_nan_last};

/// Default confidence level.
pub const DEFAULT_CONFIDENCE: f64 = 0.95;

/// Outcome of one hypothesis test.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TestResult {
    /// Type I error rate, `1 - confidence`.
    pub alpha: f64,
    /// LLR threshold above which H0 is rejected.
    pub critical_value: f64,
    /// Type II error rate.
    pub beta: f64,
    /// `1 - beta`.
    pub power: f64,
}

impl fmt::Display for TestResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "alpha = {} @ lambda = {}; beta = {}; power = {}",
            self.alpha, self.critical_value, self.beta, self.power
        )
    }
}

/// Checks that `confidence` lies in the open interval `(0, 1)`.
pub fn check_confidence(confidence: f64) -> Result<()> {
    if confidence > 0.0 && confidence < 1.0 {
        Ok(())
    } else {
        Err(Error::Configuration(format!(
            "confidence must lie strictly between 0 and 1, got {}",
            confidence
        )))
    }
}

/// Critical value of the null LLR collection at `confidence`, unrounded.
///
/// Sorts `llr_null` in place.
pub fn critical_value(llr_null: &mut [f64], confidence: f64) -> Result<f64> {
    check_confidence(confidence)?;
    sort_nan_last(llr_null);
    let normalized = normalize(llr_null, "null LLR values")?;
    let index = first_exceeding(&normalized, confidence).ok_or(Error::ThresholdNotFound {
        stage: SearchStage::CriticalValue,
        threshold: confidence,
    })?;
    debug!(
        "critical_value: index {} of {}, normalized {}, llr {}",
        index,
        llr_null.len(),
        normalized[index],
        llr_null[index]
    );
    Ok(llr_null[index])
}

/// Beta for the alternative LLR collection against `critical`, unrounded.
///
/// Sorts `llr_alt` in place.
pub fn beta(llr_alt: &mut [f64], critical: f64) -> Result<f64> {
    sort_nan_last(llr_alt);
    let normalized = normalize(llr_alt, "alternative LLR values")?;
    let index = first_exceeding(llr_alt, critical).ok_or(Error::ThresholdNotFound {
        stage: SearchStage::Beta,
        threshold: critical,
    })?;
    debug!(
        "beta: index {} of {}, llr {}, normalized {}",
        index,
        llr_alt.len(),
        llr_alt[index],
        normalized[index]
    );
    Ok(normalized[index])
}

/// Runs the test on both LLR collections.
///
/// Inputs are copied before sorting; the caller's collections are left in order.
pub fn evaluate(llr_null: &[f64], llr_alt: &[f64], confidence: f64) -> Result<TestResult> {
    let mut null = llr_null.to_vec();
    let critical_value = round_to(critical_value(&mut null, confidence)?, 3);
    let alpha = round_to(1.0 - confidence, 2);

    let mut alt = llr_alt.to_vec();
    let beta = round_to(beta(&mut alt, critical_value)?, 3);
    let power = round_to(1.0 - beta, 3);

    let result = TestResult {
        alpha,
        critical_value,
        beta,
        power,
    };
    info!("{}", result);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;

    #[test]
    fn test_critical_value() {
        let mut null = vec![2.0, -1.0, 0.0, -2.0, 1.0];
        assert_eq!(critical_value(&mut null, 0.8).unwrap(), 2.0);
        assert_eq!(null, vec![-2.0, -1.0, 0.0, 1.0, 2.0]);

        let mut null = vec![2.0, -1.0, 0.0, -2.0, 1.0];
        assert_eq!(critical_value(&mut null, 0.6).unwrap(), 1.0);
    }

    #[test]
    fn test_critical_value_strict() {
        // normalized 0.75 does not exceed 0.75
        let mut null = vec![-2.0, -1.0, 0.0, 1.0, 2.0];
        assert_eq!(critical_value(&mut null, 0.75).unwrap(), 2.0);
    }

    #[test]
    fn test_scenario_a() {
        let result = evaluate(&[-2.0, -1.0, 0.0, 1.0, 2.0], &[1.0, 2.0, 3.0, 4.0, 5.0], 0.8).unwrap();
        assert_eq!(result.critical_value, 2.0);
        assert_eq!(result.alpha, 0.2);
    }

    #[test]
    fn test_scenario_b() {
        let result = evaluate(&[-2.0, -1.0, 0.0, 1.0, 2.0], &[5.0, 3.0, 1.0, 4.0, 2.0], 0.8).unwrap();
        assert_eq!(
            result,
            TestResult {
                alpha: 0.2,
                critical_value: 2.0,
                beta: 0.5,
                power: 0.5,
            }
        );
        assert_eq!(result.to_string(), "alpha = 0.2 @ lambda = 2; beta = 0.5; power = 0.5");
    }

    #[test]
    fn test_rounding() {
        let null = [0.0, 0.1, 0.2, 1.23456, 2.0];
        let alt = [1.0, 1.2345, 1.3, 3.0];
        let result = evaluate(&null, &alt, 0.55).unwrap();
        // normalized null: [0, .05, .1, .61728, 1] -> index 3
        assert_eq!(result.critical_value, 1.235);
        assert_eq!(result.alpha, 0.45);
        // 1.2345 is not above the rounded 1.235; 1.3 is -> (1.3 - 1) / 2
        assert_eq!(result.beta, 0.15);
        assert_eq!(result.power, 0.85);
    }

    #[test]
    fn test_confidence_out_of_range() {
        let null = [-2.0, -1.0, 0.0, 1.0, 2.0];
        let alt = [1.0, 2.0, 3.0];
        for confidence in [0.0, 1.0, -0.5, 1.5, f64::NAN] {
            assert!(
                matches!(evaluate(&null, &alt, confidence), Err(Error::Configuration(_))),
                "confidence = {}",
                confidence
            );
        }
    }

    #[test]
    fn test_critical_value_rejects_confidence() {
        let mut null = vec![2.0, -1.0, 0.0, -2.0, 1.0];
        assert!(matches!(critical_value(&mut null, 1.0), Err(Error::Configuration(_))));
        // rejected before sorting
        assert_eq!(null, vec![2.0, -1.0, 0.0, -2.0, 1.0]);
    }

    #[test]
    fn test_threshold_not_found_for_critical_value() {
        // The maximum always normalizes to 1.0, so only a retained NaN starves the search.
        let null = [0.0, 0.5, 1.0];
        assert!(evaluate(&null, &[0.0, 2.0], 0.999).is_ok());

        let null = [0.0, 0.5, 1.0, f64::NAN];
        assert!(matches!(
            evaluate(&null, &[0.0, 2.0], 0.5),
            Err(Error::ThresholdNotFound {
                stage: SearchStage::CriticalValue,
                ..
            })
        ));
    }

    #[test]
    fn test_threshold_not_found_for_beta() {
        let null = [-2.0, -1.0, 0.0, 1.0, 2.0];
        let alt = [-3.0, 0.0, 1.5, 2.0];
        assert!(matches!(
            evaluate(&null, &alt, 0.8),
            Err(Error::ThresholdNotFound {
                stage: SearchStage::Beta,
                threshold
            }) if threshold == 2.0
        ));
    }

    #[test]
    fn test_degenerate_range() {
        assert!(matches!(
            evaluate(&[1.0, 1.0, 1.0], &[0.0, 2.0], 0.5),
            Err(Error::DegenerateRange { .. })
        ));
        assert!(matches!(
            evaluate(&[-2.0, -1.0, 0.0, 1.0, 2.0], &[4.0, 4.0], 0.8),
            Err(Error::DegenerateRange { .. })
        ));
    }

    #[test]
    fn test_empty_collections() {
        assert!(matches!(evaluate(&[], &[1.0, 2.0], 0.5), Err(Error::EmptyInput { .. })));
        assert!(matches!(
            evaluate(&[-2.0, -1.0, 0.0, 1.0, 2.0], &[], 0.8),
            Err(Error::EmptyInput { .. })
        ));
    }

    #[test]
    fn test_monotonic_critical_value() {
        let null: Vec<f64> = (0..50).map(|i| ((i * 37) % 50) as f64 * 0.3 - 4.0).collect();
        let mut previous = f64::NEG_INFINITY;
        for step in 1..100 {
            let confidence = step as f64 / 100.0;
            let mut sorted = null.clone();
            let critical = critical_value(&mut sorted, confidence).unwrap();
            assert!(critical >= previous, "confidence {}: {} < {}", confidence, critical, previous);
            previous = critical;
        }
    }

    #[test]
    fn test_idempotent() {
        let null = [0.3, -1.2, 2.4, 0.0, 1.1, -0.7, 3.3];
        let alt = [1.4, 2.9, 3.1, 0.2, 4.4, 2.2];
        let first = evaluate(&null, &alt, 0.7).unwrap();
        let second = evaluate(&null, &alt, 0.7).unwrap();
        assert_eq!(first, second);
    }
}
