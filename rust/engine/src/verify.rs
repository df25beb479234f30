use tracing::warn;

use crate::distribution::ExactDistribution;
use crate::errors::EngineError;

/// Decimal digits the sum is rounded to before comparing against 1.
pub const SUM_PRECISION_DIGITS: i32 = 10;

/// An exact distribution whose probabilities have been checked to sum to 1.
/// Only [`verify`] produces one.
#[derive(Debug, Clone, PartialEq)]
pub struct VerifiedDistribution(ExactDistribution);

impl VerifiedDistribution {
    pub fn distribution(&self) -> &ExactDistribution {
        &self.0
    }

    pub fn into_inner(self) -> ExactDistribution {
        self.0
    }
}

impl std::ops::Deref for VerifiedDistribution {
    type Target = ExactDistribution;

    fn deref(&self) -> &ExactDistribution {
        &self.0
    }
}

/// Rounds `value` half away from zero to `digits` decimal places.
pub fn round_to(value: f64, digits: i32) -> f64 {
    let scale = 10f64.powi(digits);
    (value * scale).round() / scale
}

/// Accepts `dist` only if its total rounds to exactly 1.
///
/// # Errors
///
/// [`EngineError::InvariantViolation`] carrying the computed (unrounded) sum,
/// `s` and `h`.
pub fn verify(dist: ExactDistribution) -> Result<VerifiedDistribution, EngineError> {
    let sum = dist.total();
    if round_to(sum, SUM_PRECISION_DIGITS) != 1.0 {
        warn!(sum, s = dist.targets(), h = dist.hand_size(), "distribution does not sum to 1");
        return Err(EngineError::InvariantViolation {
            sum,
            s: dist.targets(),
            h: dist.hand_size(),
        });
    }
    Ok(VerifiedDistribution(dist))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_sum_within_rounding() {
        let dist = ExactDistribution::from_parts(3, vec![0.25, 0.5, 0.25 - 1e-13]);
        let verified = verify(dist).unwrap();
        assert_eq!(verified.hand_size(), 2);
    }

    #[test]
    fn rejects_sum_off_by_more_than_tolerance() {
        let dist = ExactDistribution::from_parts(3, vec![0.25, 0.5, 0.125]);
        let err = verify(dist).unwrap_err();
        assert_eq!(
            err,
            EngineError::InvariantViolation {
                sum: 0.875,
                s: 3,
                h: 2
            }
        );
        assert!(err.is_defect());
    }

    #[test]
    fn rejects_sum_above_one() {
        let dist = ExactDistribution::from_parts(1, vec![0.6, 0.6]);
        assert!(matches!(
            verify(dist),
            Err(EngineError::InvariantViolation { .. })
        ));
    }

    #[test]
    fn round_to_ten_digits() {
        assert_eq!(round_to(0.999_999_999_999_9, 10), 1.0);
        assert_eq!(round_to(0.999_999_999, 10), 0.999_999_999);
    }

    #[test]
    fn reports_sum_before_rounding() {
        let values = vec![0.5, 0.5, 1.23e-9];
        let computed = ExactDistribution::from_parts(3, values.clone()).total();
        let err = verify(ExactDistribution::from_parts(3, values)).unwrap_err();
        match err {
            EngineError::InvariantViolation { sum, .. } => {
                assert_eq!(sum, computed);
                assert_ne!(sum, round_to(computed, SUM_PRECISION_DIGITS));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
