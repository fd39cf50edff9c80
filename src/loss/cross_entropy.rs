use crate::error::{PrimitiveError, Result};

/// Categorical cross-entropy against a single target class, for use on the
/// output of `Softmax::apply`.
pub struct CrossEntropyLoss;

/// Clamp bound keeping the probability away from 0 and 1, so ln() stays finite.
pub const EPS: f64 = 1e-12;

impl CrossEntropyLoss {
    /// Computes the scalar loss:
    ///   L = -ln(clamp(predicted[target], ε, 1 - ε))
    ///
    /// `predicted` — softmax probabilities, shape [n_classes]
    /// `target`    — index of the correct class
    ///
    /// Fails with `IndexOutOfRange` when `target >= predicted.len()`.
    pub fn loss(predicted: &[f64], target: usize) -> Result<f64> {
        let p = predicted
            .get(target)
            .copied()
            .ok_or(PrimitiveError::IndexOutOfRange { index: target, len: predicted.len() })?;
        Ok(-p.clamp(EPS, 1.0 - EPS).ln())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loss_is_negative_log_of_target_probability() {
        let loss = CrossEntropyLoss::loss(&[0.25, 0.5, 0.25], 1).unwrap();
        assert!((loss - 2.0_f64.ln()).abs() < 1e-12);
    }

    #[test]
    fn loss_decreases_as_target_probability_grows() {
        let mut last = f64::INFINITY;
        for p in [0.01, 0.1, 0.3, 0.5, 0.7, 0.9, 0.99] {
            let loss = CrossEntropyLoss::loss(&[p, 1.0 - p], 0).unwrap();
            assert!(loss < last, "loss {loss} at p = {p} is not below {last}");
            last = loss;
        }
    }

    #[test]
    fn zero_probability_is_clamped_to_finite_loss() {
        let loss = CrossEntropyLoss::loss(&[0.0, 1.0], 0).unwrap();
        assert!(loss.is_finite());
        assert!((loss - (-EPS.ln())).abs() < 1e-9);
    }

    #[test]
    fn certain_prediction_still_gives_non_negative_loss() {
        let loss = CrossEntropyLoss::loss(&[1.0, 0.0], 0).unwrap();
        assert!(loss.is_finite());
        assert!(loss >= 0.0);
        assert!(loss < 1e-11);
    }

    #[test]
    fn out_of_range_target_is_an_error() {
        let err = CrossEntropyLoss::loss(&[0.5, 0.5], 2).unwrap_err();
        assert!(matches!(err, PrimitiveError::IndexOutOfRange { index: 2, len: 2 }));
        assert_eq!(err.to_string(), "target index 2 out of range for 2 classes");
    }

    #[test]
    fn empty_distribution_rejects_every_target() {
        assert!(CrossEntropyLoss::loss(&[], 0).is_err());
    }
}
