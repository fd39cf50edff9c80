use crate::activation::softmax::Softmax;
use crate::error::Result;
use crate::loss::cross_entropy::CrossEntropyLoss;

/// Output of one forward pass: the softmax distribution and its loss.
#[derive(Debug, Clone, PartialEq)]
pub struct Forward {
    pub probs: Vec<f64>,
    pub loss: f64,
}

impl Forward {
    pub fn sum_probs(&self) -> f64 {
        self.probs.iter().sum()
    }
}

/// Softmax over `logits`, then cross-entropy against `target`.
pub fn forward(logits: &[f64], target: usize) -> Result<Forward> {
    let probs = Softmax::apply(logits);
    let loss = CrossEntropyLoss::loss(&probs, target)?;
    Ok(Forward { probs, loss })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PrimitiveError;

    #[test]
    fn demo_example_end_to_end() {
        let out = forward(&[1.2, -0.3, 0.7], 0).unwrap();
        let expected = [0.5465, 0.1220, 0.3315];
        for (p, e) in out.probs.iter().zip(expected.iter()) {
            assert!((p - e).abs() < 5e-5, "got {p}, expected {e}");
        }
        assert!((out.loss - 0.6041).abs() < 5e-5, "loss = {}", out.loss);
        assert!((out.sum_probs() - 1.0).abs() <= 1e-9);
    }

    #[test]
    fn empty_logits_fail_at_the_loss() {
        let err = forward(&[], 0).unwrap_err();
        assert!(matches!(err, PrimitiveError::IndexOutOfRange { index: 0, len: 0 }));
    }

    #[test]
    fn degenerate_logits_still_produce_a_finite_loss() {
        let out = forward(&[f64::NEG_INFINITY, f64::NEG_INFINITY], 1).unwrap();
        assert_eq!(out.probs, vec![0.0, 0.0]);
        assert!(out.loss.is_finite());
    }
}
