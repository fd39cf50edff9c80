use serde::{Deserialize, Serialize};

use crate::model::forward::Forward;

/// Decimal digits kept in every numeric field of a `ResultRecord`.
pub const ROUND_DIGITS: i32 = 6;

/// The JSON document the driver prints once per run.
///
/// `sum_probs` is the only field the smoke harness checks; the rest are
/// informational.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultRecord {
    /// Distinct tokens in the driver's sample text.
    pub vocab_size: usize,
    pub probs: Vec<f64>,
    pub loss: f64,
    pub sum_probs: f64,
}

impl ResultRecord {
    /// Builds the record from a forward pass. `sum_probs` is summed before
    /// rounding, then rounded like the other fields.
    pub fn new(forward: &Forward, vocab_size: usize) -> Self {
        ResultRecord {
            vocab_size,
            probs: forward.probs.iter().map(|&p| round(p)).collect(),
            loss: round(forward.loss),
            sum_probs: round(forward.sum_probs()),
        }
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Rounds to `ROUND_DIGITS` decimal places.
pub fn round(x: f64) -> f64 {
    let scale = 10f64.powi(ROUND_DIGITS);
    (x * scale).round() / scale
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::forward::forward;

    #[test]
    fn rounds_to_six_digits() {
        assert_eq!(round(0.1234564), 0.123456);
        assert_eq!(round(0.1234566), 0.123457);
        assert_eq!(round(-2.5e-7), -0.0);
        assert_eq!(round(1.0), 1.0);
    }

    #[test]
    fn demo_record_matches_reference_output() {
        let out = forward(&[1.2, -0.3, 0.7], 0).unwrap();
        let record = ResultRecord::new(&out, 3);
        assert_eq!(record.probs, vec![0.546549, 0.121952, 0.331499]);
        assert_eq!(record.loss, 0.604131);
        assert_eq!(record.sum_probs, 1.0);
        assert_eq!(record.vocab_size, 3);
    }

    #[test]
    fn json_carries_the_field_names_the_harness_reads() {
        let out = forward(&[0.0, 0.0], 1).unwrap();
        let json = ResultRecord::new(&out, 0).to_json_pretty().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["sum_probs"].as_f64(), Some(1.0));
        assert_eq!(value["probs"].as_array().map(Vec::len), Some(2));
        assert_eq!(value["vocab_size"].as_u64(), Some(0));
        assert!(value["loss"].is_f64());
    }
}
