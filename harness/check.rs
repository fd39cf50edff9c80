use logit_primitives::math::approx::{approx, DEFAULT_EPS};
use serde_json::Value;

use crate::error::HarnessError;
use crate::runner::RunOutput;

/// Checks a finished driver run, in order: exit code, JSON shape, then
/// `sum_probs ≈ 1.0`. Returns the sum on success.
///
/// A non-zero exit fails before stdout is looked at. A missing or
/// non-numeric `sum_probs` reads as 0.0 and so fails the sum check.
pub fn validate(run: &RunOutput) -> Result<f64, HarnessError> {
    if run.code != Some(0) {
        return Err(HarnessError::NonZeroExit { code: run.code, stderr: run.stderr.clone() });
    }

    let record: Value = serde_json::from_str(&run.stdout)
        .map_err(|source| HarnessError::NotJson { source, stdout: run.stdout.clone() })?;

    let sum = record.get("sum_probs").and_then(Value::as_f64).unwrap_or(0.0);
    if !approx(sum, 1.0, DEFAULT_EPS) {
        return Err(HarnessError::SumMismatch { sum });
    }
    Ok(sum)
}
