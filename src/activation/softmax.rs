/// Vector-valued softmax over one set of logits.
pub struct Softmax;

impl Softmax {
    /// Computes softmax(x)_i = exp(x_i - max(x)) / sum_j exp(x_j - max(x)).
    ///
    /// Subtracting the maximum keeps every exponent <= 0, so large logits
    /// cannot overflow.
    ///
    /// Degenerate inputs never divide by zero:
    /// - empty logits give an empty distribution
    /// - a zero sum of exponentials gives zeros of the same length
    pub fn apply(logits: &[f64]) -> Vec<f64> {
        let max = logits.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        // All -inf (or empty): shift by 0 so exp(-inf) = 0 lands in the zero-sum case.
        let shift = if max.is_finite() { max } else { 0.0 };

        let exps: Vec<f64> = logits.iter().map(|x| (x - shift).exp()).collect();
        let sum: f64 = exps.iter().sum();

        if sum == 0.0 {
            return vec![0.0; logits.len()];
        }
        exps.into_iter().map(|e| e / sum).collect()
    }
}
