/// Default absolute tolerance for float comparisons.
pub const DEFAULT_EPS: f64 = 1e-9;

/// True iff |a - b| <= eps.
pub fn approx(a: f64, b: f64, eps: f64) -> bool {
    (a - b).abs() <= eps
}
