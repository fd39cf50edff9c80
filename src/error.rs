use thiserror::Error;

/// Result type for logit-primitives operations.
pub type Result<T> = std::result::Result<T, PrimitiveError>;

#[derive(Debug, Error)]
pub enum PrimitiveError {
    /// The target class does not exist in the distribution.
    #[error("target index {index} out of range for {len} classes")]
    IndexOutOfRange { index: usize, len: usize },

    /// A logit that is `inf` or `NaN`.
    #[error("invalid logit `{value}` at index {index}: logits must be finite")]
    NonFiniteLogit { index: usize, value: f64 },

    #[error("failed to read config {path}: {source}")]
    ConfigIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {path}: {source}")]
    ConfigJson {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}
