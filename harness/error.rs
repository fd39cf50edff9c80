use std::path::PathBuf;

use thiserror::Error;

/// Every way a smoke run can fail. Each variant maps to harness exit code 1.
#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("Could not locate the driver binary: {0}")]
    Locate(#[source] std::io::Error),

    #[error("Could not start driver {}: {source}", .program.display())]
    Spawn {
        program: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed while waiting for the driver: {0}")]
    Wait(#[source] std::io::Error),

    #[error("Driver did not exit within {secs}s and was killed")]
    Timeout { secs: u64 },

    #[error("Driver exited non-zero ({})", .code.map_or_else(|| "killed by signal".to_string(), |c| c.to_string()))]
    NonZeroExit { code: Option<i32>, stderr: String },

    #[error("Output not JSON: {source}")]
    NotJson {
        #[source]
        source: serde_json::Error,
        stdout: String,
    },

    #[error("softmax probs sum to {sum}, expected 1.0")]
    SumMismatch { sum: f64 },
}

impl HarnessError {
    /// Captured driver output worth echoing after the failure marker.
    pub fn detail(&self) -> Option<&str> {
        match self {
            HarnessError::NonZeroExit { stderr, .. } => Some(stderr),
            HarnessError::NotJson { stdout, .. } => Some(stdout),
            _ => None,
        }
    }
}
