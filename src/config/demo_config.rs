use serde::{Deserialize, Serialize};

use crate::error::{PrimitiveError, Result};

/// Inputs for one driver run.
///
/// # Fields
/// - `logits`       — raw scores, one per class
/// - `target_index` — index of the correct class
/// - `text`         — sample text whose distinct tokens give `vocab_size`
///
/// `Default` is the built-in toy example the smoke harness relies on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub logits: Vec<f64>,
    pub target_index: usize,
    pub text: String,
}

impl Default for DemoConfig {
    fn default() -> Self {
        DemoConfig {
            logits: vec![1.2, -0.3, 0.7],
            target_index: 0,
            text: "hello world hello LLM".to_string(),
        }
    }
}

impl DemoConfig {
    pub fn new(logits: Vec<f64>, target_index: usize, text: impl Into<String>) -> Self {
        DemoConfig { logits, target_index, text: text.into() }
    }

    /// Serializes the config to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> Result<()> {
        let file = std::fs::File::create(path).map_err(|source| PrimitiveError::ConfigIo {
            path: path.to_string(),
            source,
        })?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self).map_err(|source| PrimitiveError::ConfigJson {
            path: path.to_string(),
            source,
        })
    }

    /// Rejects non-finite logits.
    pub fn validate(&self) -> Result<()> {
        match self.logits.iter().position(|x| !x.is_finite()) {
            Some(index) => Err(PrimitiveError::NonFiniteLogit { index, value: self.logits[index] }),
            None => Ok(()),
        }
    }

    /// Loads a config written by `save_json`. Missing fields take their
    /// default values; the result is validated.
    pub fn load_json(path: &str) -> Result<DemoConfig> {
        let file = std::fs::File::open(path).map_err(|source| PrimitiveError::ConfigIo {
            path: path.to_string(),
            source,
        })?;
        let reader = std::io::BufReader::new(file);
        let config: DemoConfig = serde_json::from_reader(reader).map_err(|source| {
            PrimitiveError::ConfigJson { path: path.to_string(), source }
        })?;
        config.validate()?;
        Ok(config)
    }
}
