pub mod math;
pub mod activation;
pub mod loss;
pub mod model;
pub mod text;
pub mod report;
pub mod config;
pub mod error;
pub mod logging;

// Convenience re-exports
pub use activation::softmax::Softmax;
pub use loss::cross_entropy::CrossEntropyLoss;
pub use model::forward::{forward, Forward};
pub use text::tokenizer::{tokenize, vocab_size};
pub use report::record::ResultRecord;
pub use config::demo_config::DemoConfig;
pub use error::{PrimitiveError, Result};
