pub mod tokenizer;

pub use tokenizer::{tokenize, vocab_size};
