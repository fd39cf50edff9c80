use std::collections::HashSet;

/// Naive whitespace tokenizer: trims, then splits on runs of whitespace.
///
/// The iterator is lazy and `Clone`, so the same text can be walked twice.
pub fn tokenize(text: &str) -> impl Iterator<Item = &str> + Clone {
    text.trim().split_whitespace()
}

/// Number of distinct tokens.
pub fn vocab_size<'a>(tokens: impl IntoIterator<Item = &'a str>) -> usize {
    tokens.into_iter().collect::<HashSet<_>>().len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_whitespace_preserving_order_and_case() {
        let tokens: Vec<_> = tokenize("  hello\tWorld \n hello  LLM ").collect();
        assert_eq!(tokens, vec!["hello", "World", "hello", "LLM"]);
    }

    #[test]
    fn blank_text_has_no_tokens() {
        assert_eq!(tokenize("   \n").count(), 0);
    }

    #[test]
    fn tokens_can_be_walked_twice() {
        let tokens = tokenize("a b c");
        assert_eq!(tokens.clone().count(), 3);
        assert_eq!(tokens.last(), Some("c"));
    }

    #[test]
    fn vocab_counts_distinct_tokens() {
        assert_eq!(vocab_size(tokenize("hello world hello LLM")), 3);
        assert_eq!(vocab_size(tokenize("Hello hello")), 2);
        assert_eq!(vocab_size(tokenize("")), 0);
    }
}
