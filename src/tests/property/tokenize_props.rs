//! Property-based tests for tokenization
//!
//! Tests invariants:
//! - Tokens are lowercase
//! - Tokens never contain whitespace
//! - Tokenization never panics on arbitrary input
//! - Tokenizing twice yields the same sequence

use proptest::prelude::*;

use crate::core::tokenize::Tokenizer;

proptest! {
    #[test]
    fn tokens_are_lowercase(query in "[ -~]{0,200}") {
        let tokenizer = Tokenizer::new();
        for token in tokenizer.tokenize(&query) {
            prop_assert!(!token.chars().any(|c| c.is_ascii_uppercase()));
        }
    }

    #[test]
    fn tokens_contain_no_whitespace(query in ".{0,200}") {
        let tokenizer = Tokenizer::new();
        for token in tokenizer.tokenize(&query) {
            prop_assert!(!token.contains(char::is_whitespace));
            prop_assert!(!token.is_empty());
        }
    }

    #[test]
    fn tokenization_is_deterministic(query in ".{0,200}") {
        let tokenizer = Tokenizer::new();
        let first: Vec<String> = tokenizer.tokenize(&query).collect();
        let second: Vec<String> = tokenizer.tokenize(&query).collect();
        prop_assert_eq!(first, second);
    }
}
