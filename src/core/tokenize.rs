//! Query Tokenization
//!
//! Lowercases a raw query and splits it on word boundaries into an ordered,
//! finite token sequence. The tokenizer is stateless: one instance is
//! created at startup and shared by reference across concurrent requests.

use unicode_segmentation::UnicodeSegmentation;

/// Word tokenizer for search queries.
#[derive(Debug, Clone, Copy, Default)]
pub struct Tokenizer;

impl Tokenizer {
    pub fn new() -> Self {
        Self
    }

    /// Tokenize a query into lowercase words.
    ///
    /// Splits on whitespace and punctuation boundaries; punctuation-only
    /// segments are dropped. Empty input yields an empty sequence.
    pub fn tokenize(&self, query: &str) -> Tokens {
        let lowered = query.to_lowercase();
        let words: Vec<String> = lowered
            .unicode_words()
            .map(|w| w.to_string())
            .collect();
        Tokens {
            words: words.into_iter(),
        }
    }
}

/// Ordered, finite, non-restartable token sequence.
#[derive(Debug)]
pub struct Tokens {
    words: std::vec::IntoIter<String>,
}

impl Iterator for Tokens {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        self.words.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.words.size_hint()
    }
}
