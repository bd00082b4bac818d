// src/parser/whitespace.rs

use log::trace;

use crate::error::Result;
use super::{TextTokenizer, TokenSequence};

/// Splits text on runs of Unicode whitespace.
///
/// Empty fragments are dropped, so leading, trailing and repeated whitespace
/// never produce empty tokens. Empty or whitespace-only input yields an empty
/// sequence.
#[derive(Debug, Clone, Copy, Default)]
pub struct WhitespaceTokenizer;

impl WhitespaceTokenizer {
    pub fn new() -> Self {
        Self
    }

    pub fn split(&self, text: &str) -> TokenSequence {
        let tokens: TokenSequence = text.split_whitespace().collect();
        trace!("Tokenized {} bytes into {} words", text.len(), tokens.len());
        tokens
    }
}

impl TextTokenizer for WhitespaceTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenSequence> {
        Ok(self.split(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapses_whitespace_runs() {
        let tokens = WhitespaceTokenizer.split("A brown  fox ");
        assert_eq!(tokens.as_strs(), vec!["A", "brown", "fox"]);
    }

    #[test]
    fn test_leading_whitespace_and_mixed_separators() {
        let tokens = WhitespaceTokenizer.split("\t one\ntwo\r\n  three\u{00A0}four ");
        assert_eq!(tokens.as_strs(), vec!["one", "two", "three", "four"]);
    }

    #[test]
    fn test_empty_and_blank_input() {
        assert!(WhitespaceTokenizer.split("").is_empty());
        assert!(WhitespaceTokenizer.split(" \t\n ").is_empty());
    }

    #[test]
    fn test_punctuation_is_kept_inside_tokens() {
        let tokens = WhitespaceTokenizer.tokenize("Hello, world!").unwrap();
        assert_eq!(tokens.as_strs(), vec!["Hello,", "world!"]);
    }
}
