pub mod whitespace;

use std::ops::Index;
use std::slice::SliceIndex;
use std::sync::Arc;

use crate::error::Result;

/// Immutable, zero-indexed sequence of word tokens.
///
/// Tokens are shared `Arc<str>` values: copying a window out of the sequence
/// clones pointers, never token text, and nothing handed out can mutate it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenSequence {
    tokens: Box<[Arc<str>]>,
}

impl TokenSequence {
    pub fn new(tokens: Vec<Arc<str>>) -> Self {
        Self {
            tokens: tokens.into_boxed_slice(),
        }
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn as_slice(&self) -> &[Arc<str>] {
        &self.tokens
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Arc<str>> {
        self.tokens.iter()
    }

    pub fn get(&self, idx: usize) -> Option<&str> {
        self.tokens.get(idx).map(|t| t.as_ref())
    }

    /// Borrowed token text, in order.
    pub fn as_strs(&self) -> Vec<&str> {
        self.tokens.iter().map(|t| t.as_ref()).collect()
    }
}

impl<I: SliceIndex<[Arc<str>]>> Index<I> for TokenSequence {
    type Output = I::Output;

    fn index(&self, index: I) -> &Self::Output {
        &self.tokens[index]
    }
}

impl<S: AsRef<str>> FromIterator<S> for TokenSequence {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self::new(iter.into_iter().map(|s| Arc::from(s.as_ref())).collect())
    }
}

impl<'a> IntoIterator for &'a TokenSequence {
    type Item = &'a Arc<str>;
    type IntoIter = std::slice::Iter<'a, Arc<str>>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

pub trait TextTokenizer: Sync + Send {
    /// Split text into an ordered token sequence
    fn tokenize(&self, text: &str) -> Result<TokenSequence>;
}

pub use self::whitespace::WhitespaceTokenizer;
