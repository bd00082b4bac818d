// src/ngram/generator/word_ngrams.rs

use std::iter::FusedIterator;
use std::sync::Arc;
use log::{debug, trace};

use crate::error::Result;
use crate::ngram::NGram;

use super::core::NGramExtractor;

/// Borrowed windows of one gram size, in start-index order.
#[derive(Debug, Clone)]
pub struct Windows<'a> {
    inner: std::slice::Windows<'a, Arc<str>>,
}

impl<'a> Iterator for Windows<'a> {
    type Item = &'a [Arc<str>];

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Windows<'_> {}

impl FusedIterator for Windows<'_> {}

impl NGramExtractor {
    /// All windows of exactly `n` tokens, as owned copies, ordered by start
    /// index.
    ///
    /// Fails with [`Error::InvalidNgramSize`](crate::Error::InvalidNgramSize)
    /// when `n` is 0 or exceeds the token count.
    pub fn extract_size(&self, n: usize) -> Result<Vec<NGram>> {
        let total_windows = self.count_size(n)?;
        trace!("Will generate {} word-based {}-grams", total_windows, n);

        let mut ngrams = Vec::with_capacity(total_windows);
        self.push_windows(n, &mut ngrams);

        debug!("Generated {} word-based {}-grams", ngrams.len(), n);
        Ok(ngrams)
    }

    /// Borrowing view over the windows of size `n`; no token is copied.
    pub fn windows(&self, n: usize) -> Result<Windows<'_>> {
        self.check_size(n)?;
        Ok(Windows {
            inner: self.tokens.as_slice().windows(n),
        })
    }

    /// Append every window of size `n` to `out`. `n` must already be checked.
    pub(crate) fn push_windows(&self, n: usize, out: &mut Vec<NGram>) {
        let total_windows = self.tokens.len() - n + 1;
        if self.should_parallelize(total_windows) {
            self.push_windows_parallel(n, out);
        } else {
            push_windows_sequential(self.tokens.as_slice(), n, out);
        }
    }
}

pub(crate) fn push_windows_sequential(tokens: &[Arc<str>], n: usize, out: &mut Vec<NGram>) {
    let total_windows = tokens.len() - n + 1;
    out.reserve(total_windows);
    for window_start in 0..total_windows {
        out.push(NGram::from_window(&tokens[window_start..window_start + n]));
    }
}
