// src/ngram/generator/range.rs

use log::debug;

use crate::error::Result;
use crate::ngram::{GramRange, NGram};

use super::core::NGramExtractor;

impl NGramExtractor {
    /// Windows of every size from `min` to `max` inclusive, ordered first by
    /// size and then by start index.
    ///
    /// All arguments are checked before any window is built, so a failing
    /// call never yields partial output.
    pub fn extract_range(&self, min: usize, max: usize) -> Result<Vec<NGram>> {
        let total_windows = self.count_range(min, max)?;

        let mut ngrams = Vec::with_capacity(total_windows);
        for n in min..=max {
            self.push_windows(n, &mut ngrams);
        }

        debug!("Generated {} ngrams for sizes {}..={}", ngrams.len(), min, max);
        Ok(ngrams)
    }

    /// Windows of every size from 1 up to `max`.
    ///
    /// The lone argument is an upper bound: `extract_up_to(3)` yields
    /// unigrams, bigrams and trigrams. Use [`extract_size`](Self::extract_size)
    /// or `extract_range(n, n)` for a single size.
    pub fn extract_up_to(&self, max: usize) -> Result<Vec<NGram>> {
        self.extract_range(1, max)
    }

    pub fn extract(&self, range: GramRange) -> Result<Vec<NGram>> {
        self.extract_range(range.min, range.max)
    }
}
