// src/ngram/generator/core.rs

use std::sync::Arc;
use log::{debug, trace};

use crate::config::subsystems::ExtractorConfig;
use crate::error::{Error, Result};
use crate::ngram::GramRange;
use crate::parser::{TextTokenizer, TokenSequence, WhitespaceTokenizer};

// Constants for performance tuning
pub const MIN_PARALLEL_THRESHOLD: usize = 500_000;

/// Extracts contiguous word n-grams from a token sequence.
///
/// The sequence is built once at construction and never modified. Every
/// extraction call is a pure function of the stored tokens and its arguments,
/// so one extractor can be shared across threads and queried repeatedly.
///
/// ```
/// use ngrammer::ngram::NGramExtractor;
///
/// let extractor = NGramExtractor::new("A brown fox");
/// let bigrams = extractor.extract_size(2).unwrap();
/// assert_eq!(bigrams[0], ["A", "brown"]);
/// assert_eq!(bigrams[1], ["brown", "fox"]);
/// ```
#[derive(Debug, Clone)]
pub struct NGramExtractor {
    pub(crate) tokens: TokenSequence,
    pub(crate) config: ExtractorConfig,
    pub(crate) thread_pool: Option<Arc<rayon::ThreadPool>>,
}

impl NGramExtractor {
    /// Tokenize `text` on whitespace and take ownership of the tokens.
    pub fn new(text: &str) -> Self {
        Self::from_tokens(WhitespaceTokenizer.split(text))
    }

    pub fn with_tokenizer<T: TextTokenizer + ?Sized>(text: &str, tokenizer: &T) -> Result<Self> {
        let tokens = tokenizer.tokenize(text)?;
        Ok(Self::from_tokens(tokens))
    }

    pub fn from_tokens(tokens: TokenSequence) -> Self {
        trace!("Creating extractor over {} tokens", tokens.len());
        Self {
            tokens,
            config: ExtractorConfig::default(),
            thread_pool: None,
        }
    }

    /// Replace the parallelism settings, building a dedicated worker pool
    /// when `thread_count` is set.
    pub fn with_config(mut self, config: ExtractorConfig) -> Result<Self> {
        config.validate()?;
        self.thread_pool = Self::build_thread_pool(&config)?;
        self.config = config;
        Ok(self)
    }

    pub fn tokens(&self) -> &TokenSequence {
        &self.tokens
    }

    pub fn token_count(&self) -> usize {
        self.tokens.len()
    }

    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Number of windows `extract_size(n)` would return.
    pub fn count_size(&self, n: usize) -> Result<usize> {
        self.check_size(n)?;
        Ok(self.tokens.len() - n + 1)
    }

    /// Number of windows `extract_range(min, max)` would return.
    pub fn count_range(&self, min: usize, max: usize) -> Result<usize> {
        self.check_range(min, max)?;
        let token_count = self.tokens.len();
        Ok((min..=max).map(|n| token_count - n + 1).sum())
    }

    pub(crate) fn check_size(&self, n: usize) -> Result<()> {
        let token_count = self.tokens.len();
        if n < 1 || n > token_count {
            debug!("Rejecting ngram size {} for {} tokens", n, token_count);
            return Err(Error::InvalidNgramSize { n, token_count });
        }
        Ok(())
    }

    // Every size in the range is valid iff the bounds are ordered and max fits
    pub(crate) fn check_range(&self, min: usize, max: usize) -> Result<()> {
        GramRange::new(min, max).validate()?;
        self.check_size(max)
    }
}

impl From<TokenSequence> for NGramExtractor {
    fn from(tokens: TokenSequence) -> Self {
        Self::from_tokens(tokens)
    }
}
