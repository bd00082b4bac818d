use thiserror::Error;
use std::io;

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Tokenization error: {0}")]
    Tokenization(String),

    #[error("Invalid ngram size: n = {n} must be between 1 and the token count ({token_count})")]
    InvalidNgramSize { n: usize, token_count: usize },

    #[error("Invalid ngram range: {min}..={max} (lower bound must be at least 1 and not exceed the upper bound)")]
    InvalidNgramRange { min: usize, max: usize },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Parallel execution error: {0}")]
    Parallel(String),
}

// Type alias for Result
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions for common error conversions
impl Error {
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Error::Config(msg.into())
    }

    pub fn tokenization<S: Into<String>>(msg: S) -> Self {
        Error::Tokenization(msg.into())
    }

    pub fn parallel<S: Into<String>>(msg: S) -> Self {
        Error::Parallel(msg.into())
    }

    /// True for errors caused by a bad gram size or gram range argument.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            Error::InvalidNgramSize { .. } | Error::InvalidNgramRange { .. }
        )
    }
}

impl From<rayon::ThreadPoolBuildError> for Error {
    fn from(err: rayon::ThreadPoolBuildError) -> Self {
        Error::Parallel(format!("Thread pool build failed: {}", err))
    }
}
