//! ngrammer extracts contiguous word n-grams from text.
//! A text is tokenized once into an immutable sequence; windows of any gram
//! size, or of a whole range of sizes, are then produced in bulk from it.

// Module declarations
pub mod error;
pub mod parser;
pub mod ngram;
pub mod config;
pub mod output;

// Re-exports
pub use error::{Error, Result};
pub use ngram::{GramRange, NGram, NGramExtractor};
pub use parser::{TextTokenizer, TokenSequence, WhitespaceTokenizer};

// Re-export the config from config module
pub use config::NgramConfig;
